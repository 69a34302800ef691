//! Semigroup trait for accumulating failures
//!
//! [`Validation::and`](crate::Validation::and) and
//! [`Validation::all_vec`](crate::Validation::all_vec) need a way to merge two
//! failure payloads into one. Any type with an associative `combine` will do:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! The usual choice is `Vec<Divergence>`, which collects every failed
//! assertion in order.
//!
//! # Examples
//!
//! ```
//! use alright::{assertion::equals, Assertion, Validation};
//!
//! let report = Validation::all_vec(vec![
//!     equals(1).check(&1).map_err(|d| vec![d]),
//!     equals(2).check(&3).map_err(|d| vec![d]),
//!     equals(4).check(&5).map_err(|d| vec![d]),
//! ]);
//!
//! assert_eq!(report.get_failure().map(Vec::len), Ok(2));
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both sides by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_vec_associative(
            a in prop::collection::vec(any::<i32>(), 0..8),
            b in prop::collection::vec(any::<i32>(), 0..8),
            c in prop::collection::vec(any::<i32>(), 0..8),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_string_associative(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
