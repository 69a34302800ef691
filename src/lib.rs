//! # Alright
//!
//! Assertions as values.
//!
//! Every assertion in this crate returns a [`Validation`]: `Success` when the
//! predicate holds, `Failure` when it does not. Nothing panics and nothing is
//! thrown for a false predicate; the outcome is data that can be inspected,
//! combined, negated or, when the caller wants an error, [verified](assertion::verify).
//!
//! ## Quick Example
//!
//! ```rust
//! use alright::prelude::*;
//!
//! let config = Value::object([("port", Value::from(8080)), ("host", Value::from(""))]);
//!
//! let report = Validation::all_vec(vec![
//!     has("port").check(&config).map_err(|d| vec![d]),
//!     has("tls").check(&config).map_err(|d| vec![d]),
//!     ok(config.get("host").unwrap_or(&Value::Undefined)).map_err(|d| vec![d]),
//! ]);
//!
//! match report {
//!     Validation::Success(_) => println!("config ok"),
//!     Validation::Failure(divergences) => {
//!         assert_eq!(divergences.len(), 2);
//!         for d in &divergences {
//!             println!("{}", d);
//!         }
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `proptest`: `Arbitrary` instances for [`Validation`] and [`Value`]
//! - `serde`: serialization for [`Validation`], [`Divergence`] and [`Value`]
//! - `tracing`: debug-level logging of failures in [`assertion::verify`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assertion;
pub mod divergence;
pub mod error;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod value;

// Re-exports
pub use assertion::{Assertion, AssertionExt, Outcome};
pub use divergence::Divergence;
pub use error::{AssertionError, InvalidStateError};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use value::{Class, TypeTag, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertion::{
        assert, contains, equals, has, is_of_class, is_of_type, matches, not, ok, strict_equals,
        truthy, verify, Assertion, AssertionExt, Outcome,
    };
    pub use crate::divergence::Divergence;
    pub use crate::error::{AssertionError, InvalidStateError};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::value::{Class, Truthiness, TypeTag, Value};
}
