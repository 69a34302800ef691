//! Property-based tests for the built-in assertions

use alright::assertion::*;
use alright::{Validation, Value};

#[test]
fn assert_true_reads_back_divergence() {
    let v = assert(true, "D");
    assert!(v.is_success());
    assert_eq!(v.get(), Ok(&"D"));
}

#[test]
fn assert_false_swaps_back_to_divergence() {
    let v = assert(false, "D");
    assert!(v.is_failure());
    assert_eq!(v.swap().get(), Ok(&"D"));
}

#[test]
fn equals_respects_element_order() {
    assert!(equals(Value::array([1, 2]))
        .check(&Value::array([1, 2]))
        .is_success());
    assert!(equals(Value::array([1, 2]))
        .check(&Value::array([2, 1]))
        .is_failure());
}

#[test]
fn verify_collects_into_result() {
    let outcomes: Vec<Validation<_, _>> = vec![
        has("a").check(&Value::object([("a", 1)])),
        is_of_type(alright::TypeTag::String).check(&Value::from("s")),
    ];
    for outcome in outcomes {
        assert!(verify(outcome).is_ok());
    }
}

// Properties run over the crate's own value strategy (proptest feature only)

#[cfg(feature = "proptest")]
mod proptests {
    use super::*;
    use alright::testing::any_value;
    use proptest::prelude::*;

    fn contains_empty_object(items: &[Value]) -> bool {
        items.iter().any(|v| *v == Value::empty_object())
    }

    proptest! {
        #[test]
        fn prop_equals_is_reflexive(a in any_value(), b in any_value()) {
            prop_assert!(equals(a.clone()).check(&a).is_success());
            prop_assert!(equals(b.clone()).check(&b).is_success());
        }

        #[test]
        fn prop_equals_follows_deep_equality(a in any_value(), b in any_value()) {
            prop_assert_eq!(equals(a.clone()).check(&b).is_success(), a == b);
        }

        #[test]
        fn prop_equals_sees_through_rebuilt_containers(items in prop::collection::vec(any_value(), 0..6)) {
            let a = Value::array(items.clone());
            let b = Value::array(items);
            prop_assert!(equals(a.clone()).check(&b).is_success());
            prop_assert!(strict_equals(a).check(&b).is_failure());
        }

        #[test]
        fn prop_strict_equals_matches_identity(a in any_value(), b in any_value()) {
            prop_assert_eq!(strict_equals(a.clone()).check(&a).is_success(), a.strict_eq(&a));
            prop_assert_eq!(strict_equals(b.clone()).check(&b).is_success(), b.strict_eq(&b));
            prop_assert_eq!(strict_equals(a.clone()).check(&b).is_success(), a.strict_eq(&b));
        }

        #[test]
        fn prop_ok_follows_truthiness(a in any_value()) {
            prop_assert_eq!(ok(&a).is_success(), a.is_truthy());
        }

        #[test]
        fn prop_type_of_always_checks(a in any_value()) {
            prop_assert!(is_of_type(a.type_of()).check(&a).is_success());
        }

        #[test]
        fn prop_type_name_roundtrips(a in any_value()) {
            let tag = a.type_of().to_string().parse().unwrap();
            prop_assert!(is_of_type(tag).check(&a).is_success());
        }

        #[test]
        fn prop_class_of_always_checks(a in any_value()) {
            prop_assert!(is_of_class(a.class_of()).check(&a).is_success());
            let class = a.class_of().to_string().parse().unwrap();
            prop_assert!(is_of_class(class).check(&a).is_success());
        }

        #[test]
        fn prop_contains_picked_element(
            items in prop::collection::vec(any_value(), 1..10),
            seed in any::<prop::sample::Index>(),
        ) {
            let picked = items[seed.index(items.len())].clone();
            let list = Value::array(items.clone());
            prop_assert!(contains(picked.clone()).check(&list).is_success());
            prop_assert!(contains(picked).check(&items).is_success());
        }

        #[test]
        fn prop_contains_absent_empty_object(items in prop::collection::vec(any_value(), 1..10)) {
            prop_assume!(!contains_empty_object(&items));
            let list = Value::array(items);
            prop_assert!(contains(Value::empty_object()).check(&list).is_failure());
        }

        #[test]
        fn prop_has_matches_own_keys(
            entries in prop::collection::btree_map("[a-z]{1,3}", any::<i32>(), 0..10),
            extra in prop::collection::vec("[a-z]{1,3}", 0..10),
            seed in any::<prop::sample::Index>(),
        ) {
            let mut keys: Vec<String> = entries.keys().cloned().chain(extra).collect();
            prop_assume!(!keys.is_empty());
            let key = keys.swap_remove(seed.index(keys.len()));
            let expected = entries.contains_key(&key);

            let object = Value::object(entries.clone());
            prop_assert_eq!(has(key.clone()).check(&object).is_success(), expected);
            prop_assert_eq!(has(key).check(&entries).is_success(), expected);
        }

        #[test]
        fn prop_not_inverts_outcome(a in any_value(), b in any_value()) {
            let plain = equals(a.clone()).check(&b);
            let negated = not(equals(a)).check(&b);
            prop_assert_eq!(plain.is_success(), negated.is_failure());
            prop_assert_eq!(plain.into_inner(), negated.into_inner().invert());
        }

        #[test]
        fn prop_swap_is_involution(a in any_value(), b in any_value()) {
            let v = equals(a).check(&b);
            prop_assert_eq!(v.clone().swap().swap(), v);
        }

        #[test]
        fn prop_assert_carries_divergence(cond in any::<bool>(), tag in "[a-z]{1,8}") {
            let v = assert(cond, tag.clone());
            prop_assert_eq!(v.is_success(), cond);
            let read = if cond { v.get() } else { v.get_failure() };
            prop_assert_eq!(read, Ok(&tag));
        }
    }

    proptest! {
        #[test]
        fn prop_arbitrary_value_equals_itself(a in any::<Value>()) {
            prop_assert!(equals(a.clone()).check(&a).is_success());
        }

        #[test]
        fn prop_arbitrary_outcome_has_one_branch(v in any::<Validation<i32, String>>()) {
            prop_assert_ne!(v.is_success(), v.is_failure());
        }
    }
}
