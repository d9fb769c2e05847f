use elemental::{MemberOptions, Registry, canonical_name};
use proptest::prelude::*;

fn registry_of(size: usize) -> Registry {
    let mut builder = Registry::builder("Generated");
    for ordinal in 0..size {
        builder.register_member(format!("member_{ordinal}"), MemberOptions::new()).unwrap();
    }
    builder.build()
}

proptest! {
    #[test]
    fn canonical_name_is_idempotent(name in "[A-Za-z][A-Za-z0-9_-]{0,24}") {
        let once = canonical_name(&name);
        prop_assert_eq!(canonical_name(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_uppercase() || c == '-'));
    }

    #[test]
    fn canonical_name_is_idempotent_beyond_ascii(name in "[A-Za-zÀ-ÿΑ-ωİ\u{212A}0-9٠-٩_-]{1,24}") {
        let once = canonical_name(&name);
        prop_assert_eq!(canonical_name(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_uppercase() || c == '-'));
    }

    #[test]
    fn lookup_round_trips_ordinals(size in 1usize..40, pick in any::<prop::sample::Index>()) {
        let registry = registry_of(size);
        let ordinal = pick.index(size);
        let element = registry.lookup(ordinal).unwrap();

        prop_assert_eq!(element.ordinal(), ordinal);
        prop_assert_eq!(registry.lookup(element.name()).unwrap(), element);
        prop_assert_eq!(registry.lookup(element.value()).unwrap(), element);

        let negative = i64::try_from(ordinal).unwrap() - i64::try_from(size).unwrap();
        prop_assert_eq!(registry.lookup(negative).unwrap(), element);
    }

    #[test]
    fn succ_and_pred_are_inverse_and_cyclic(size in 1usize..40, pick in any::<prop::sample::Index>()) {
        let registry = registry_of(size);
        let element = registry.lookup(pick.index(size)).unwrap();

        prop_assert_eq!(element.succ().pred(), element);
        prop_assert_eq!(element.pred().succ(), element);

        let mut walked = element;
        for _ in 0..size {
            walked = walked.succ();
        }
        prop_assert_eq!(walked, element);
    }

    #[test]
    fn out_of_range_ordinals_fail(size in 0usize..40, offset in 0i64..1000) {
        let registry = registry_of(size);
        let len = i64::try_from(size).unwrap();

        prop_assert!(registry.lookup(len + offset).is_err());
        prop_assert!(registry.lookup(-len - 1 - offset).is_err());
    }
}
