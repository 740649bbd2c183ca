//! Properties that hold for every value

use core_types::{JsValue, Realm};
use proptest::prelude::*;
use std::collections::HashSet;
use std::thread;
use type_guards::{object_type_name, type_tag, Guard, TypeTag};

use super::sample_values;

#[test]
fn test_every_value_has_one_known_tag() {
    let realm = Realm::new();
    let mut seen = HashSet::new();
    for value in sample_values(&realm) {
        let tag = type_tag(&value);
        assert!(TypeTag::ALL.contains(&tag));
        assert_eq!(object_type_name(&value), tag.as_str());
        seen.insert(tag);
    }
    // the samples cover every tag
    assert_eq!(seen.len(), TypeTag::ALL.len());
}

#[test]
fn test_values_from_other_realms() {
    let home = Realm::new();
    let other = Realm::new();

    assert!(Guard::PlainObject.check(&other.object()));
    assert!(Guard::PlainObject.check(&home.object_create(other.object().as_object())));
    assert!(Guard::Array.check(&other.array(vec![])));
    assert!(Guard::Promise.check(&other.pending_promise()));
    assert!(!Guard::PlainObject.check(&other.construct(&other.class("Widget"))));
}

#[test]
fn test_shared_values_classify_the_same_on_every_thread() {
    let realm = Realm::new();
    let values = sample_values(&realm);
    let expected: Vec<Vec<bool>> = values
        .iter()
        .map(|value| Guard::ALL.iter().map(|guard| guard.check(value)).collect())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    values
                        .iter()
                        .map(|value| Guard::ALL.iter().map(|guard| guard.check(value)).collect())
                        .collect::<Vec<Vec<bool>>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn build(realm: &Realm, shape: u8, n: f64, s: &str) -> JsValue {
    match shape % 12 {
        0 => JsValue::number(n),
        1 => realm.boxed(JsValue::number(n)),
        2 => JsValue::string(s),
        3 => realm.boxed(JsValue::string(s)),
        4 => realm.date(n),
        5 => realm.date_from_str(s),
        6 => realm.array(vec![JsValue::number(n), JsValue::string(s)]),
        7 => realm.map_from(vec![(JsValue::string(s), JsValue::number(n))]),
        8 => realm.set_from(vec![JsValue::number(n)]),
        9 => realm.promise_resolve(JsValue::number(n)),
        10 => {
            let object = realm.object();
            object.as_object().unwrap().set(s, JsValue::number(n));
            object
        }
        _ => JsValue::Boolean(n > 0.0),
    }
}

proptest! {
    #[test]
    fn prop_predicates_are_deterministic(
        shape in any::<u8>(),
        n in any::<f64>(),
        s in "\\PC{0,24}",
    ) {
        let realm = Realm::new();
        let value = build(&realm, shape, n, &s);
        for guard in Guard::ALL {
            prop_assert_eq!(guard.check(&value), guard.check(&value));
        }
        prop_assert_eq!(type_tag(&value), type_tag(&value));
    }

    #[test]
    fn prop_date_strings_never_panic(s in "\\PC{0,24}", offset in "[+-][0-9\\PC:]{0,6}") {
        let realm = Realm::new();
        for text in [s.clone(), format!("2020-10-10T00:00{offset}"), format!("{s}{offset}")] {
            let date = realm.date_from_str(&text);
            prop_assert!(Guard::Date.check(&date));
            let time = date.as_object().and_then(|d| d.time_value());
            prop_assert!(time.is_some_and(|t| t.is_nan() || t.abs() <= 8.64e15));
            prop_assert_eq!(Guard::ValidDate.check(&date), time.is_some_and(|t| !t.is_nan()));
        }
    }

    #[test]
    fn prop_failed_assertion_has_guard_message(
        shape in any::<u8>(),
        n in any::<f64>(),
        s in "\\PC{0,24}",
    ) {
        let realm = Realm::new();
        let value = build(&realm, shape, n, &s);
        for guard in Guard::ALL {
            match guard.assert(&value) {
                Ok(()) => prop_assert!(guard.check(&value)),
                Err(err) => prop_assert_eq!(err.message(), guard.message()),
            }
        }
    }

    #[test]
    fn prop_numeric_refinements_nest(n in any::<f64>()) {
        let value = JsValue::number(n);
        let safe = Guard::SafeInteger.check(&value);
        let integer = Guard::Integer.check(&value);
        let finite = Guard::FiniteNumber.check(&value);
        let strict = Guard::StrictNumber.check(&value);
        prop_assert!(!safe || integer);
        prop_assert!(!integer || finite);
        prop_assert!(!finite || strict);
        prop_assert_eq!(strict, !n.is_nan());
        prop_assert!(Guard::Number.check(&value));
    }
}
