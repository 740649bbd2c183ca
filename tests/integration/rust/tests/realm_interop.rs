//! Realm Interop Integration Tests
//!
//! Values cross realm and thread boundaries without changing classification.

use core_types::{ErrorKind, JsValue, Realm};
use integration_tests::passing_guards;
use std::sync::Arc;
use std::thread;
use type_guards::{asserts, guards, Guard};

#[test]
fn test_plain_objects_from_any_realm() {
    let main = Realm::new();
    let frame = Realm::new();

    let foreign = frame.object();
    assert!(guards::is_plain_object(&foreign));
    assert!(guards::is_plain_object(&main.object_create(foreign.as_object())));
    assert!(!guards::is_plain_object(&frame.construct(&frame.class("Local"))));
    assert_eq!(passing_guards(&foreign), passing_guards(&main.object()));
}

#[test]
fn test_builtins_from_any_realm() {
    let main = Realm::new();
    let frame = Realm::new();

    for guard in Guard::ALL {
        assert_eq!(
            guard.check(&frame.map()),
            guard.check(&main.map()),
            "{guard}"
        );
        assert_eq!(
            guard.check(&frame.error(ErrorKind::RangeError, "r")),
            guard.check(&main.error(ErrorKind::RangeError, "r")),
            "{guard}"
        );
    }
}

#[test]
fn test_failures_thrown_into_realm() {
    let frame = Realm::new();
    let err = asserts::is_weak_map(&frame.map()).unwrap_err();
    let thrown = err.to_js_error(&frame);

    assert!(guards::is_error(&thrown));
    assert!(!guards::is_plain_object(&thrown));
}

#[test]
fn test_classification_across_threads() {
    let realm = Realm::new();
    let shared = Arc::new(vec![
        realm.object(),
        realm.array(vec![JsValue::number(1.0)]),
        realm.boxed(JsValue::number(f64::NAN)),
        realm.date_from_str("20201010"),
        realm.pending_promise(),
    ]);
    let expected: Vec<Vec<&'static str>> = shared.iter().map(passing_guards).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.iter().map(passing_guards).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), expected);
    }
}

#[test]
fn test_realm_built_on_another_thread() {
    let value = thread::spawn(|| {
        let realm = Realm::new();
        realm.set_from(vec![JsValue::string("x")])
    })
    .join()
    .expect("worker panicked");

    assert!(guards::is_set(&value));
    assert_eq!(passing_guards(&value), vec!["isObject", "isSet"]);
}
