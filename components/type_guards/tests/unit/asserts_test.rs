//! Unit tests for the assertions

use core_types::{BigInt, ErrorKind, JsValue, Realm, SymbolValue};
use type_guards::{assert, asserts, AssertionError};

#[test]
fn test_assert_returns_unit() {
    assert_eq!(assert(true, "A DEFINED ERROR MESSAGE"), Ok(()));
}

#[test]
fn test_assert_fails_with_given_message() {
    let err = assert(false, "A DEFINED ERROR MESSAGE").unwrap_err();
    assert_eq!(err.to_string(), "A DEFINED ERROR MESSAGE");

    let owned = assert(false, format!("expected {} items", 3)).unwrap_err();
    assert_eq!(owned.message(), "expected 3 items");
}

#[test]
fn test_is_number() {
    assert_eq!(asserts::is_number(&JsValue::number(123.0)), Ok(123.0));
    assert!(asserts::is_number(&JsValue::number(f64::NAN))
        .unwrap()
        .is_nan());
    assert_eq!(
        asserts::is_number(&JsValue::Null),
        Err(AssertionError::new("value is not a number"))
    );
}

#[test]
fn test_numeric_assertions_narrow_wrappers() {
    let realm = Realm::new();
    let boxed = realm.boxed(JsValue::number(5.0));
    assert_eq!(asserts::is_finite_number(&boxed), Ok(5.0));
    assert_eq!(asserts::is_integer(&boxed), Ok(5.0));
    assert_eq!(asserts::is_safe_integer(&boxed), Ok(5.0));
    assert_eq!(asserts::is_strict_number(&boxed), Ok(5.0));
    assert_eq!(
        asserts::is_nan(&boxed).unwrap_err().message(),
        "value is not a NaN"
    );
}

#[test]
fn test_numeric_failures() {
    assert_eq!(
        asserts::is_finite_number(&JsValue::number(f64::INFINITY))
            .unwrap_err()
            .message(),
        "value is not a finite number"
    );
    assert_eq!(
        asserts::is_integer(&JsValue::number(0.5)).unwrap_err().message(),
        "value is not an integer"
    );
    assert_eq!(
        asserts::is_safe_integer(&JsValue::number(2f64.powi(53)))
            .unwrap_err()
            .message(),
        "value is not a safe integer"
    );
    assert_eq!(
        asserts::is_strict_number(&JsValue::number(f64::NAN))
            .unwrap_err()
            .message(),
        "value is not a strict number"
    );
}

#[test]
fn test_primitive_narrowing() {
    let sym = SymbolValue::new(Some("s".to_string()));
    let value = JsValue::Symbol(sym.clone());
    assert_eq!(asserts::is_symbol(&value), Ok(&sym));
    assert_eq!(asserts::is_string(&JsValue::string("x")), Ok("x".to_string()));
    assert_eq!(asserts::is_boolean(&JsValue::Boolean(true)), Ok(true));
    assert_eq!(
        asserts::is_big_int(&JsValue::bigint(7)),
        Ok(BigInt::from(7))
    );
}

#[test]
fn test_object_narrowing_keeps_identity() {
    let realm = Realm::new();
    let cases = [
        realm.array(vec![]),
        realm.date(0.0),
        realm.error(ErrorKind::RangeError, "out of range"),
        realm.map(),
        realm.set(),
        realm.weak_map(),
        realm.weak_set(),
        realm.pending_promise(),
        realm.regexp("a+", "g").unwrap(),
    ];
    let narrowed = [
        asserts::is_array(&cases[0]),
        asserts::is_valid_date(&cases[1]),
        asserts::is_error(&cases[2]),
        asserts::is_map(&cases[3]),
        asserts::is_set(&cases[4]),
        asserts::is_weak_map(&cases[5]),
        asserts::is_weak_set(&cases[6]),
        asserts::is_promise_like(&cases[7]),
        asserts::is_reg_exp(&cases[8]),
    ];
    for (value, handle) in cases.iter().zip(narrowed) {
        let handle = handle.unwrap();
        assert!(handle.ptr_eq(value.as_object().unwrap()));
    }
}

#[test]
fn test_object_failures() {
    let realm = Realm::new();
    let object = realm.object();
    let failures = [
        (asserts::is_array(&object), "value is not an array"),
        (asserts::is_date(&object), "value is not a Date"),
        (asserts::is_error(&object), "value is not an Error"),
        (asserts::is_function(&object), "value is not a function"),
        (
            asserts::is_generator_function(&object),
            "value is not a generator function",
        ),
        (asserts::is_map(&object), "value is not a Map"),
        (asserts::is_promise(&object), "value is not a Promise"),
        (asserts::is_promise_like(&object), "value is not a PromiseLike"),
        (asserts::is_reg_exp(&object), "value is not a RegExp"),
        (asserts::is_set(&object), "value is not a Set"),
        (asserts::is_weak_map(&object), "value is not a WeakMap"),
        (asserts::is_weak_set(&object), "value is not a WeakSet"),
    ];
    for (result, message) in failures {
        assert_eq!(result.unwrap_err().message(), message);
    }
}

#[test]
fn test_invalid_date_fails_only_validity() {
    let realm = Realm::new();
    let invalid = realm.date_from_str("20201010");
    assert!(asserts::is_date(&invalid).is_ok());
    assert_eq!(
        asserts::is_valid_date(&invalid).unwrap_err().message(),
        "value is not a valid Date"
    );
}

#[test]
fn test_plain_object_and_object() {
    let realm = Realm::new();
    let dictionary = realm.object_create(None);
    assert!(asserts::is_object(&dictionary).is_ok());
    assert_eq!(
        asserts::is_plain_object(&dictionary).unwrap_err().message(),
        "value is not a plane object"
    );
    assert_eq!(
        asserts::is_object(&JsValue::Null).unwrap_err().message(),
        "value is not an object"
    );
}

#[test]
fn test_failure_becomes_type_error() {
    let realm = Realm::new();
    let err = asserts::is_string(&JsValue::number(1.0)).unwrap_err();
    let thrown = err.to_js_error(&realm);
    assert!(type_guards::guards::is_error(&thrown));
    assert_eq!(
        thrown.get("constructor"),
        realm.error(ErrorKind::TypeError, "").get("constructor")
    );
}
