//! Assertions agree with predicates and carry the fixed messages

use core_types::{JsValue, Realm};
use type_guards::{asserts, guards, Guard};

use super::sample_values;

#[test]
fn test_message_table() {
    let expected = [
        (Guard::Array, "value is not an array"),
        (Guard::BigInt, "value is not a bigint"),
        (Guard::Boolean, "value is not a boolean"),
        (Guard::Date, "value is not a Date"),
        (Guard::ValidDate, "value is not a valid Date"),
        (Guard::Error, "value is not an Error"),
        (Guard::FiniteNumber, "value is not a finite number"),
        (Guard::Function, "value is not a function"),
        (Guard::GeneratorFunction, "value is not a generator function"),
        (Guard::Integer, "value is not an integer"),
        (Guard::Map, "value is not a Map"),
        (Guard::NaN, "value is not a NaN"),
        (Guard::Null, "value is not a null"),
        (Guard::Number, "value is not a number"),
        (Guard::Object, "value is not an object"),
        (Guard::PlainObject, "value is not a plane object"),
        (Guard::Promise, "value is not a Promise"),
        (Guard::PromiseLike, "value is not a PromiseLike"),
        (Guard::RegExp, "value is not a RegExp"),
        (Guard::SafeInteger, "value is not a safe integer"),
        (Guard::Set, "value is not a Set"),
        (Guard::StrictNumber, "value is not a strict number"),
        (Guard::String, "value is not a string"),
        (Guard::Symbol, "value is not a symbol"),
        (Guard::Undefined, "value is not an undefined"),
        (Guard::WeakMap, "value is not a WeakMap"),
        (Guard::WeakSet, "value is not a WeakSet"),
    ];
    assert_eq!(expected.len(), Guard::ALL.len());
    for (guard, message) in expected {
        assert_eq!(guard.message(), message, "{guard}");
    }
}

/// Each narrowing assertion, erased to pass/fail
fn narrowing_assertion(guard: Guard) -> fn(&JsValue) -> Option<&'static str> {
    fn outcome<T>(result: asserts::AssertResult<T>) -> Option<&'static str> {
        result.err().map(|err| {
            Guard::ALL
                .into_iter()
                .map(|guard| guard.message())
                .find(|message| *message == err.message())
                .unwrap_or("unexpected message")
        })
    }

    match guard {
        Guard::Array => |v| outcome(asserts::is_array(v)),
        Guard::BigInt => |v| outcome(asserts::is_big_int(v)),
        Guard::Boolean => |v| outcome(asserts::is_boolean(v)),
        Guard::Date => |v| outcome(asserts::is_date(v)),
        Guard::ValidDate => |v| outcome(asserts::is_valid_date(v)),
        Guard::Error => |v| outcome(asserts::is_error(v)),
        Guard::FiniteNumber => |v| outcome(asserts::is_finite_number(v)),
        Guard::Function => |v| outcome(asserts::is_function(v)),
        Guard::GeneratorFunction => |v| outcome(asserts::is_generator_function(v)),
        Guard::Integer => |v| outcome(asserts::is_integer(v)),
        Guard::Map => |v| outcome(asserts::is_map(v)),
        Guard::NaN => |v| outcome(asserts::is_nan(v)),
        Guard::Null => |v| outcome(asserts::is_null(v)),
        Guard::Number => |v| outcome(asserts::is_number(v)),
        Guard::Object => |v| outcome(asserts::is_object(v)),
        Guard::PlainObject => |v| outcome(asserts::is_plain_object(v)),
        Guard::Promise => |v| outcome(asserts::is_promise(v)),
        Guard::PromiseLike => |v| outcome(asserts::is_promise_like(v)),
        Guard::RegExp => |v| outcome(asserts::is_reg_exp(v)),
        Guard::SafeInteger => |v| outcome(asserts::is_safe_integer(v)),
        Guard::Set => |v| outcome(asserts::is_set(v)),
        Guard::StrictNumber => |v| outcome(asserts::is_strict_number(v)),
        Guard::String => |v| outcome(asserts::is_string(v)),
        Guard::Symbol => |v| outcome(asserts::is_symbol(v)),
        Guard::Undefined => |v| outcome(asserts::is_undefined(v)),
        Guard::WeakMap => |v| outcome(asserts::is_weak_map(v)),
        Guard::WeakSet => |v| outcome(asserts::is_weak_set(v)),
    }
}

#[test]
fn test_assertion_passes_iff_predicate_holds() {
    let realm = Realm::new();
    for value in sample_values(&realm) {
        for guard in Guard::ALL {
            let assertion = narrowing_assertion(guard);
            let expected = if guard.check(&value) {
                None
            } else {
                Some(guard.message())
            };
            assert_eq!(assertion(&value), expected, "{guard} on {value:?}");
            assert_eq!(guard.assert(&value).is_ok(), guard.check(&value));
        }
    }
}

#[test]
fn test_composite_layering() {
    let realm = Realm::new();
    for value in sample_values(&realm) {
        assert_eq!(
            guards::is_strict_number(&value),
            guards::is_number(&value) && !guards::is_nan(&value),
            "{value:?}"
        );
        if guards::is_valid_date(&value) {
            assert!(guards::is_date(&value));
        }
        if guards::is_safe_integer(&value) {
            assert!(guards::is_integer(&value));
        }
        if guards::is_integer(&value) {
            assert!(guards::is_finite_number(&value));
        }
        if guards::is_finite_number(&value) {
            assert!(guards::is_strict_number(&value));
        }
        if guards::is_plain_object(&value) {
            assert!(guards::is_object(&value));
        }
        if guards::is_promise(&value) {
            assert!(guards::is_promise_like(&value));
        }
        if guards::is_nan(&value) {
            assert!(guards::is_number(&value));
        }
    }
}

#[test]
fn test_messages_never_mention_value() {
    let value = JsValue::string("very-distinctive-input");
    for guard in Guard::ALL {
        if let Err(err) = guard.assert(&value) {
            assert!(!err.message().contains("very-distinctive-input"));
        }
    }
}
