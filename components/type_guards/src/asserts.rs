//! Type assertions.
//!
//! Each assertion runs the predicate of the same name from [`crate::guards`].
//! On failure it returns an [`AssertionError`] with a fixed message; on
//! success it returns the value narrowed to the asserted type (`f64` for the
//! numeric kinds, `&JsObject` for object kinds, and so on). Narrowing only
//! reads what the predicate already established.

use core_types::{BigInt, JsObject, JsValue, SymbolValue};
use std::borrow::Cow;
use tracing::trace;

use crate::error::AssertionError;
use crate::guards;
use crate::tag::type_tag;

/// Result of an assertion
pub type AssertResult<T> = Result<T, AssertionError>;

/// Failure message of [`is_array`]
pub const NOT_AN_ARRAY: &str = "value is not an array";
/// Failure message of [`is_big_int`]
pub const NOT_A_BIGINT: &str = "value is not a bigint";
/// Failure message of [`is_boolean`]
pub const NOT_A_BOOLEAN: &str = "value is not a boolean";
/// Failure message of [`is_date`]
pub const NOT_A_DATE: &str = "value is not a Date";
/// Failure message of [`is_valid_date`]
pub const NOT_A_VALID_DATE: &str = "value is not a valid Date";
/// Failure message of [`is_error`]
pub const NOT_AN_ERROR: &str = "value is not an Error";
/// Failure message of [`is_finite_number`]
pub const NOT_A_FINITE_NUMBER: &str = "value is not a finite number";
/// Failure message of [`is_function`]
pub const NOT_A_FUNCTION: &str = "value is not a function";
/// Failure message of [`is_generator_function`]
pub const NOT_A_GENERATOR_FUNCTION: &str = "value is not a generator function";
/// Failure message of [`is_integer`]
pub const NOT_AN_INTEGER: &str = "value is not an integer";
/// Failure message of [`is_map`]
pub const NOT_A_MAP: &str = "value is not a Map";
/// Failure message of [`is_nan`]
pub const NOT_A_NAN: &str = "value is not a NaN";
/// Failure message of [`is_null`]
pub const NOT_A_NULL: &str = "value is not a null";
/// Failure message of [`is_number`]
pub const NOT_A_NUMBER: &str = "value is not a number";
/// Failure message of [`is_object`]
pub const NOT_AN_OBJECT: &str = "value is not an object";
/// Failure message of [`is_plain_object`] (wording kept for compatibility)
pub const NOT_A_PLAIN_OBJECT: &str = "value is not a plane object";
/// Failure message of [`is_promise`]
pub const NOT_A_PROMISE: &str = "value is not a Promise";
/// Failure message of [`is_promise_like`]
pub const NOT_A_PROMISE_LIKE: &str = "value is not a PromiseLike";
/// Failure message of [`is_reg_exp`]
pub const NOT_A_REGEXP: &str = "value is not a RegExp";
/// Failure message of [`is_safe_integer`]
pub const NOT_A_SAFE_INTEGER: &str = "value is not a safe integer";
/// Failure message of [`is_set`]
pub const NOT_A_SET: &str = "value is not a Set";
/// Failure message of [`is_strict_number`]
pub const NOT_A_STRICT_NUMBER: &str = "value is not a strict number";
/// Failure message of [`is_string`]
pub const NOT_A_STRING: &str = "value is not a string";
/// Failure message of [`is_symbol`]
pub const NOT_A_SYMBOL: &str = "value is not a symbol";
/// Failure message of [`is_undefined`]
pub const NOT_AN_UNDEFINED: &str = "value is not an undefined";
/// Failure message of [`is_weak_map`]
pub const NOT_A_WEAK_MAP: &str = "value is not a WeakMap";
/// Failure message of [`is_weak_set`]
pub const NOT_A_WEAK_SET: &str = "value is not a WeakSet";

/// Fail with `message` unless `condition` holds.
///
/// # Examples
///
/// ```
/// use type_guards::assert;
///
/// assert!(assert(true, "never shown").is_ok());
/// let err = assert(false, "A DEFINED ERROR MESSAGE").unwrap_err();
/// assert_eq!(err.message(), "A DEFINED ERROR MESSAGE");
/// ```
pub fn assert(condition: bool, message: impl Into<Cow<'static, str>>) -> AssertResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::new(message))
    }
}

pub(crate) fn fail(value: &JsValue, message: &'static str) -> AssertionError {
    trace!(tag = %type_tag(value), expected = message, "type assertion failed");
    AssertionError::new(message)
}

fn ensure(value: &JsValue, passed: bool, message: &'static str) -> AssertResult<()> {
    if passed {
        Ok(())
    } else {
        Err(fail(value, message))
    }
}

fn narrow<T>(
    value: &JsValue,
    passed: bool,
    narrowed: Option<T>,
    message: &'static str,
) -> AssertResult<T> {
    match narrowed {
        Some(narrowed) if passed => Ok(narrowed),
        _ => Err(fail(value, message)),
    }
}

/// Assert [`guards::is_array`]
pub fn is_array(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_array(value), value.as_object(), NOT_AN_ARRAY)
}

/// Assert [`guards::is_big_int`]
pub fn is_big_int(value: &JsValue) -> AssertResult<BigInt> {
    narrow(value, guards::is_big_int(value), value.bigint_value(), NOT_A_BIGINT)
}

/// Assert [`guards::is_boolean`]
pub fn is_boolean(value: &JsValue) -> AssertResult<bool> {
    narrow(value, guards::is_boolean(value), value.boolean_value(), NOT_A_BOOLEAN)
}

/// Assert [`guards::is_date`]
pub fn is_date(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_date(value), value.as_object(), NOT_A_DATE)
}

/// Assert [`guards::is_valid_date`]
pub fn is_valid_date(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_valid_date(value), value.as_object(), NOT_A_VALID_DATE)
}

/// Assert [`guards::is_error`]
pub fn is_error(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_error(value), value.as_object(), NOT_AN_ERROR)
}

/// Assert [`guards::is_finite_number`]
pub fn is_finite_number(value: &JsValue) -> AssertResult<f64> {
    narrow(value, guards::is_finite_number(value), value.number_value(), NOT_A_FINITE_NUMBER)
}

/// Assert [`guards::is_function`]
pub fn is_function(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_function(value), value.as_object(), NOT_A_FUNCTION)
}

/// Assert [`guards::is_generator_function`]
pub fn is_generator_function(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(
        value,
        guards::is_generator_function(value),
        value.as_object(),
        NOT_A_GENERATOR_FUNCTION,
    )
}

/// Assert [`guards::is_integer`]
pub fn is_integer(value: &JsValue) -> AssertResult<f64> {
    narrow(value, guards::is_integer(value), value.number_value(), NOT_AN_INTEGER)
}

/// Assert [`guards::is_map`]
pub fn is_map(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_map(value), value.as_object(), NOT_A_MAP)
}

/// Assert [`guards::is_nan`]
pub fn is_nan(value: &JsValue) -> AssertResult<f64> {
    narrow(value, guards::is_nan(value), value.number_value(), NOT_A_NAN)
}

/// Assert [`guards::is_null`]
pub fn is_null(value: &JsValue) -> AssertResult<()> {
    ensure(value, guards::is_null(value), NOT_A_NULL)
}

/// Assert [`guards::is_number`]
pub fn is_number(value: &JsValue) -> AssertResult<f64> {
    narrow(value, guards::is_number(value), value.number_value(), NOT_A_NUMBER)
}

/// Assert [`guards::is_object`]
pub fn is_object(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_object(value), value.as_object(), NOT_AN_OBJECT)
}

/// Assert [`guards::is_plain_object`]
pub fn is_plain_object(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_plain_object(value), value.as_object(), NOT_A_PLAIN_OBJECT)
}

/// Assert [`guards::is_promise`]
pub fn is_promise(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_promise(value), value.as_object(), NOT_A_PROMISE)
}

/// Assert [`guards::is_promise_like`]
pub fn is_promise_like(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_promise_like(value), value.as_object(), NOT_A_PROMISE_LIKE)
}

/// Assert [`guards::is_reg_exp`]
pub fn is_reg_exp(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_reg_exp(value), value.as_object(), NOT_A_REGEXP)
}

/// Assert [`guards::is_safe_integer`]
pub fn is_safe_integer(value: &JsValue) -> AssertResult<f64> {
    narrow(value, guards::is_safe_integer(value), value.number_value(), NOT_A_SAFE_INTEGER)
}

/// Assert [`guards::is_set`]
pub fn is_set(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_set(value), value.as_object(), NOT_A_SET)
}

/// Assert [`guards::is_strict_number`]
pub fn is_strict_number(value: &JsValue) -> AssertResult<f64> {
    narrow(value, guards::is_strict_number(value), value.number_value(), NOT_A_STRICT_NUMBER)
}

/// Assert [`guards::is_string`]
pub fn is_string(value: &JsValue) -> AssertResult<String> {
    narrow(value, guards::is_string(value), value.string_value(), NOT_A_STRING)
}

/// Assert [`guards::is_symbol`]
pub fn is_symbol(value: &JsValue) -> AssertResult<&SymbolValue> {
    narrow(value, guards::is_symbol(value), value.as_symbol(), NOT_A_SYMBOL)
}

/// Assert [`guards::is_undefined`]
pub fn is_undefined(value: &JsValue) -> AssertResult<()> {
    ensure(value, guards::is_undefined(value), NOT_AN_UNDEFINED)
}

/// Assert [`guards::is_weak_map`]
pub fn is_weak_map(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_weak_map(value), value.as_object(), NOT_A_WEAK_MAP)
}

/// Assert [`guards::is_weak_set`]
pub fn is_weak_set(value: &JsValue) -> AssertResult<&JsObject> {
    narrow(value, guards::is_weak_set(value), value.as_object(), NOT_A_WEAK_SET)
}
