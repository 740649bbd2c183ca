//! Type predicates.
//!
//! Each predicate answers "is this value of semantic type X" and never fails.
//! Primitive predicates read the value's tag (or its primitive kind); the
//! composite ones build on those, so `is_strict_number` is `is_number` minus
//! `is_nan`, and `is_valid_date` is `is_date` with a non-NaN time value.
//!
//! `is_number` accepts `NaN` and Number wrappers on purpose: it asks about the
//! type, not arithmetic usability. Numeric refinements read the number held by
//! a primitive or a wrapper alike.

use core_types::{Intrinsic, JsValue};

use crate::tag::{type_tag, TypeTag};

/// `Number.MAX_SAFE_INTEGER` (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

/// `Number.MIN_SAFE_INTEGER`
pub const MIN_SAFE_INTEGER: f64 = -9007199254740991.0;

fn number_is(value: &JsValue, refine: impl FnOnce(f64) -> bool) -> bool {
    value.number_value().is_some_and(refine)
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.trunc() == n
}

/// `Array.isArray(value)`
pub fn is_array(value: &JsValue) -> bool {
    value.is_array()
}

/// BigInt primitive or wrapper
pub fn is_big_int(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::BigInt
}

/// Boolean primitive or wrapper; `new Boolean(false)` counts.
pub fn is_boolean(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Boolean
}

/// Date object, valid or not
pub fn is_date(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Date
}

/// Error object of any error kind
pub fn is_error(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Error
}

/// Number that is neither infinite nor NaN
pub fn is_finite_number(value: &JsValue) -> bool {
    is_number(value) && number_is(value, f64::is_finite)
}

/// Plain function; generator and async functions have their own tags.
pub fn is_function(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Function
}

/// `function*` declaration
pub fn is_generator_function(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::GeneratorFunction
}

/// Number with an integral value.
///
/// Integers beyond 2^53 are accepted, as `Number.isInteger` does.
pub fn is_integer(value: &JsValue) -> bool {
    is_number(value) && number_is(value, is_integral)
}

/// Map object
pub fn is_map(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Map
}

/// The NaN number value
pub fn is_nan(value: &JsValue) -> bool {
    is_number(value) && number_is(value, f64::is_nan)
}

/// `value === null`
pub fn is_null(value: &JsValue) -> bool {
    value.is_null()
}

/// Number primitive or wrapper, NaN included
pub fn is_number(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Number
}

/// Anything `typeof` reports as `"object"` except null.
///
/// Includes arrays, wrappers, collections and class instances; excludes
/// functions.
pub fn is_object(value: &JsValue) -> bool {
    value.type_of() == "object" && !is_null(value)
}

/// Object created by `{}`, `new Object()` or `Object.create` of a plain
/// object.
///
/// Class instances and null-prototype dictionaries are rejected: their
/// `constructor` is not the base Object constructor (of any realm).
pub fn is_plain_object(value: &JsValue) -> bool {
    is_object(value)
        && type_tag(value) == TypeTag::Object
        && match value.get("constructor") {
            JsValue::Object(ctor) => ctor.is_intrinsic(Intrinsic::Object),
            _ => false,
        }
}

/// Native promise
pub fn is_promise(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Promise
}

/// Native promise, or any non-nullish value whose `then` is a function.
///
/// Functions carrying a `then` property count as thenables.
pub fn is_promise_like(value: &JsValue) -> bool {
    if is_promise(value) {
        return true;
    }

    !value.is_nullish() && is_function(&value.get("then"))
}

/// RegExp object
pub fn is_reg_exp(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::RegExp
}

/// Integer within ±(2^53 - 1)
pub fn is_safe_integer(value: &JsValue) -> bool {
    is_number(value)
        && number_is(value, |n| {
            is_integral(n) && (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n)
        })
}

/// Set object
pub fn is_set(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::Set
}

/// Number that is not NaN; prefer this over [`is_number`] for arithmetic.
pub fn is_strict_number(value: &JsValue) -> bool {
    is_number(value) && !is_nan(value)
}

/// String primitive or wrapper
pub fn is_string(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::String
}

/// Symbol primitive (`typeof value === "symbol"`)
pub fn is_symbol(value: &JsValue) -> bool {
    value.type_of() == "symbol"
}

/// `value === undefined`
pub fn is_undefined(value: &JsValue) -> bool {
    value.is_undefined()
}

/// Date whose time value is not NaN
pub fn is_valid_date(value: &JsValue) -> bool {
    is_date(value)
        && value
            .as_object()
            .and_then(|date| date.time_value())
            .is_some_and(|time| !is_nan(&JsValue::Number(time)))
}

/// WeakMap object
pub fn is_weak_map(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::WeakMap
}

/// WeakSet object
pub fn is_weak_set(value: &JsValue) -> bool {
    type_tag(value) == TypeTag::WeakSet
}
