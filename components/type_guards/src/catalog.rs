//! Guard catalog
//!
//! [`Guard`] names every predicate so a check can be picked at runtime, e.g.
//! from a schema file or a command line. Guards serialize by their
//! JavaScript-facing name (`"isMap"`).

use core_types::JsValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::asserts::{self, AssertResult};
use crate::guards;

/// One of the type predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guard {
    /// `isArray`
    #[serde(rename = "isArray")]
    Array,
    /// `isBigInt`
    #[serde(rename = "isBigInt")]
    BigInt,
    /// `isBoolean`
    #[serde(rename = "isBoolean")]
    Boolean,
    /// `isDate`
    #[serde(rename = "isDate")]
    Date,
    /// `isValidDate`
    #[serde(rename = "isValidDate")]
    ValidDate,
    /// `isError`
    #[serde(rename = "isError")]
    Error,
    /// `isFiniteNumber`
    #[serde(rename = "isFiniteNumber")]
    FiniteNumber,
    /// `isFunction`
    #[serde(rename = "isFunction")]
    Function,
    /// `isGeneratorFunction`
    #[serde(rename = "isGeneratorFunction")]
    GeneratorFunction,
    /// `isInteger`
    #[serde(rename = "isInteger")]
    Integer,
    /// `isMap`
    #[serde(rename = "isMap")]
    Map,
    /// `isNaN`
    #[serde(rename = "isNaN")]
    NaN,
    /// `isNull`
    #[serde(rename = "isNull")]
    Null,
    /// `isNumber`
    #[serde(rename = "isNumber")]
    Number,
    /// `isObject`
    #[serde(rename = "isObject")]
    Object,
    /// `isPlainObject`
    #[serde(rename = "isPlainObject")]
    PlainObject,
    /// `isPromise`
    #[serde(rename = "isPromise")]
    Promise,
    /// `isPromiseLike`
    #[serde(rename = "isPromiseLike")]
    PromiseLike,
    /// `isRegExp`
    #[serde(rename = "isRegExp")]
    RegExp,
    /// `isSafeInteger`
    #[serde(rename = "isSafeInteger")]
    SafeInteger,
    /// `isSet`
    #[serde(rename = "isSet")]
    Set,
    /// `isStrictNumber`
    #[serde(rename = "isStrictNumber")]
    StrictNumber,
    /// `isString`
    #[serde(rename = "isString")]
    String,
    /// `isSymbol`
    #[serde(rename = "isSymbol")]
    Symbol,
    /// `isUndefined`
    #[serde(rename = "isUndefined")]
    Undefined,
    /// `isWeakMap`
    #[serde(rename = "isWeakMap")]
    WeakMap,
    /// `isWeakSet`
    #[serde(rename = "isWeakSet")]
    WeakSet,
}

impl Guard {
    /// Every guard, in alphabetical order of name
    pub const ALL: [Guard; 27] = [
        Guard::Array,
        Guard::BigInt,
        Guard::Boolean,
        Guard::Date,
        Guard::ValidDate,
        Guard::Error,
        Guard::FiniteNumber,
        Guard::Function,
        Guard::GeneratorFunction,
        Guard::Integer,
        Guard::Map,
        Guard::NaN,
        Guard::Null,
        Guard::Number,
        Guard::Object,
        Guard::PlainObject,
        Guard::Promise,
        Guard::PromiseLike,
        Guard::RegExp,
        Guard::SafeInteger,
        Guard::Set,
        Guard::StrictNumber,
        Guard::String,
        Guard::Symbol,
        Guard::Undefined,
        Guard::WeakMap,
        Guard::WeakSet,
    ];

    /// JavaScript-facing name, e.g. `"isPlainObject"`
    pub fn name(&self) -> &'static str {
        match self {
            Guard::Array => "isArray",
            Guard::BigInt => "isBigInt",
            Guard::Boolean => "isBoolean",
            Guard::Date => "isDate",
            Guard::ValidDate => "isValidDate",
            Guard::Error => "isError",
            Guard::FiniteNumber => "isFiniteNumber",
            Guard::Function => "isFunction",
            Guard::GeneratorFunction => "isGeneratorFunction",
            Guard::Integer => "isInteger",
            Guard::Map => "isMap",
            Guard::NaN => "isNaN",
            Guard::Null => "isNull",
            Guard::Number => "isNumber",
            Guard::Object => "isObject",
            Guard::PlainObject => "isPlainObject",
            Guard::Promise => "isPromise",
            Guard::PromiseLike => "isPromiseLike",
            Guard::RegExp => "isRegExp",
            Guard::SafeInteger => "isSafeInteger",
            Guard::Set => "isSet",
            Guard::StrictNumber => "isStrictNumber",
            Guard::String => "isString",
            Guard::Symbol => "isSymbol",
            Guard::Undefined => "isUndefined",
            Guard::WeakMap => "isWeakMap",
            Guard::WeakSet => "isWeakSet",
        }
    }

    /// Message of the matching assertion
    pub fn message(&self) -> &'static str {
        match self {
            Guard::Array => asserts::NOT_AN_ARRAY,
            Guard::BigInt => asserts::NOT_A_BIGINT,
            Guard::Boolean => asserts::NOT_A_BOOLEAN,
            Guard::Date => asserts::NOT_A_DATE,
            Guard::ValidDate => asserts::NOT_A_VALID_DATE,
            Guard::Error => asserts::NOT_AN_ERROR,
            Guard::FiniteNumber => asserts::NOT_A_FINITE_NUMBER,
            Guard::Function => asserts::NOT_A_FUNCTION,
            Guard::GeneratorFunction => asserts::NOT_A_GENERATOR_FUNCTION,
            Guard::Integer => asserts::NOT_AN_INTEGER,
            Guard::Map => asserts::NOT_A_MAP,
            Guard::NaN => asserts::NOT_A_NAN,
            Guard::Null => asserts::NOT_A_NULL,
            Guard::Number => asserts::NOT_A_NUMBER,
            Guard::Object => asserts::NOT_AN_OBJECT,
            Guard::PlainObject => asserts::NOT_A_PLAIN_OBJECT,
            Guard::Promise => asserts::NOT_A_PROMISE,
            Guard::PromiseLike => asserts::NOT_A_PROMISE_LIKE,
            Guard::RegExp => asserts::NOT_A_REGEXP,
            Guard::SafeInteger => asserts::NOT_A_SAFE_INTEGER,
            Guard::Set => asserts::NOT_A_SET,
            Guard::StrictNumber => asserts::NOT_A_STRICT_NUMBER,
            Guard::String => asserts::NOT_A_STRING,
            Guard::Symbol => asserts::NOT_A_SYMBOL,
            Guard::Undefined => asserts::NOT_AN_UNDEFINED,
            Guard::WeakMap => asserts::NOT_A_WEAK_MAP,
            Guard::WeakSet => asserts::NOT_A_WEAK_SET,
        }
    }

    /// Run the predicate
    pub fn check(&self, value: &JsValue) -> bool {
        let predicate: fn(&JsValue) -> bool = match self {
            Guard::Array => guards::is_array,
            Guard::BigInt => guards::is_big_int,
            Guard::Boolean => guards::is_boolean,
            Guard::Date => guards::is_date,
            Guard::ValidDate => guards::is_valid_date,
            Guard::Error => guards::is_error,
            Guard::FiniteNumber => guards::is_finite_number,
            Guard::Function => guards::is_function,
            Guard::GeneratorFunction => guards::is_generator_function,
            Guard::Integer => guards::is_integer,
            Guard::Map => guards::is_map,
            Guard::NaN => guards::is_nan,
            Guard::Null => guards::is_null,
            Guard::Number => guards::is_number,
            Guard::Object => guards::is_object,
            Guard::PlainObject => guards::is_plain_object,
            Guard::Promise => guards::is_promise,
            Guard::PromiseLike => guards::is_promise_like,
            Guard::RegExp => guards::is_reg_exp,
            Guard::SafeInteger => guards::is_safe_integer,
            Guard::Set => guards::is_set,
            Guard::StrictNumber => guards::is_strict_number,
            Guard::String => guards::is_string,
            Guard::Symbol => guards::is_symbol,
            Guard::Undefined => guards::is_undefined,
            Guard::WeakMap => guards::is_weak_map,
            Guard::WeakSet => guards::is_weak_set,
        };
        predicate(value)
    }

    /// Run the predicate as an assertion, without narrowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::JsValue;
    /// use type_guards::Guard;
    ///
    /// let guard: Guard = "isSafeInteger".parse().unwrap();
    /// assert!(guard.assert(&JsValue::number(42.0)).is_ok());
    /// assert_eq!(
    ///     guard.assert(&JsValue::number(0.5)).unwrap_err().message(),
    ///     "value is not a safe integer"
    /// );
    /// ```
    pub fn assert(&self, value: &JsValue) -> AssertResult<()> {
        if self.check(value) {
            Ok(())
        } else {
            Err(asserts::fail(value, self.message()))
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// No guard has that name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown guard `{0}`")]
pub struct UnknownGuard(pub String);

impl FromStr for Guard {
    type Err = UnknownGuard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guard::ALL
            .into_iter()
            .find(|guard| guard.name() == s)
            .ok_or_else(|| UnknownGuard(s.to_string()))
    }
}
