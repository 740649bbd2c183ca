//! Tag resolution (`Object.prototype.toString.call(value)`).
//!
//! Every value maps to exactly one [`TypeTag`]. The tag comes from the
//! primitive kind or the object's internal class, never from `typeof`, so a
//! Number wrapper and a number primitive share the `Number` tag while an
//! Array and a plain object do not.
//!
//! `Symbol.toStringTag` overrides are ignored: only built-in kinds have tags.

use core_types::{FunctionKind, JsValue, ObjectClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical type tag of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// `[object Undefined]`
    Undefined,
    /// `[object Null]`
    Null,
    /// `[object Number]`
    Number,
    /// `[object BigInt]`
    BigInt,
    /// `[object String]`
    String,
    /// `[object Boolean]`
    Boolean,
    /// `[object Symbol]`
    Symbol,
    /// `[object Object]`
    Object,
    /// `[object Array]`
    Array,
    /// `[object Function]`
    Function,
    /// `[object GeneratorFunction]`
    GeneratorFunction,
    /// `[object AsyncFunction]`
    AsyncFunction,
    /// `[object AsyncGeneratorFunction]`
    AsyncGeneratorFunction,
    /// `[object Date]`
    Date,
    /// `[object RegExp]`
    RegExp,
    /// `[object Error]`
    Error,
    /// `[object Map]`
    Map,
    /// `[object Set]`
    Set,
    /// `[object WeakMap]`
    WeakMap,
    /// `[object WeakSet]`
    WeakSet,
    /// `[object Promise]`
    Promise,
}

impl TypeTag {
    /// Every tag
    pub const ALL: [TypeTag; 21] = [
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Number,
        TypeTag::BigInt,
        TypeTag::String,
        TypeTag::Boolean,
        TypeTag::Symbol,
        TypeTag::Object,
        TypeTag::Array,
        TypeTag::Function,
        TypeTag::GeneratorFunction,
        TypeTag::AsyncFunction,
        TypeTag::AsyncGeneratorFunction,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Error,
        TypeTag::Map,
        TypeTag::Set,
        TypeTag::WeakMap,
        TypeTag::WeakSet,
        TypeTag::Promise,
    ];

    /// Full tag string, e.g. `"[object Map]"`
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "[object Undefined]",
            TypeTag::Null => "[object Null]",
            TypeTag::Number => "[object Number]",
            TypeTag::BigInt => "[object BigInt]",
            TypeTag::String => "[object String]",
            TypeTag::Boolean => "[object Boolean]",
            TypeTag::Symbol => "[object Symbol]",
            TypeTag::Object => "[object Object]",
            TypeTag::Array => "[object Array]",
            TypeTag::Function => "[object Function]",
            TypeTag::GeneratorFunction => "[object GeneratorFunction]",
            TypeTag::AsyncFunction => "[object AsyncFunction]",
            TypeTag::AsyncGeneratorFunction => "[object AsyncGeneratorFunction]",
            TypeTag::Date => "[object Date]",
            TypeTag::RegExp => "[object RegExp]",
            TypeTag::Error => "[object Error]",
            TypeTag::Map => "[object Map]",
            TypeTag::Set => "[object Set]",
            TypeTag::WeakMap => "[object WeakMap]",
            TypeTag::WeakSet => "[object WeakSet]",
            TypeTag::Promise => "[object Promise]",
        }
    }

    /// Bare kind name, e.g. `"Map"`
    pub fn kind(&self) -> &'static str {
        let tag = self.as_str();
        &tag["[object ".len()..tag.len() - 1]
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string named no known tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag `{0}`")]
pub struct UnknownTypeTag(pub String);

/// Accepts both `"Map"` and `"[object Map]"`.
impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s
            .strip_prefix("[object ")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.kind() == kind)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

/// Resolve the tag of a value.
///
/// # Examples
///
/// ```
/// use core_types::{JsValue, Realm};
/// use type_guards::{type_tag, TypeTag};
///
/// let realm = Realm::new();
/// assert_eq!(type_tag(&JsValue::number(1.0)), TypeTag::Number);
/// assert_eq!(type_tag(&realm.boxed(JsValue::number(1.0))), TypeTag::Number);
/// assert_eq!(type_tag(&realm.array(vec![])), TypeTag::Array);
/// ```
pub fn type_tag(value: &JsValue) -> TypeTag {
    match value {
        JsValue::Undefined => TypeTag::Undefined,
        JsValue::Null => TypeTag::Null,
        JsValue::Boolean(_) => TypeTag::Boolean,
        JsValue::Number(_) => TypeTag::Number,
        JsValue::String(_) => TypeTag::String,
        JsValue::Symbol(_) => TypeTag::Symbol,
        JsValue::BigInt(_) => TypeTag::BigInt,
        JsValue::Object(obj) => match &*obj.class() {
            ObjectClass::Ordinary => TypeTag::Object,
            ObjectClass::Array(_) => TypeTag::Array,
            ObjectClass::Boolean(_) => TypeTag::Boolean,
            ObjectClass::Number(_) => TypeTag::Number,
            ObjectClass::String(_) => TypeTag::String,
            ObjectClass::BigInt(_) => TypeTag::BigInt,
            ObjectClass::Symbol(_) => TypeTag::Symbol,
            ObjectClass::Date(_) => TypeTag::Date,
            ObjectClass::RegExp(_) => TypeTag::RegExp,
            ObjectClass::Error(_) => TypeTag::Error,
            ObjectClass::Map(_) => TypeTag::Map,
            ObjectClass::Set(_) => TypeTag::Set,
            ObjectClass::WeakMap => TypeTag::WeakMap,
            ObjectClass::WeakSet => TypeTag::WeakSet,
            ObjectClass::Promise(_) => TypeTag::Promise,
            ObjectClass::Function(data) => match data.kind {
                FunctionKind::Generator => TypeTag::GeneratorFunction,
                FunctionKind::Async => TypeTag::AsyncFunction,
                FunctionKind::AsyncGenerator => TypeTag::AsyncGeneratorFunction,
                FunctionKind::Normal | FunctionKind::Arrow | FunctionKind::Class => {
                    TypeTag::Function
                }
            },
        },
    }
}

/// Tag string of a value, e.g. `"[object Map]"`.
pub fn object_type_name(value: &JsValue) -> &'static str {
    type_tag(value).as_str()
}
