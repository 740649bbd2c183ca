//! JavaScript value representation.
//!
//! Primitives are stored inline; everything else is a [`JsObject`] handle
//! whose internal class records which built-in kind it is.

use num_bigint::BigInt;
use std::fmt;

use crate::object::{JsObject, ObjectClass, PropertyKey};
use crate::symbol::SymbolValue;

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use core_types::JsValue;
///
/// let undefined = JsValue::Undefined;
/// let number = JsValue::number(42.0);
///
/// assert!(undefined.is_nullish());
/// assert_eq!(number.type_of(), "number");
/// assert_eq!(JsValue::Null.type_of(), "object");
/// ```
#[derive(Clone)]
pub enum JsValue {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision number, NaN and infinities included
    Number(f64),
    /// JavaScript string value
    String(String),
    /// Symbol primitive
    Symbol(SymbolValue),
    /// BigInt primitive (arbitrary precision integer)
    BigInt(BigInt),
    /// Any heap object: plain objects, arrays, wrappers, functions, ...
    Object(JsObject),
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "Undefined"),
            JsValue::Null => write!(f, "Null"),
            JsValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            JsValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            JsValue::String(s) => f.debug_tuple("String").field(s).finish(),
            JsValue::Symbol(sym) => f.debug_tuple("Symbol").field(sym).finish(),
            JsValue::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            JsValue::Object(obj) => f.debug_tuple("Object").field(obj).finish(),
        }
    }
}

/// `void 0`
impl Default for JsValue {
    fn default() -> Self {
        JsValue::Undefined
    }
}

/// Equality is the SameValue algorithm: objects compare by identity and
/// `NaN` equals itself.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
    }
}

impl JsValue {
    /// Create a number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create a BigInt value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        JsValue::BigInt(n.into())
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check if value is null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    /// `Array.isArray`: true only for objects whose internal class is Array.
    pub fn is_array(&self) -> bool {
        match self {
            JsValue::Object(obj) => matches!(&*obj.class(), ObjectClass::Array(_)),
            _ => false,
        }
    }

    /// Check if value can be called
    pub fn is_callable(&self) -> bool {
        match self {
            JsValue::Object(obj) => obj.is_callable(),
            _ => false,
        }
    }

    /// Get as object handle
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as symbol primitive (wrapper objects are not unwrapped)
    pub fn as_symbol(&self) -> Option<&SymbolValue> {
        match self {
            JsValue::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Number held by a number primitive or a Number wrapper object.
    pub fn number_value(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::Number(n) => Some(*n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Boolean held by a boolean primitive or a Boolean wrapper object.
    pub fn boolean_value(&self) -> Option<bool> {
        match self {
            JsValue::Boolean(b) => Some(*b),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::Boolean(b) => Some(*b),
                _ => None,
            },
            _ => None,
        }
    }

    /// String held by a string primitive or a String wrapper object.
    pub fn string_value(&self) -> Option<String> {
        match self {
            JsValue::String(s) => Some(s.clone()),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::String(s) => Some(s.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// BigInt held by a bigint primitive or a BigInt wrapper object.
    pub fn bigint_value(&self) -> Option<BigInt> {
        match self {
            JsValue::BigInt(n) => Some(n.clone()),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::BigInt(n) => Some(n.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Property lookup along the prototype chain.
    ///
    /// Returns `Undefined` when the property is missing. Primitives carry no
    /// properties of their own, so they always read as `Undefined`.
    pub fn get(&self, key: impl Into<PropertyKey>) -> JsValue {
        match self {
            JsValue::Object(obj) => obj.get(key),
            _ => JsValue::Undefined,
        }
    }

    /// Get the type of the value (as JavaScript typeof would return)
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object", // typeof null === "object" in JavaScript
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Symbol(_) => "symbol",
            JsValue::BigInt(_) => "bigint",
            JsValue::Object(obj) if obj.is_callable() => "function",
            JsValue::Object(_) => "object",
        }
    }

    /// SameValue comparison
    ///
    /// Like `===` except that `NaN` equals `NaN` and `+0` differs from `-0`.
    pub fn same_value(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b && a.is_sign_negative() == b.is_sign_negative()
                }
            }
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<SymbolValue> for JsValue {
    fn from(sym: SymbolValue) -> Self {
        JsValue::Symbol(sym)
    }
}

impl From<JsObject> for JsValue {
    fn from(obj: JsObject) -> Self {
        JsValue::Object(obj)
    }
}
