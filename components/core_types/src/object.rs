//! Heap objects.
//!
//! Every object carries an [`ObjectClass`] fixed at construction time. The
//! class is the internal slot that tells an Array from a Date from a plain
//! object, independent of its prototype or properties.

use num_bigint::BigInt;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ErrorData;
use crate::realm::Intrinsic;
use crate::regexp::RegExpData;
use crate::symbol::SymbolValue;
use crate::value::JsValue;

/// Property key: string or symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String-keyed property
    String(String),
    /// Symbol-keyed property
    Symbol(SymbolValue),
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<&SymbolValue> for PropertyKey {
    fn from(sym: &SymbolValue) -> Self {
        PropertyKey::Symbol(sym.clone())
    }
}

/// How a function object was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    /// `function f() {}` or a built-in function
    Normal,
    /// `() => {}`
    Arrow,
    /// `class C {}`
    Class,
    /// `function* g() {}`
    Generator,
    /// `async function f() {}`
    Async,
    /// `async function* g() {}`
    AsyncGenerator,
}

/// Internal function data
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData {
    /// Function name (empty for anonymous functions)
    pub name: String,
    /// Declaration form
    pub kind: FunctionKind,
    /// Set when the function is one of a realm's built-in constructors
    pub intrinsic: Option<Intrinsic>,
}

/// Settlement state of a promise
#[derive(Debug, Clone, PartialEq)]
pub enum PromiseState {
    /// Not settled yet
    Pending,
    /// Resolved with a value
    Fulfilled(JsValue),
    /// Rejected with a reason
    Rejected(JsValue),
}

/// Internal class of a heap object.
#[derive(Debug, Clone)]
pub enum ObjectClass {
    /// Plain object, class instance or null-prototype dictionary
    Ordinary,
    /// Array exotic object
    Array(Vec<JsValue>),
    /// `new Boolean(b)`
    Boolean(bool),
    /// `new Number(n)`
    Number(f64),
    /// `new String(s)`
    String(String),
    /// `Object(1n)`
    BigInt(BigInt),
    /// `Object(Symbol())`
    Symbol(SymbolValue),
    /// Date with its time value; NaN for an Invalid Date
    Date(f64),
    /// Regular expression
    RegExp(RegExpData),
    /// Error or one of its subclasses
    Error(ErrorData),
    /// Map entries in insertion order
    Map(Vec<(JsValue, JsValue)>),
    /// Set values in insertion order
    Set(Vec<JsValue>),
    /// WeakMap (entries are not observable)
    WeakMap,
    /// WeakSet (entries are not observable)
    WeakSet,
    /// Callable object
    Function(FunctionData),
    /// Native promise
    Promise(PromiseState),
}

impl ObjectClass {
    /// Short name of the class, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ObjectClass::Ordinary => "Ordinary",
            ObjectClass::Array(_) => "Array",
            ObjectClass::Boolean(_) => "Boolean",
            ObjectClass::Number(_) => "Number",
            ObjectClass::String(_) => "String",
            ObjectClass::BigInt(_) => "BigInt",
            ObjectClass::Symbol(_) => "Symbol",
            ObjectClass::Date(_) => "Date",
            ObjectClass::RegExp(_) => "RegExp",
            ObjectClass::Error(_) => "Error",
            ObjectClass::Map(_) => "Map",
            ObjectClass::Set(_) => "Set",
            ObjectClass::WeakMap => "WeakMap",
            ObjectClass::WeakSet => "WeakSet",
            ObjectClass::Function(_) => "Function",
            ObjectClass::Promise(_) => "Promise",
        }
    }
}

/// Internal object data
#[derive(Debug)]
pub struct ObjectData {
    /// Internal class, fixed at construction
    pub class: ObjectClass,
    /// Own data properties
    pub properties: HashMap<PropertyKey, JsValue>,
    /// `[[Prototype]]`; `None` for null-prototype objects
    pub prototype: Option<JsObject>,
}

/// Shared handle to a heap object.
///
/// Cloning the handle shares the object. Handles are `Send + Sync`; reads
/// take a shared lock, so any number of threads can inspect one object.
#[derive(Clone)]
pub struct JsObject(Arc<RwLock<ObjectData>>);

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prototype chains and `constructor` links are cyclic; never recurse.
        write!(f, "JsObject({} @ {:#x})", self.class().name(), self.identity())
    }
}

impl JsObject {
    /// Create an object with the given class and prototype
    pub fn new(class: ObjectClass, prototype: Option<JsObject>) -> Self {
        JsObject(Arc::new(RwLock::new(ObjectData {
            class,
            properties: HashMap::new(),
            prototype,
        })))
    }

    /// Read access to the internal class
    pub fn class(&self) -> MappedRwLockReadGuard<'_, ObjectClass> {
        RwLockReadGuard::map(self.0.read(), |data| &data.class)
    }

    /// Pointer identity of the object
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    /// Check whether two handles point at the same object
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Check if the object is callable
    pub fn is_callable(&self) -> bool {
        matches!(&*self.class(), ObjectClass::Function(_))
    }

    /// Function data, if this is a function object
    pub fn function_data(&self) -> Option<FunctionData> {
        match &*self.class() {
            ObjectClass::Function(data) => Some(data.clone()),
            _ => None,
        }
    }

    /// Check whether this is the given built-in constructor of any realm
    pub fn is_intrinsic(&self, which: Intrinsic) -> bool {
        match &*self.class() {
            ObjectClass::Function(data) => data.intrinsic == Some(which),
            _ => false,
        }
    }

    /// Time value of a Date object (`Date.prototype.getTime`)
    pub fn time_value(&self) -> Option<f64> {
        match &*self.class() {
            ObjectClass::Date(t) => Some(*t),
            _ => None,
        }
    }

    /// Elements of an Array object
    pub fn array_elements(&self) -> Option<Vec<JsValue>> {
        match &*self.class() {
            ObjectClass::Array(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    /// State of a Promise object
    pub fn promise_state(&self) -> Option<PromiseState> {
        match &*self.class() {
            ObjectClass::Promise(state) => Some(state.clone()),
            _ => None,
        }
    }

    /// Get object prototype
    pub fn prototype(&self) -> Option<JsObject> {
        self.0.read().prototype.clone()
    }

    /// Replace the prototype (`Object.setPrototypeOf`).
    ///
    /// Returns `false` and leaves the object unchanged when the new chain
    /// would contain this object.
    pub fn set_prototype(&self, prototype: Option<JsObject>) -> bool {
        let mut cursor = prototype.clone();
        while let Some(proto) = cursor {
            if proto.ptr_eq(self) {
                return false;
            }
            cursor = proto.prototype();
        }
        self.0.write().prototype = prototype;
        true
    }

    /// Define or overwrite an own data property
    pub fn set(&self, key: impl Into<PropertyKey>, value: JsValue) {
        self.0.write().properties.insert(key.into(), value);
    }

    /// Own property value
    pub fn get_own(&self, key: impl Into<PropertyKey>) -> Option<JsValue> {
        self.0.read().properties.get(&key.into()).cloned()
    }

    /// Check if object has own property
    pub fn has_own(&self, key: impl Into<PropertyKey>) -> bool {
        self.0.read().properties.contains_key(&key.into())
    }

    /// Property lookup along the prototype chain; `Undefined` when missing.
    pub fn get(&self, key: impl Into<PropertyKey>) -> JsValue {
        let key = key.into();
        let mut current = self.clone();
        loop {
            let next = {
                let data = current.0.read();
                if let Some(value) = data.properties.get(&key) {
                    return value.clone();
                }
                data.prototype.clone()
            };
            match next {
                Some(proto) => current = proto,
                None => return JsValue::Undefined,
            }
        }
    }
}
