//! Realms and their intrinsics.
//!
//! A realm owns one copy of every built-in prototype and constructor. Values
//! created through a realm get that realm's prototypes, so `constructor`
//! lookups behave as they do in a JavaScript global environment.
//!
//! A realm's intrinsics reference each other (`Object.prototype.constructor`
//! points back at a function whose chain reaches `Object.prototype`), so they
//! live for the rest of the process once created.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::date::{time_clip, DateParser};
use crate::error::{ErrorData, ErrorKind, ValueError};
use crate::object::{FunctionData, FunctionKind, JsObject, ObjectClass, PromiseState};
use crate::regexp::RegExpData;
use crate::value::JsValue;

/// Identifies a realm's built-in constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intrinsic {
    /// `%Object%`
    Object,
    /// `%Function%`
    Function,
    /// `%GeneratorFunction%`
    GeneratorFunction,
    /// `%AsyncFunction%`
    AsyncFunction,
    /// `%AsyncGeneratorFunction%`
    AsyncGeneratorFunction,
    /// `%Array%`
    Array,
    /// `%Boolean%`
    Boolean,
    /// `%Number%`
    Number,
    /// `%String%`
    String,
    /// `%BigInt%`
    BigInt,
    /// `%Symbol%`
    Symbol,
    /// `%Date%`
    Date,
    /// `%RegExp%`
    RegExp,
    /// `%Error%` and its subclasses
    Error(ErrorKind),
    /// `%Map%`
    Map,
    /// `%Set%`
    Set,
    /// `%WeakMap%`
    WeakMap,
    /// `%WeakSet%`
    WeakSet,
    /// `%Promise%`
    Promise,
}

impl Intrinsic {
    /// Global name of the constructor
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::Object => "Object",
            Intrinsic::Function => "Function",
            Intrinsic::GeneratorFunction => "GeneratorFunction",
            Intrinsic::AsyncFunction => "AsyncFunction",
            Intrinsic::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            Intrinsic::Array => "Array",
            Intrinsic::Boolean => "Boolean",
            Intrinsic::Number => "Number",
            Intrinsic::String => "String",
            Intrinsic::BigInt => "BigInt",
            Intrinsic::Symbol => "Symbol",
            Intrinsic::Date => "Date",
            Intrinsic::RegExp => "RegExp",
            Intrinsic::Error(kind) => kind.name(),
            Intrinsic::Map => "Map",
            Intrinsic::Set => "Set",
            Intrinsic::WeakMap => "WeakMap",
            Intrinsic::WeakSet => "WeakSet",
            Intrinsic::Promise => "Promise",
        }
    }
}

struct Intrinsics {
    object_prototype: JsObject,
    object_constructor: JsObject,
    function_prototype: JsObject,
    generator_function_prototype: JsObject,
    async_function_prototype: JsObject,
    async_generator_function_prototype: JsObject,
    array_prototype: JsObject,
    boolean_prototype: JsObject,
    number_prototype: JsObject,
    string_prototype: JsObject,
    bigint_prototype: JsObject,
    symbol_prototype: JsObject,
    date_prototype: JsObject,
    regexp_prototype: JsObject,
    error_prototypes: HashMap<ErrorKind, JsObject>,
    map_prototype: JsObject,
    set_prototype: JsObject,
    weak_map_prototype: JsObject,
    weak_set_prototype: JsObject,
    promise_prototype: JsObject,
}

/// A global environment: intrinsics plus factories for every built-in kind.
///
/// Cloning a realm is cheap and shares its intrinsics.
///
/// # Examples
///
/// ```
/// use core_types::{JsValue, Realm};
///
/// let realm = Realm::new();
/// let obj = realm.object();
///
/// // Object literals inherit `constructor` from Object.prototype
/// let ctor = obj.get("constructor");
/// assert!(ctor.is_callable());
/// ```
#[derive(Clone)]
pub struct Realm {
    intrinsics: Arc<Intrinsics>,
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Realm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Realm")
            .field("object_prototype", &self.intrinsics.object_prototype)
            .finish()
    }
}

fn builtin_function(
    name: &str,
    kind: FunctionKind,
    intrinsic: Option<Intrinsic>,
    prototype: &JsObject,
) -> JsObject {
    JsObject::new(
        ObjectClass::Function(FunctionData {
            name: name.to_string(),
            kind,
            intrinsic,
        }),
        Some(prototype.clone()),
    )
}

/// Create `%X.prototype%` and `%X%`, linked through `constructor`.
fn install(
    class: ObjectClass,
    parent: &JsObject,
    function_prototype: &JsObject,
    which: Intrinsic,
) -> JsObject {
    let prototype = JsObject::new(class, Some(parent.clone()));
    let constructor = builtin_function(
        which.name(),
        FunctionKind::Normal,
        Some(which),
        function_prototype,
    );
    prototype.set("constructor", JsValue::Object(constructor));
    prototype
}

impl Realm {
    /// Create a realm with a fresh set of intrinsics
    pub fn new() -> Self {
        let object_prototype = JsObject::new(ObjectClass::Ordinary, None);
        // Function.prototype is itself callable.
        let function_prototype = builtin_function(
            "",
            FunctionKind::Normal,
            None,
            &object_prototype,
        );
        let object_constructor = builtin_function(
            "Object",
            FunctionKind::Normal,
            Some(Intrinsic::Object),
            &function_prototype,
        );
        object_prototype.set("constructor", JsValue::Object(object_constructor.clone()));
        function_prototype.set(
            "constructor",
            JsValue::Object(builtin_function(
                "Function",
                FunctionKind::Normal,
                Some(Intrinsic::Function),
                &function_prototype,
            )),
        );

        let ordinary = |which| {
            install(
                ObjectClass::Ordinary,
                &object_prototype,
                &function_prototype,
                which,
            )
        };

        let generator_function_prototype = ordinary(Intrinsic::GeneratorFunction);
        let async_function_prototype = ordinary(Intrinsic::AsyncFunction);
        let async_generator_function_prototype = ordinary(Intrinsic::AsyncGeneratorFunction);
        let boolean_prototype = ordinary(Intrinsic::Boolean);
        let number_prototype = ordinary(Intrinsic::Number);
        let string_prototype = ordinary(Intrinsic::String);
        let bigint_prototype = ordinary(Intrinsic::BigInt);
        let symbol_prototype = ordinary(Intrinsic::Symbol);
        let date_prototype = ordinary(Intrinsic::Date);
        let regexp_prototype = ordinary(Intrinsic::RegExp);
        let map_prototype = ordinary(Intrinsic::Map);
        let set_prototype = ordinary(Intrinsic::Set);
        let weak_map_prototype = ordinary(Intrinsic::WeakMap);
        let weak_set_prototype = ordinary(Intrinsic::WeakSet);
        let array_prototype = install(
            ObjectClass::Array(Vec::new()),
            &object_prototype,
            &function_prototype,
            Intrinsic::Array,
        );

        let promise_prototype = ordinary(Intrinsic::Promise);
        promise_prototype.set(
            "then",
            JsValue::Object(builtin_function(
                "then",
                FunctionKind::Normal,
                None,
                &function_prototype,
            )),
        );

        let base_error_prototype = ordinary(Intrinsic::Error(ErrorKind::Error));
        let mut error_prototypes = HashMap::new();
        for kind in ErrorKind::ALL {
            let prototype = if kind == ErrorKind::Error {
                base_error_prototype.clone()
            } else {
                install(
                    ObjectClass::Ordinary,
                    &base_error_prototype,
                    &function_prototype,
                    Intrinsic::Error(kind),
                )
            };
            error_prototypes.insert(kind, prototype);
        }

        debug!("realm intrinsics initialised");

        Realm {
            intrinsics: Arc::new(Intrinsics {
                object_prototype,
                object_constructor,
                function_prototype,
                generator_function_prototype,
                async_function_prototype,
                async_generator_function_prototype,
                array_prototype,
                boolean_prototype,
                number_prototype,
                string_prototype,
                bigint_prototype,
                symbol_prototype,
                date_prototype,
                regexp_prototype,
                error_prototypes,
                map_prototype,
                set_prototype,
                weak_map_prototype,
                weak_set_prototype,
                promise_prototype,
            }),
        }
    }

    /// `%Object.prototype%`
    pub fn object_prototype(&self) -> &JsObject {
        &self.intrinsics.object_prototype
    }

    /// `%Object%`
    pub fn object_constructor(&self) -> &JsObject {
        &self.intrinsics.object_constructor
    }

    /// `%Function.prototype%`
    pub fn function_prototype(&self) -> &JsObject {
        &self.intrinsics.function_prototype
    }

    fn make(&self, class: ObjectClass, prototype: &JsObject) -> JsValue {
        JsValue::Object(JsObject::new(class, Some(prototype.clone())))
    }

    /// `{}`
    pub fn object(&self) -> JsValue {
        self.make(ObjectClass::Ordinary, &self.intrinsics.object_prototype)
    }

    /// `Object.create(proto)`; `None` creates a null-prototype dictionary.
    pub fn object_create(&self, proto: Option<&JsObject>) -> JsValue {
        JsValue::Object(JsObject::new(ObjectClass::Ordinary, proto.cloned()))
    }

    /// `[...values]`
    pub fn array(&self, values: Vec<JsValue>) -> JsValue {
        self.make(ObjectClass::Array(values), &self.intrinsics.array_prototype)
    }

    /// `Object(value)`: wraps a primitive in its wrapper object.
    ///
    /// Objects are returned unchanged; `undefined` and `null` produce a new
    /// plain object.
    pub fn boxed(&self, value: JsValue) -> JsValue {
        let i = &self.intrinsics;
        match value {
            JsValue::Undefined | JsValue::Null => self.object(),
            JsValue::Boolean(b) => self.make(ObjectClass::Boolean(b), &i.boolean_prototype),
            JsValue::Number(n) => self.make(ObjectClass::Number(n), &i.number_prototype),
            JsValue::String(s) => self.make(ObjectClass::String(s), &i.string_prototype),
            JsValue::BigInt(n) => self.make(ObjectClass::BigInt(n), &i.bigint_prototype),
            JsValue::Symbol(sym) => self.make(ObjectClass::Symbol(sym), &i.symbol_prototype),
            JsValue::Object(obj) => JsValue::Object(obj),
        }
    }

    /// `new Date(ms)`
    pub fn date(&self, ms: f64) -> JsValue {
        self.make(ObjectClass::Date(time_clip(ms)), &self.intrinsics.date_prototype)
    }

    /// `new Date(text)`; unparseable text yields an Invalid Date.
    pub fn date_from_str(&self, text: &str) -> JsValue {
        self.make(
            ObjectClass::Date(DateParser::parse(text)),
            &self.intrinsics.date_prototype,
        )
    }

    /// `new Date()`
    pub fn date_now(&self) -> JsValue {
        self.date(DateParser::now())
    }

    /// `new RegExp(pattern, flags)`
    pub fn regexp(&self, pattern: &str, flags: &str) -> Result<JsValue, ValueError> {
        let data = RegExpData::new(pattern, flags)?;
        Ok(self.make(ObjectClass::RegExp(data), &self.intrinsics.regexp_prototype))
    }

    /// `new TypeError(message)` and friends
    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> JsValue {
        let i = &self.intrinsics;
        let prototype = i
            .error_prototypes
            .get(&kind)
            .unwrap_or(&i.object_prototype);
        self.make(
            ObjectClass::Error(ErrorData {
                kind,
                message: message.into(),
            }),
            prototype,
        )
    }

    /// `new Map()`
    pub fn map(&self) -> JsValue {
        self.map_from(Vec::new())
    }

    /// `new Map(entries)`
    pub fn map_from(&self, entries: Vec<(JsValue, JsValue)>) -> JsValue {
        self.make(ObjectClass::Map(entries), &self.intrinsics.map_prototype)
    }

    /// `new Set()`
    pub fn set(&self) -> JsValue {
        self.set_from(Vec::new())
    }

    /// `new Set(values)`
    pub fn set_from(&self, values: Vec<JsValue>) -> JsValue {
        self.make(ObjectClass::Set(values), &self.intrinsics.set_prototype)
    }

    /// `new WeakMap()`
    pub fn weak_map(&self) -> JsValue {
        self.make(ObjectClass::WeakMap, &self.intrinsics.weak_map_prototype)
    }

    /// `new WeakSet()`
    pub fn weak_set(&self) -> JsValue {
        self.make(ObjectClass::WeakSet, &self.intrinsics.weak_set_prototype)
    }

    fn function_of(&self, name: &str, kind: FunctionKind) -> JsValue {
        let i = &self.intrinsics;
        let prototype = match kind {
            FunctionKind::Generator => &i.generator_function_prototype,
            FunctionKind::Async => &i.async_function_prototype,
            FunctionKind::AsyncGenerator => &i.async_generator_function_prototype,
            FunctionKind::Normal | FunctionKind::Arrow | FunctionKind::Class => {
                &i.function_prototype
            }
        };
        JsValue::Object(builtin_function(name, kind, None, prototype))
    }

    /// `function name() {}`
    pub fn function(&self, name: &str) -> JsValue {
        self.function_of(name, FunctionKind::Normal)
    }

    /// `() => {}`
    pub fn arrow_function(&self) -> JsValue {
        self.function_of("", FunctionKind::Arrow)
    }

    /// `function* name() {}`
    pub fn generator_function(&self, name: &str) -> JsValue {
        self.function_of(name, FunctionKind::Generator)
    }

    /// `async function name() {}`
    pub fn async_function(&self, name: &str) -> JsValue {
        self.function_of(name, FunctionKind::Async)
    }

    /// `async function* name() {}`
    pub fn async_generator_function(&self, name: &str) -> JsValue {
        self.function_of(name, FunctionKind::AsyncGenerator)
    }

    /// `class name {}`
    ///
    /// The constructor's `prototype` property holds a fresh prototype whose
    /// `constructor` points back at the class.
    pub fn class(&self, name: &str) -> JsValue {
        let constructor = self.function_of(name, FunctionKind::Class);
        let prototype = JsObject::new(
            ObjectClass::Ordinary,
            Some(self.intrinsics.object_prototype.clone()),
        );
        prototype.set("constructor", constructor.clone());
        if let JsValue::Object(ctor) = &constructor {
            ctor.set("prototype", JsValue::Object(prototype));
        }
        constructor
    }

    /// `new C()` for a constructor made by [`Realm::class`] or
    /// [`Realm::function`].
    ///
    /// Falls back to `Object.prototype` when the constructor has no object
    /// `prototype` property, as OrdinaryCreateFromConstructor does.
    pub fn construct(&self, constructor: &JsValue) -> JsValue {
        match constructor.get("prototype") {
            JsValue::Object(proto) => {
                JsValue::Object(JsObject::new(ObjectClass::Ordinary, Some(proto)))
            }
            _ => self.object(),
        }
    }

    fn promise(&self, state: PromiseState) -> JsValue {
        self.make(ObjectClass::Promise(state), &self.intrinsics.promise_prototype)
    }

    /// `Promise.resolve(value)`
    pub fn promise_resolve(&self, value: JsValue) -> JsValue {
        self.promise(PromiseState::Fulfilled(value))
    }

    /// `Promise.reject(reason)`
    pub fn promise_reject(&self, reason: JsValue) -> JsValue {
        self.promise(PromiseState::Rejected(reason))
    }

    /// `new Promise(() => {})`
    pub fn pending_promise(&self) -> JsValue {
        self.promise(PromiseState::Pending)
    }
}
