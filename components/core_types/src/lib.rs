//! Core JavaScript value types.
//!
//! This crate provides the value universe the type guards classify: primitive
//! values, heap objects with their internal class, and the realm that owns
//! the built-in prototypes and constructors.
//!
//! # Overview
//!
//! - [`JsValue`] - Tagged representation of JavaScript values
//! - [`JsObject`] - Shared handle to a heap object
//! - [`ObjectClass`] - Internal kind of a heap object (Array, Date, Map, ...)
//! - [`Realm`] - Intrinsics plus factories for every built-in kind
//! - [`ValueError`] - Failures while building values (bad RegExp, bad JSON)
//!
//! # Examples
//!
//! ```
//! use core_types::{JsValue, Realm};
//!
//! let realm = Realm::new();
//!
//! let num = JsValue::number(42.0);
//! assert_eq!(num.type_of(), "number");
//!
//! let boxed = realm.boxed(JsValue::number(42.0));
//! assert_eq!(boxed.type_of(), "object");
//! assert_eq!(boxed.number_value(), Some(42.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod date;
mod error;
mod json;
mod object;
mod realm;
mod regexp;
mod symbol;
mod value;

pub use date::{time_clip, DateParser};
pub use error::{ErrorData, ErrorKind, ValueError};
pub use object::{
    FunctionData, FunctionKind, JsObject, ObjectClass, ObjectData, PromiseState, PropertyKey,
};
pub use realm::{Intrinsic, Realm};
pub use regexp::RegExpData;
pub use symbol::SymbolValue;
pub use value::JsValue;

/// Arbitrary precision integer used for BigInt values.
pub use num_bigint::BigInt;
