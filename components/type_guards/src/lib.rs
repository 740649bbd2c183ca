//! Runtime type classification for JavaScript values.
//!
//! Three layers over [`core_types::JsValue`]:
//!
//! - [`tag`] - the canonical `[object Kind]` tag of any value
//! - [`guards`] - boolean predicates, one per semantic type
//! - [`asserts`] - the same predicates as assertions that fail with a fixed
//!   message and hand back the narrowed value on success
//!
//! [`Guard`] names every predicate so one can be chosen from data.
//!
//! # Examples
//!
//! ```
//! use core_types::{JsValue, Realm};
//! use type_guards::{asserts, guards};
//!
//! let realm = Realm::new();
//! let boxed = realm.boxed(JsValue::number(f64::NAN));
//!
//! assert!(guards::is_number(&boxed));
//! assert!(!guards::is_strict_number(&boxed));
//!
//! let err = asserts::is_strict_number(&boxed).unwrap_err();
//! assert_eq!(err.to_string(), "value is not a strict number");
//!
//! let n: f64 = asserts::is_integer(&JsValue::number(3.0)).unwrap();
//! assert_eq!(n, 3.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod asserts;
pub mod catalog;
mod error;
pub mod guards;
pub mod tag;

pub use asserts::{assert, AssertResult};
pub use catalog::{Guard, UnknownGuard};
pub use error::AssertionError;
pub use tag::{object_type_name, type_tag, TypeTag, UnknownTypeTag};
