//! Assertion failure

use core_types::{ErrorKind, JsValue, Realm};
use std::borrow::Cow;
use thiserror::Error;

/// A value failed a type assertion.
///
/// The message is fixed per assertion and never mentions the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: Cow<'static, str>,
}

impl AssertionError {
    /// Create an error with the given message
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        AssertionError {
            message: message.into(),
        }
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Materialise the failure as a `TypeError` object of `realm`, ready to
    /// be thrown into script code.
    pub fn to_js_error(&self, realm: &Realm) -> JsValue {
        realm.error(ErrorKind::TypeError, self.message())
    }
}
