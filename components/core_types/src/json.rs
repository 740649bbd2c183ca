//! JSON import
//!
//! Turns JSON documents into values of a realm: objects become plain objects,
//! arrays become Arrays, everything else maps to the matching primitive.

use crate::error::ValueError;
use crate::realm::Realm;
use crate::value::JsValue;

impl JsValue {
    /// Convert a parsed JSON document into a value of `realm`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{JsValue, Realm};
    ///
    /// let realm = Realm::new();
    /// let doc = serde_json::json!({ "id": 7, "tags": ["a"] });
    /// let value = JsValue::from_json(&realm, &doc);
    ///
    /// assert_eq!(value.get("id"), JsValue::number(7.0));
    /// assert!(value.get("tags").is_array());
    /// ```
    pub fn from_json(realm: &Realm, json: &serde_json::Value) -> JsValue {
        match json {
            serde_json::Value::Null => JsValue::Null,
            serde_json::Value::Bool(b) => JsValue::Boolean(*b),
            serde_json::Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => JsValue::String(s.clone()),
            serde_json::Value::Array(items) => realm.array(
                items
                    .iter()
                    .map(|item| JsValue::from_json(realm, item))
                    .collect(),
            ),
            serde_json::Value::Object(map) => {
                let object = realm.object();
                if let JsValue::Object(obj) = &object {
                    for (key, value) in map {
                        obj.set(key.as_str(), JsValue::from_json(realm, value));
                    }
                }
                object
            }
        }
    }
}

impl Realm {
    /// `JSON.parse(text)`
    pub fn parse_json(&self, text: &str) -> Result<JsValue, ValueError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(JsValue::from_json(self, &json))
    }
}
