//! JavaScript Symbol primitive
//!
//! Symbols are unique, immutable primitive values. Identity is an id drawn
//! from a process-wide counter; the description is for display only.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Global registry for Symbol.for()
static SYMBOL_REGISTRY: LazyLock<Mutex<HashMap<String, SymbolValue>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A JavaScript Symbol value
#[derive(Clone)]
pub struct SymbolValue {
    /// Unique identifier for this symbol
    id: u64,
    /// Optional description for debugging
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with optional description (`Symbol(desc)`)
    pub fn new(description: Option<String>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue { id, description }
    }

    /// Get or create a symbol in the global registry (`Symbol.for(key)`)
    ///
    /// # Example
    /// ```
    /// use core_types::SymbolValue;
    ///
    /// let a = SymbolValue::for_key("shared");
    /// let b = SymbolValue::for_key("shared");
    /// assert_eq!(a, b);
    /// ```
    pub fn for_key(key: &str) -> SymbolValue {
        SYMBOL_REGISTRY
            .lock()
            .entry(key.to_string())
            .or_insert_with(|| SymbolValue::new(Some(key.to_string())))
            .clone()
    }

    /// Key of a registered symbol (`Symbol.keyFor(sym)`)
    pub fn key_for(&self) -> Option<String> {
        SYMBOL_REGISTRY
            .lock()
            .iter()
            .find(|(_, sym)| sym.id == self.id)
            .map(|(key, _)| key.clone())
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// `Symbol(description)` or `Symbol()`
impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

impl fmt::Debug for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self, self.id)
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl std::hash::Hash for SymbolValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
