use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::runtime::{sass_function::SassFunction, stable_hash};

/// Script value shared between host code and the compiler.
///
/// Heap-backed variants use `Arc` so values can be cloned cheaply and read
/// from several threads. Values are immutable after creation.
///
/// Every variant satisfies the same contract: equality never fails across
/// variants, and `a == b` implies `a.hash_code() == b.hash_code()`. That is
/// what lets values key `HashMap`s and `HashSet`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absence of value.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// UTF-8 string value.
    String(Arc<str>),
    /// Ordered collection of values.
    List(Arc<Vec<Value>>),
    /// First-class function.
    Function(SassFunction),
}

impl Value {
    /// Returns the runtime type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Bool",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Function(_) => "Function",
        }
    }

    pub fn as_function(&self) -> Option<&SassFunction> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Process-independent hash, consistent with `==`.
    pub fn hash_code(&self) -> u64 {
        match self {
            Value::Null => stable_hash::hash_bytes(&[0]),
            Value::Boolean(v) => stable_hash::hash_bytes(&[1, u8::from(*v)]),
            Value::String(v) => stable_hash::hash_str(v),
            Value::List(elements) => elements.iter().fold(
                stable_hash::hash_u64(elements.len() as u64),
                |seed, element| stable_hash::combine(seed, element.hash_code()),
            ),
            Value::Function(function) => function.hash_code(),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<SassFunction> for Value {
    fn from(function: SassFunction) -> Self {
        Value::Function(function)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::List(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Function(function) => write!(f, "{}", function),
        }
    }
}
