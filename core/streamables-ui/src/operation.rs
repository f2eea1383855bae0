use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of mutation an [`Operation`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Assign a new value to a property of an element.
    Set,
}

impl OpKind {
    /// Wire name of the kind (e.g. `"set"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "set",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value carried by an [`Operation`].
///
/// Serialized untagged so hosts see plain JSON scalars:
/// `"value": "error"` or `"value": false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpValue {
    Text(String),
    Bool(bool),
}

impl OpValue {
    /// Returns the text payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for OpValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for OpValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<bool> for OpValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A single declarative UI mutation: `op` the property `prop` of element `id`
/// to `value`.
///
/// Operations are produced by actions and never mutated afterwards; the host
/// decides how (and whether) to apply them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub op: OpKind,
    pub id: String,
    pub prop: String,
    pub value: OpValue,
}

impl Operation {
    /// Shorthand for a `set` operation.
    pub fn set(id: impl Into<String>, prop: impl Into<String>, value: impl Into<OpValue>) -> Self {
        Self {
            op: OpKind::Set,
            id: id.into(),
            prop: prop.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            OpValue::Text(s) => write!(f, "{} {}.{} = {:?}", self.op, self.id, self.prop, s),
            OpValue::Bool(b) => write!(f, "{} {}.{} = {}", self.op, self.id, self.prop, b),
        }
    }
}
