//! Child slot classification.
//!
//! Before the walker recurses into a field it asks the node to classify the
//! field's value. Classification happens exactly once per field and is the
//! only place that decides what is node-like.

use crate::{Node, Value};

/// A field value as seen by traversal.
#[derive(Debug, Clone)]
pub enum Child {
    /// The field is missing or `null`.
    Absent,
    /// The field holds a single value.
    One(Slot),
    /// The field holds a sequence; entries keep their order.
    Many(Vec<Slot>),
}

/// A single classified value.
#[derive(Debug, Clone)]
pub enum Slot {
    /// `null`.
    Absent,
    /// A node whose `type` is a string. An empty string still counts.
    Node(Node),
    /// A node without a string `type`, e.g. a shorthand `{key, value}` entry.
    Untyped(Node),
    /// Anything traversal never enters: scalars, nested arrays and
    /// back-references.
    Opaque,
}

impl Slot {
    /// Classifies a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Slot::Absent,
            Value::Node(node) if node.has_type() => Slot::Node(node.clone()),
            Value::Node(node) => Slot::Untyped(node.clone()),
            Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_)
            | Value::Ref(_) => Slot::Opaque,
        }
    }

    /// Returns the node for both typed and untyped slots.
    pub fn node(&self) -> Option<&Node> {
        match self {
            Slot::Node(node) | Slot::Untyped(node) => Some(node),
            Slot::Absent | Slot::Opaque => None,
        }
    }
}

impl Child {
    /// Returns true if the field is missing or `null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Child::Absent)
    }
}
