//! Node definition.
//!
//! The dynamic AST node handed to handlers during traversal.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::{Child, Slot, Value};

/// Name of the discriminator field.
const TYPE_FIELD: &str = "type";

/// A node in the syntax tree.
///
/// `Node` is a cheap, clonable handle to a shared, ordered field map. Cloning
/// a `Node` clones the handle, not the fields. Field order is the order in
/// which fields were inserted (for JSON input: document order), which is the
/// order the iteration fallback enumerates them in.
///
/// Fields live behind a `RefCell` so that a tree can be completed after
/// construction, e.g. by pointing a child's `parent` field back at its
/// enclosing node.
///
/// # Example
///
/// ```rust
/// use esvisit_ast::{Node, Value};
///
/// let statement = Node::with_type("ExpressionStatement");
/// let identifier = Node::with_type("Identifier");
/// identifier.insert("name", "foo");
/// statement.insert("expression", identifier.clone());
/// identifier.insert("parent", Value::back_ref(&statement));
///
/// assert_eq!(identifier.get_str("name").as_deref(), Some("foo"));
/// ```
#[derive(Clone, Default)]
pub struct Node(Rc<NodeInner>);

/// A non-owning handle to a [`Node`].
///
/// Stored in [`Value::Ref`]; never followed by traversal.
#[derive(Clone, Default)]
pub struct WeakNode(Weak<NodeInner>);

#[derive(Default)]
struct NodeInner {
    fields: RefCell<Vec<(String, Value)>>,
}

impl Node {
    /// Creates a node without any field, not even `type`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node whose only field is `type`.
    pub fn with_type(node_type: impl Into<String>) -> Self {
        let node = Self::new();
        node.insert(TYPE_FIELD, Value::String(node_type.into()));
        node
    }

    /// Converts a JSON document into a node tree.
    ///
    /// Returns `None` unless the document is a JSON object; a `null` root is
    /// how callers spell "no tree".
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        match Value::from(json) {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Sets a field, replacing any previous value under the same name.
    ///
    /// A replaced field keeps its position in the field order.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut fields = self.0.fields.borrow_mut();
        match fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => fields.push((key, value)),
        }
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut fields = self.0.fields.borrow_mut();
        let index = fields.iter().position(|(name, _)| name == key)?;
        Some(fields.remove(index).1)
    }

    /// Returns a copy of a field value.
    ///
    /// Nested nodes are returned as handles, so this is shallow.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .fields
            .borrow()
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }

    /// Returns a field's value if it is a string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the node has a field with this name.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.fields.borrow().iter().any(|(name, _)| name == key)
    }

    /// Returns the node's own field names in order, `type` included.
    pub fn keys(&self) -> Vec<String> {
        self.0
            .fields
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.fields.borrow().len()
    }

    /// Returns true if the node has no field at all.
    pub fn is_empty(&self) -> bool {
        self.0.fields.borrow().is_empty()
    }

    /// Returns the `type` discriminator.
    ///
    /// Only a non-empty string counts; any other `type` value is treated as
    /// missing.
    pub fn node_type(&self) -> Option<String> {
        match self.get(TYPE_FIELD)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Returns true if the node's `type` field is a string, even an empty one.
    ///
    /// This decides whether traversal treats the value as a node. An empty
    /// `type` still has no [`node_type`](Node::node_type).
    pub fn has_type(&self) -> bool {
        matches!(
            self.0.fields.borrow().iter().find(|(name, _)| name == TYPE_FIELD),
            Some((_, Value::String(_)))
        )
    }

    /// Classifies the value stored under `key`.
    ///
    /// A missing field and a `null` field are both [`Child::Absent`].
    pub fn child(&self, key: &str) -> Child {
        let fields = self.0.fields.borrow();
        match fields.iter().find(|(name, _)| name == key) {
            None | Some((_, Value::Null)) => Child::Absent,
            Some((_, Value::Array(items))) => Child::Many(items.iter().map(Slot::of).collect()),
            Some((_, value)) => Child::One(Slot::of(value)),
        }
    }

    /// Creates a non-owning handle to this node.
    pub fn downgrade(&self) -> WeakNode {
        WeakNode(Rc::downgrade(&self.0))
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the address of the shared node, stable while any handle lives.
    ///
    /// Two handles have the same address exactly when [`Node::ptr_eq`] holds.
    #[inline]
    pub fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl WeakNode {
    /// Returns the node if it is still alive.
    pub fn upgrade(&self) -> Option<Node> {
        self.0.upgrade().map(Node)
    }
}

impl fmt::Debug for Node {
    // Field values are left out: a node may be reachable from itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.node_type())
            .field("keys", &self.keys())
            .finish()
    }
}

impl fmt::Debug for WeakNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakNode")
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let fields = self.0.fields.borrow();
        let present = fields
            .iter()
            .filter(|(_, value)| !matches!(value, Value::Ref(_)));

        let mut map = serializer.serialize_map(Some(present.clone().count()))?;
        for (name, value) in present {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
