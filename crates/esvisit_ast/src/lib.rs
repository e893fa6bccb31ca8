//! # esvisit_ast
//!
//! Node model for esvisit.
//!
//! This crate provides the loosely-typed tree shape that the traversal engine
//! consumes. A tree is whatever a parser produced: mappings from field name to
//! value, discriminated by an optional `type` string, possibly carrying extra
//! fields such as `parent` back-references.
//!
//! ## Architecture
//!
//! - [`Node`] is a shared handle (`Rc`) to an ordered field map
//! - [`Value`] distinguishes owning edges ([`Value::Node`]) from
//!   back-references ([`Value::Ref`])
//! - [`Child`] / [`Slot`] classify a field once, before any recursion happens
//!
//! ## Example
//!
//! ```rust
//! use esvisit_ast::{Child, Node, Slot};
//! use serde_json::json;
//!
//! let node = Node::from_json(json!({
//!     "type": "ExpressionStatement",
//!     "expression": { "type": "Identifier", "name": "foo" }
//! }))
//! .unwrap();
//!
//! assert_eq!(node.node_type().as_deref(), Some("ExpressionStatement"));
//! assert!(matches!(node.child("expression"), Child::One(Slot::Node(_))));
//! ```

mod child;
mod node;
mod value;

pub use child::{Child, Slot};
pub use node::{Node, WeakNode};
pub use value::Value;
