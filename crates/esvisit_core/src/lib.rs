//! # esvisit_core
//!
//! Traversal engine for esvisit.
//!
//! This crate provides:
//! - The child-key registry (bundled ESTree table, per-call overrides,
//!   fallback policies)
//! - Type-name dispatch to caller-supplied handlers
//! - The recursive walk, with handlers opting in to continued recursion
//! - Reusable [`Visitor`]s and configuration files
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use esvisit_ast::Node;
//! use esvisit_core::{Handlers, VisitOptions, visit};
//! use serde_json::json;
//!
//! let tree = Node::from_json(json!({
//!     "type": "ObjectExpression",
//!     "properties": [{
//!         "type": "Property",
//!         "key": { "type": "Identifier", "name": "a" },
//!         "value": { "type": "Identifier", "name": "b" }
//!     }]
//! }));
//!
//! let log = RefCell::new(Vec::new());
//! let handlers = Handlers::new().on("Identifier", |_, node| {
//!     log.borrow_mut().extend(node.get_str("name"));
//!     Ok(())
//! });
//!
//! visit(tree.as_ref(), &handlers, &VisitOptions::new()).unwrap();
//! assert_eq!(*log.borrow(), vec!["a", "b"]);
//! ```

mod config;
mod dispatch;
mod error;
pub mod keys;
mod options;
mod syntax;
mod visitor;
mod walker;

pub use config::{FallbackKind, VisitConfig};
pub use dispatch::{Handler, Handlers, effective_type, find_handler};
pub use error::{ConfigError, VisitError};
pub use keys::{ChildKeyTable, KeyTableFile, default_keys, resolve_keys};
pub use options::{Fallback, KeysFn, VisitOptions};
pub use syntax::Syntax;
pub use visitor::Visitor;
pub use walker::{VisitResult, Walker, visit, visit_children};

pub use esvisit_ast::{Child, Node, Slot, Value, WeakNode};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
