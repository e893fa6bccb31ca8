//! Reusable visitors.
//!
//! A [`Visitor`] bundles a handler set with the options it should run under,
//! so the same configuration can walk many trees.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use esvisit_ast::Node;
//! use esvisit_core::{Fallback, VisitOptions, Visitor};
//! use serde_json::json;
//!
//! let names = RefCell::new(Vec::new());
//! let visitor = Visitor::new(None, VisitOptions::new().with_fallback(Fallback::Iteration))
//!     .on("Identifier", |_, node| {
//!         names.borrow_mut().extend(node.get_str("name"));
//!         Ok(())
//!     });
//!
//! let tree = Node::from_json(json!({
//!     "type": "TestStatement",
//!     "id": { "type": "Identifier", "name": "decl" }
//! }));
//! visitor.visit(tree.as_ref()).unwrap();
//!
//! assert_eq!(*names.borrow(), vec!["decl"]);
//! ```

use esvisit_ast::Node;

use crate::{Handlers, VisitOptions, VisitResult, Walker};

/// A handler set bound to one override table and one fallback policy.
///
/// A visitor holds no per-walk state, so it can be reused for any number of
/// sequential walks.
#[derive(Debug, Default)]
pub struct Visitor<'h> {
    handlers: Handlers<'h>,
    options: VisitOptions,
}

impl<'h> Visitor<'h> {
    /// Creates a visitor.
    ///
    /// `seed` provides base handlers. Handlers added later through
    /// [`Visitor::on`] or [`Visitor::extend`] take precedence over seed
    /// handlers for the same type.
    pub fn new(seed: Option<Handlers<'h>>, options: VisitOptions) -> Self {
        Self {
            handlers: seed.unwrap_or_default(),
            options,
        }
    }

    /// Adds a handler for `node_type`, replacing any existing one.
    pub fn on<F>(mut self, node_type: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Walker<'_>, &Node) -> VisitResult + 'h,
    {
        self.handlers.insert(node_type, handler);
        self
    }

    /// Layers `derived` over this visitor's handlers.
    pub fn extend(mut self, derived: Handlers<'h>) -> Self {
        self.handlers.extend(derived);
        self
    }

    /// Visits a node: dispatches to its handler, or visits its children if it
    /// has none. `None` is a no-op.
    pub fn visit(&self, node: Option<&Node>) -> VisitResult {
        Walker::new(&self.handlers, &self.options).visit(node)
    }

    /// Visits the children of a node without calling its own handler. `None`
    /// is a no-op.
    pub fn visit_children(&self, node: Option<&Node>) -> VisitResult {
        Walker::new(&self.handlers, &self.options).visit_children(node)
    }

    /// Returns the handler set.
    pub fn handlers(&self) -> &Handlers<'h> {
        &self.handlers
    }

    /// Returns the options.
    pub fn options(&self) -> &VisitOptions {
        &self.options
    }
}
