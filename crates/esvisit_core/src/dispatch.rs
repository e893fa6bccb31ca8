//! Handler sets and type-name dispatch.

use std::collections::HashMap;
use std::fmt;

use esvisit_ast::Node;

use crate::{Syntax, VisitResult, Walker};

/// A handler invoked for nodes of one type.
///
/// The handler replaces default recursion for the node it receives; it calls
/// [`Walker::visit_children`] itself if it wants the subtree visited.
pub type Handler<'h> = dyn Fn(&mut Walker<'_>, &Node) -> VisitResult + 'h;

/// Handlers keyed by node type name.
///
/// Keys are matched exactly and case-sensitively against a node's effective
/// type; there is no inheritance between type names.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use esvisit_core::Handlers;
///
/// let names = RefCell::new(Vec::new());
/// let handlers = Handlers::new().on("Identifier", |_, node| {
///     names.borrow_mut().extend(node.get_str("name"));
///     Ok(())
/// });
/// assert!(handlers.contains("Identifier"));
/// ```
#[derive(Default)]
pub struct Handlers<'h> {
    map: HashMap<String, Box<Handler<'h>>>,
}

impl<'h> Handlers<'h> {
    /// Creates an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler, replacing any handler for the same type.
    pub fn on<F>(mut self, node_type: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Walker<'_>, &Node) -> VisitResult + 'h,
    {
        self.insert(node_type, handler);
        self
    }

    /// Adds a handler in place, replacing any handler for the same type.
    pub fn insert<F>(&mut self, node_type: impl Into<String>, handler: F)
    where
        F: Fn(&mut Walker<'_>, &Node) -> VisitResult + 'h,
    {
        self.map.insert(node_type.into(), Box::new(handler));
    }

    /// Removes the handler for a type.
    pub fn remove(&mut self, node_type: &str) -> bool {
        self.map.remove(node_type).is_some()
    }

    /// Returns the handler registered for exactly `node_type`.
    #[inline]
    pub fn get(&self, node_type: &str) -> Option<&Handler<'h>> {
        self.map.get(node_type).map(|handler| handler.as_ref())
    }

    /// Returns true if a handler is registered for `node_type`.
    pub fn contains(&self, node_type: &str) -> bool {
        self.map.contains_key(node_type)
    }

    /// Returns the registered type names in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Returns the number of handlers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Moves every handler of `derived` into this set. Handlers of `derived`
    /// win over existing handlers for the same type.
    pub fn extend(&mut self, derived: Handlers<'h>) {
        self.map.extend(derived.map);
    }

    /// Layers this set over `base`: the result has every handler of both, and
    /// this set's handler wherever both define the same type.
    pub fn layered_over(self, mut base: Handlers<'h>) -> Handlers<'h> {
        base.extend(self);
        base
    }
}

impl fmt::Debug for Handlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.types().collect();
        types.sort_unstable();
        f.debug_struct("Handlers").field("types", &types).finish()
    }
}

/// Returns the type name used for dispatch and key lookup.
///
/// Nodes without a usable `type` dispatch as [`Syntax::PROPERTY`], which is
/// how shorthand `{key, value}` entries reach a `Property` handler.
#[inline]
pub fn effective_type(node: &Node) -> String {
    node.node_type().unwrap_or_else(|| Syntax::PROPERTY.to_string())
}

/// Finds the handler for `node`'s effective type.
pub fn find_handler<'a, 'h>(node: &Node, handlers: &'a Handlers<'h>) -> Option<&'a Handler<'h>> {
    handlers.get(&effective_type(node))
}
