//! Traversal engine.
//!
//! [`visit`] and [`visit_children`] are the two mutually recursive operations
//! of a walk. Both are also available on [`Walker`], the value handlers
//! receive, so a handler can continue into a subtree explicitly.

use std::collections::HashSet;

use esvisit_ast::{Child, Node, Slot};
use tracing::trace;

use crate::dispatch::{Handlers, effective_type};
use crate::{Syntax, VisitError, VisitOptions};

/// Result type of visit operations and handlers.
pub type VisitResult = Result<(), VisitError>;

/// Walks a tree with a handler set and options.
///
/// This function:
/// 1. Returns immediately for a `None` node
/// 2. Calls the handler registered for the node's effective type, if any,
///    and does not descend any further on its own
/// 3. Otherwise visits the node's children (see [`visit_children`])
///
/// # Arguments
///
/// * `node` - The root to visit; `None` is a no-op
/// * `handlers` - Handlers keyed by node type
/// * `options` - Override table and fallback policy
///
/// # Errors
///
/// [`VisitError::UnknownNodeType`] when a node without a handler has a type
/// found in no table and the fallback is `Error`, plus whatever a handler
/// returns.
pub fn visit(
    node: Option<&Node>,
    handlers: &Handlers<'_>,
    options: &VisitOptions,
) -> VisitResult {
    Walker::new(handlers, options).visit(node)
}

/// Visits the children of a node, bypassing its own handler.
///
/// Children are the fields named by the resolved key list, visited in key
/// order; sequence entries are visited in order. `null` entries, scalars and
/// typeless values are skipped, except that typeless entries of an
/// `ObjectExpression`/`ObjectPattern`'s `properties` are visited as
/// `Property`.
///
/// # Arguments
///
/// * `node` - The parent node; `None` is a no-op
/// * `handlers` - Handlers keyed by node type
/// * `options` - Override table and fallback policy
pub fn visit_children(
    node: Option<&Node>,
    handlers: &Handlers<'_>,
    options: &VisitOptions,
) -> VisitResult {
    Walker::new(handlers, options).visit_children(node)
}

/// State of one walk.
///
/// Besides the handlers and options, the walker remembers the nodes whose
/// children it is currently visiting. A listed child field that points back at
/// one of them is reported as [`VisitError::CyclicChild`] instead of recursing
/// forever.
pub struct Walker<'a> {
    handlers: &'a Handlers<'a>,
    options: &'a VisitOptions,
    ancestors: Vec<Node>,
    // Addresses of `ancestors`, for constant-time cycle checks.
    open: HashSet<*const ()>,
}

impl<'a> Walker<'a> {
    /// Creates a walker.
    pub fn new(handlers: &'a Handlers<'a>, options: &'a VisitOptions) -> Self {
        Self {
            handlers,
            options,
            ancestors: Vec::new(),
            open: HashSet::new(),
        }
    }

    /// Returns the options of this walk.
    #[inline]
    pub fn options(&self) -> &'a VisitOptions {
        self.options
    }

    /// Returns the number of nodes whose children are being visited.
    #[inline]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Visits a node: dispatches to its handler, or visits its children if it
    /// has none.
    pub fn visit(&mut self, node: Option<&Node>) -> VisitResult {
        let Some(node) = node else {
            return Ok(());
        };

        let handlers = self.handlers;
        let node_type = effective_type(node);
        match handlers.get(&node_type) {
            Some(handler) => {
                trace!("Dispatching {} to handler", node_type);
                handler(self, node)
            }
            None => self.walk_children(node, &node_type),
        }
    }

    /// Visits the children of a node without calling its own handler.
    pub fn visit_children(&mut self, node: Option<&Node>) -> VisitResult {
        let Some(node) = node else {
            return Ok(());
        };

        let node_type = effective_type(node);
        self.walk_children(node, &node_type)
    }

    fn walk_children(&mut self, node: &Node, node_type: &str) -> VisitResult {
        let options = self.options;
        let keys = options.resolve_keys(node, node_type)?;

        // A handler may re-enter a node that is already open; only the
        // outermost entry owns its address.
        let opened = self.open.insert(node.as_ptr());
        self.ancestors.push(node.clone());
        let result = keys
            .iter()
            .try_for_each(|key| self.walk_field(node, node_type, key));
        self.ancestors.pop();
        if opened {
            self.open.remove(&node.as_ptr());
        }

        result
    }

    fn walk_field(&mut self, node: &Node, node_type: &str, key: &str) -> VisitResult {
        match node.child(key) {
            Child::Absent => Ok(()),
            Child::One(Slot::Node(child)) => self.walk_child(node_type, key, &child),
            Child::One(_) => Ok(()),
            Child::Many(slots) => {
                let property_list = Syntax::is_property_list(node_type, key);
                for slot in slots {
                    match slot {
                        Slot::Node(child) => self.walk_child(node_type, key, &child)?,
                        Slot::Untyped(child) if property_list => {
                            self.walk_child(node_type, key, &child)?
                        }
                        Slot::Untyped(_) | Slot::Absent | Slot::Opaque => {}
                    }
                }
                Ok(())
            }
        }
    }

    fn walk_child(&mut self, node_type: &str, key: &str, child: &Node) -> VisitResult {
        if self.open.contains(&child.as_ptr()) {
            return Err(VisitError::cyclic_child(node_type, key));
        }
        self.visit(Some(child))
    }
}
