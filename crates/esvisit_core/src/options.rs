//! Per-traversal options.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use esvisit_ast::Node;

use crate::keys::{ChildKeyTable, resolve_keys};
use crate::{FallbackKind, VisitConfig, VisitError};

/// Signature of a custom fallback: computes the child field names of a node
/// whose type is in no table.
pub type KeysFn = dyn Fn(&Node) -> Vec<String>;

/// What to do with a node type found in no child-key table.
#[derive(Clone, Default)]
pub enum Fallback {
    /// Fail with [`VisitError::UnknownNodeType`].
    #[default]
    Error,
    /// Treat every own field except `type` as a child field.
    Iteration,
    /// Ask a function. Names it returns that the node lacks are skipped.
    Custom(Rc<KeysFn>),
}

impl Fallback {
    /// Creates a custom fallback.
    pub fn custom<F>(keys_of: F) -> Self
    where
        F: Fn(&Node) -> Vec<String> + 'static,
    {
        Self::Custom(Rc::new(keys_of))
    }
}

impl fmt::Debug for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Error => f.write_str("Error"),
            Fallback::Iteration => f.write_str("Iteration"),
            Fallback::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<FallbackKind> for Fallback {
    fn from(kind: FallbackKind) -> Self {
        match kind {
            FallbackKind::Error => Fallback::Error,
            FallbackKind::Iteration => Fallback::Iteration,
        }
    }
}

/// Options of one traversal: the override table and the fallback policy.
#[derive(Debug, Clone, Default)]
pub struct VisitOptions {
    /// Applied to types found in no table.
    pub fallback: Fallback,
    /// Merged over the default table, per type.
    pub child_visitor_keys: ChildKeyTable,
}

impl VisitOptions {
    /// Creates options with the `Error` fallback and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback policy.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replaces the whole override table.
    pub fn with_child_visitor_keys(mut self, table: ChildKeyTable) -> Self {
        self.child_visitor_keys = table;
        self
    }

    /// Overrides the child fields of a single type.
    pub fn with_keys<I, S>(mut self, node_type: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.child_visitor_keys
            .insert(node_type.into(), keys.into_iter().map(Into::into).collect());
        self
    }

    /// Resolves the child fields of `node` under these options.
    pub fn resolve_keys<'a>(
        &'a self,
        node: &Node,
        node_type: &str,
    ) -> Result<Cow<'a, [String]>, VisitError> {
        resolve_keys(node, node_type, &self.child_visitor_keys, &self.fallback)
    }
}

impl From<&VisitConfig> for VisitOptions {
    fn from(config: &VisitConfig) -> Self {
        Self {
            fallback: config.fallback.into(),
            child_visitor_keys: config.child_visitor_keys.clone(),
        }
    }
}
