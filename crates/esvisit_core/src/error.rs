//! Traversal and configuration error types.

use thiserror::Error;

/// Errors that can occur during traversal.
#[derive(Debug, Error)]
pub enum VisitError {
    /// The node's type is in neither the override table nor the default
    /// table, and the fallback policy is [`Fallback::Error`](crate::Fallback::Error).
    #[error("Unknown node type {0}.")]
    UnknownNodeType(String),

    /// A listed child field points at a node the walker is currently inside.
    #[error("Cyclic child: {node_type}.{key} refers to an enclosing node.")]
    CyclicChild {
        /// Effective type of the node holding the field.
        node_type: String,
        /// The listed field name.
        key: String,
    },

    /// Raised by a handler to abort the walk.
    #[error("Handler error: {0}")]
    Handler(String),
}

impl VisitError {
    /// Creates an unknown node type error.
    pub fn unknown_node_type(node_type: impl Into<String>) -> Self {
        Self::UnknownNodeType(node_type.into())
    }

    /// Creates a cyclic child error.
    pub fn cyclic_child(node_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self::CyclicChild {
            node_type: node_type.into(),
            key: key.into(),
        }
    }

    /// Creates a handler error.
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or JSONC.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// The document does not describe a configuration.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an invalid config error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
