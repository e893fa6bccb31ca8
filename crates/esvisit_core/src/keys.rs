//! Child-key registry.
//!
//! Maps a node type to the ordered list of fields that hold its children. The
//! default table is bundled with the crate (`data/visitor_keys.json`, ESTree)
//! and never changes at runtime; callers layer an override table on top of it
//! per traversal.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use esvisit_ast::Node;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Fallback, VisitError};

/// Node type name -> ordered child field names.
pub type ChildKeyTable = HashMap<String, Vec<String>>;

// Embed the default table
const DEFAULT_KEYS_JSON: &str = include_str!("../data/visitor_keys.json");
static DEFAULT_KEYS: OnceLock<KeyTableFile> = OnceLock::new();

/// On-disk format of a child-key table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyTableFile {
    /// Grammar the table describes, e.g. `estree`.
    pub grammar: String,
    /// Grammar revision the table was generated for.
    pub version: String,
    /// The table itself.
    pub keys: ChildKeyTable,
}

/// Returns the bundled table file.
pub fn default_key_file() -> &'static KeyTableFile {
    DEFAULT_KEYS.get_or_init(|| {
        serde_json::from_str(DEFAULT_KEYS_JSON).expect("Invalid embedded visitor keys")
    })
}

/// Returns the bundled default table.
#[inline]
pub fn default_keys() -> &'static ChildKeyTable {
    &default_key_file().keys
}

/// Resolves the child field names of `node`, whose effective type is
/// `node_type`.
///
/// An entry in `overrides` replaces the default entry for the same type as a
/// whole. Types found in neither table are handed to `fallback`.
///
/// # Errors
///
/// [`VisitError::UnknownNodeType`] if the type is unknown and `fallback` is
/// [`Fallback::Error`].
pub fn resolve_keys<'a>(
    node: &Node,
    node_type: &str,
    overrides: &'a ChildKeyTable,
    fallback: &Fallback,
) -> Result<Cow<'a, [String]>, VisitError> {
    if let Some(keys) = overrides.get(node_type) {
        return Ok(Cow::Borrowed(keys.as_slice()));
    }

    if let Some(keys) = default_keys().get(node_type) {
        return Ok(Cow::Borrowed(keys.as_slice()));
    }

    match fallback {
        Fallback::Error => Err(VisitError::unknown_node_type(node_type)),
        Fallback::Iteration => {
            debug!("Enumerating own fields of unknown node type {}", node_type);
            Ok(Cow::Owned(
                node.keys().into_iter().filter(|key| key != "type").collect(),
            ))
        }
        Fallback::Custom(keys_of) => {
            debug!("Resolving unknown node type {} with custom fallback", node_type);
            Ok(Cow::Owned(keys_of(node)))
        }
    }
}
