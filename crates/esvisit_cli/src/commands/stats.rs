//! Stats command implementation

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use esvisit_core::keys::default_keys;
use esvisit_core::{Handlers, Node, VisitError, VisitOptions, effective_type, visit};

use super::load_options;
use crate::cli::{Cli, OutputFormat};
use crate::output::{NodeStats, output_stats};

pub fn run_stats(cli: &Cli, file: &Path, types: &[String], format: OutputFormat) -> Result<()> {
    let options = load_options(cli)?;

    let content = fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", file.display()))?;
    let root = Node::from_json(json)
        .ok_or_else(|| miette::miette!("{} does not hold a JSON object", file.display()))?;

    let mut counts = if types.is_empty() {
        count_nodes(&root, &counted_types(&options), &options).into_diagnostic()?
    } else {
        count_nodes(&root, types, &options).into_diagnostic()?
    };
    for node_type in types {
        counts.entry(node_type.clone()).or_insert(0);
    }

    output_stats(&NodeStats::new(file, counts), format)
}

/// Every type named by the default table or the override table.
fn counted_types(options: &VisitOptions) -> Vec<String> {
    default_keys()
        .keys()
        .chain(options.child_visitor_keys.keys())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Walks `root` counting nodes of the given types.
///
/// Each counting handler continues into the node's children, so nested nodes
/// of a counted type are counted too.
pub fn count_nodes(
    root: &Node,
    types: &[String],
    options: &VisitOptions,
) -> Result<BTreeMap<String, usize>, VisitError> {
    let counts = RefCell::new(BTreeMap::new());
    debug!("Counting {} node types", types.len());

    {
        let mut handlers = Handlers::new();
        for node_type in types {
            let counts = &counts;
            handlers.insert(node_type.clone(), move |walker, node| {
                *counts.borrow_mut().entry(effective_type(node)).or_insert(0) += 1;
                walker.visit_children(Some(node))
            });
        }

        visit(Some(root), &handlers, options)?;
    }

    Ok(counts.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use esvisit_core::Fallback;
    use serde_json::json;

    fn program() -> Node {
        Node::from_json(json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": { "type": "Identifier", "name": "f" },
                    "arguments": [
                        { "type": "Identifier", "name": "a" },
                        { "type": "Literal", "value": 1 }
                    ]
                }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_counts_requested_types() {
        let types = vec!["Identifier".to_string()];
        let counts = count_nodes(&program(), &types, &VisitOptions::new()).unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts["Identifier"], 2);
    }

    #[test]
    fn test_counts_nested_nodes_of_counted_types() {
        let options = VisitOptions::new();
        let counts = count_nodes(&program(), &counted_types(&options), &options).unwrap();

        assert_eq!(counts["Program"], 1);
        assert_eq!(counts["ExpressionStatement"], 1);
        assert_eq!(counts["CallExpression"], 1);
        assert_eq!(counts["Identifier"], 2);
        assert_eq!(counts["Literal"], 1);
    }

    #[test]
    fn test_counted_types_include_overrides() {
        let options = VisitOptions::new().with_keys("JSXElement", ["children"]);
        let types = counted_types(&options);

        assert!(types.iter().any(|t| t == "JSXElement"));
        assert!(types.iter().any(|t| t == "Identifier"));
        assert!(types.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_type_fails_without_fallback() {
        let root = Node::from_json(json!({
            "type": "Program",
            "body": [{ "type": "Custom", "inner": { "type": "Identifier" } }]
        }))
        .unwrap();
        let types = vec!["Identifier".to_string()];

        let err = count_nodes(&root, &types, &VisitOptions::new()).unwrap_err();
        assert!(matches!(err, VisitError::UnknownNodeType(ref t) if t == "Custom"));

        let options = VisitOptions::new().with_fallback(Fallback::Iteration);
        let counts = count_nodes(&root, &types, &options).unwrap();
        assert_eq!(counts["Identifier"], 1);
    }
}
