//! Keys command implementation

use miette::{IntoDiagnostic, Result};

use esvisit_core::keys::default_keys;
use esvisit_core::{Fallback, Node, VisitOptions};

use super::load_options;
use crate::cli::Cli;

pub fn run_keys(cli: &Cli, node_type: &str) -> Result<()> {
    let options = load_options(cli)?;
    for line in describe_keys(node_type, &options)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines describing the child keys of `node_type` under `options`.
fn describe_keys(node_type: &str, options: &VisitOptions) -> Result<Vec<String>> {
    let listed = options.child_visitor_keys.contains_key(node_type)
        || default_keys().contains_key(node_type);

    if !listed && matches!(options.fallback, Fallback::Iteration) {
        return Ok(vec![format!(
            "{} is in no key table; every own field except `type` is a child",
            node_type
        )]);
    }

    let probe = Node::with_type(node_type);
    let keys = options.resolve_keys(&probe, node_type).into_diagnostic()?;
    if keys.is_empty() {
        return Ok(vec![format!("{} has no child keys", node_type)]);
    }

    Ok(keys.iter().cloned().collect())
}
