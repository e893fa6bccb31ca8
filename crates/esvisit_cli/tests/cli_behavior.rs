//! Integration tests for CLI behavior
//!
//! These tests run the `esvisit` binary against trees written to temporary
//! directories and check its output and exit status.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command for the esvisit CLI
fn esvisit_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_esvisit"))
}

const PROGRAM: &str = r#"{
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
}"#;

const CUSTOM: &str = r#"{
  "type": "Program",
  "body": [{
    "type": "CustomStatement",
    "target": { "type": "Identifier", "name": "x" }
  }]
}"#;

fn write_tree(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        esvisit_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        esvisit_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod stats_command {
    use super::*;

    #[test]
    fn counts_every_known_type() {
        let temp_dir = TempDir::new().unwrap();
        let tree = write_tree(&temp_dir, "program.json", PROGRAM);

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .arg("stats")
            .arg(&tree)
            .assert()
            .success()
            .stdout(predicate::str::contains("Identifier"))
            .stdout(predicate::str::contains("CallExpression"))
            .stdout(predicate::str::contains("Counted 6 nodes of 5 types"));
    }

    #[test]
    fn counts_requested_types_as_json() {
        let temp_dir = TempDir::new().unwrap();
        let tree = write_tree(&temp_dir, "program.json", PROGRAM);

        let output = esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["stats", "--format", "json", "--type", "Identifier", "--type"])
            .arg("ArrowFunctionExpression")
            .arg(&tree)
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["counts"]["Identifier"], 2);
        assert_eq!(json["counts"]["ArrowFunctionExpression"], 0);
    }

    #[test]
    fn fails_on_unknown_node_type() {
        let temp_dir = TempDir::new().unwrap();
        let tree = write_tree(&temp_dir, "custom.json", CUSTOM);

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .arg("stats")
            .arg(&tree)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown node type CustomStatement."));
    }

    #[test]
    fn iteration_fallback_flag_walks_unknown_types() {
        let temp_dir = TempDir::new().unwrap();
        let tree = write_tree(&temp_dir, "custom.json", CUSTOM);

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["stats", "--fallback", "iteration", "-t", "Identifier"])
            .arg(&tree)
            .assert()
            .success()
            .stdout(predicate::str::contains("Counted 1 nodes of 1 types"));
    }

    #[test]
    fn fails_for_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["stats", "missing.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read missing.json"));
    }

    #[test]
    fn fails_when_root_is_not_an_object() {
        let temp_dir = TempDir::new().unwrap();
        let tree = write_tree(&temp_dir, "array.json", "[]");

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .arg("stats")
            .arg(&tree)
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not hold a JSON object"));
    }
}

mod keys_command {
    use super::*;

    #[test]
    fn prints_default_keys_in_order() {
        let temp_dir = TempDir::new().unwrap();

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["keys", "IfStatement"])
            .assert()
            .success()
            .stdout("test\nconsequent\nalternate\n");
    }

    #[test]
    fn fails_on_unknown_type() {
        let temp_dir = TempDir::new().unwrap();

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["keys", "UnknownNode"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown node type UnknownNode."));
    }
}

mod config_file_handling {
    use super::*;

    #[test]
    fn uses_default_config_when_not_found() {
        let temp_dir = TempDir::new().unwrap();

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["keys", "Program"])
            .assert()
            .success()
            .stderr(predicate::str::contains("No config file found, using defaults"));
    }

    #[test]
    fn discovers_config_in_current_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".esvisit.jsonc"),
            r#"{
  // custom parser output
  "childVisitorKeys": { "UnknownNode": ["argument"] },
}"#,
        )
        .unwrap();

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["keys", "UnknownNode"])
            .assert()
            .success()
            .stdout("argument\n")
            .stderr(predicate::str::contains("Using config"));
    }

    #[test]
    fn loads_config_from_flag() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_tree(&temp_dir, "custom.json", r#"{"fallback": "iteration"}"#);
        let tree = write_tree(&temp_dir, "tree.json", CUSTOM);

        esvisit_cmd()
            .arg("--config")
            .arg(&config_file)
            .args(["stats", "--type", "Identifier"])
            .arg(&tree)
            .assert()
            .success();
    }

    #[test]
    fn fallback_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_tree(&temp_dir, "custom.json", r#"{"fallback": "iteration"}"#);
        let tree = write_tree(&temp_dir, "tree.json", CUSTOM);

        esvisit_cmd()
            .arg("--config")
            .arg(&config_file)
            .args(["--fallback", "error", "stats"])
            .arg(&tree)
            .assert()
            .failure();
    }

    #[test]
    fn fails_on_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_tree(&temp_dir, "invalid.json", r#"{"fallback": "skip"}"#);

        esvisit_cmd()
            .arg("--config")
            .arg(&config_file)
            .args(["keys", "Program"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid config"));
    }
}

mod verbose_output {
    use super::*;

    #[test]
    fn enables_debug_logging() {
        let temp_dir = TempDir::new().unwrap();
        let tree = write_tree(&temp_dir, "custom.json", CUSTOM);

        esvisit_cmd()
            .current_dir(temp_dir.path())
            .args(["--verbose", "--fallback", "iteration", "stats"])
            .arg(&tree)
            .assert()
            .success()
            .stderr(predicate::str::contains("DEBUG"));
    }
}
