//! Tests for the CLI layer: argument parsing, input acquisition and command reports.

use std::io;
use std::path::Path;
use std::sync::Arc;

use bstview::cli::args::{Cli, Commands, LayoutFormat, OrderArg, SourceArgs};
use bstview::cli::commands::{acquire_values, cmd_build, cmd_layout, cmd_traverse, load_session};
use bstview::cli::{output, CliError};
use bstview::config::Settings;
use bstview::domain::Traversal;
use bstview::exitcode;
use bstview::infrastructure::di::ServiceContainer;
use bstview::infrastructure::traits::{Prompt, RealFileSystem};
use clap::Parser;
use tempfile::TempDir;

/// Prompt answering with a fixed line, or cancelling when `None`.
struct ScriptedPrompt(Option<String>);

impl Prompt for ScriptedPrompt {
    fn ask(&self, _message: &str) -> io::Result<Option<String>> {
        Ok(self.0.clone())
    }
}

fn container(answer: Option<&str>) -> ServiceContainer {
    ServiceContainer::with_deps(
        Settings::default(),
        Arc::new(RealFileSystem),
        Arc::new(ScriptedPrompt(answer.map(str::to_string))),
    )
}

#[test]
fn given_build_with_values_when_parsing_then_source_is_manual() {
    let cli = Cli::try_parse_from(["bstview", "build", "--values", "5,3,8"]).unwrap();

    match cli.command {
        Some(Commands::Build { source, no_tree }) => {
            assert_eq!(source.values.as_deref(), Some("5,3,8"));
            assert!(source.file.is_none());
            assert!(!no_tree);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

fn manual(values: &str) -> SourceArgs {
    SourceArgs {
        values: Some(values.to_string()),
        ..SourceArgs::default()
    }
}

#[test]
fn given_short_values_flag_when_parsing_then_source_is_manual() {
    let cli = Cli::try_parse_from(["bstview", "build", "-v", "4,2"]).unwrap();

    match cli.command {
        Some(Commands::Build { source, .. }) => assert_eq!(source.values.as_deref(), Some("4,2")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_file_and_values_when_parsing_then_conflict() {
    let result = Cli::try_parse_from(["bstview", "build", "-f", "a.csv", "-v", "1,2"]);
    assert!(result.is_err());
}

#[test]
fn given_traverse_and_layout_flags_when_parsing_then_enums_map() {
    let cli = Cli::try_parse_from(["bstview", "-dd", "traverse", "--order", "post", "-v", "1"]).unwrap();
    assert_eq!(cli.debug, 2);
    match cli.command {
        Some(Commands::Traverse { order, .. }) => {
            assert_eq!(order, OrderArg::Post);
            assert_eq!(Traversal::from(order), Traversal::Post);
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["bstview", "layout", "-v", "1", "--format", "toml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Layout {
            format: LayoutFormat::Toml,
            ..
        })
    ));
}

#[test]
fn given_no_source_when_acquiring_then_prompts_for_manual_entry() {
    let container = container(Some("3, 1, 2"));

    let values = acquire_values(&container, &SourceArgs::default()).unwrap();

    assert_eq!(values, vec![3, 1, 2]);
}

#[test]
fn given_cancelled_prompt_when_acquiring_then_no_values() {
    let container = container(None);

    let values = acquire_values(&container, &SourceArgs::default()).unwrap();

    assert!(values.is_empty());
}

#[test]
fn given_numeric_delimiter_when_acquiring_then_usage_error() {
    let container = container(None);
    let source = SourceArgs {
        values: Some("1-2".to_string()),
        delimiter: Some('-'),
        ..SourceArgs::default()
    };

    let err = acquire_values(&container, &source).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_missing_file_when_acquiring_then_noinput_exit_code() {
    let container = container(None);
    let source = SourceArgs {
        file: Some(Path::new("/definitely/not/here.csv").to_path_buf()),
        ..SourceArgs::default()
    };

    let err = acquire_values(&container, &source).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_bad_manual_value_when_acquiring_then_dataerr_exit_code() {
    let container = container(None);
    let source = SourceArgs {
        values: Some("1,two".to_string()),
        ..SourceArgs::default()
    };

    let err = acquire_values(&container, &source).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert!(err.to_string().contains("\"two\""));
}

#[test]
fn given_empty_file_when_building_then_nothing_built_and_no_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();
    let container = container(None);
    let source = SourceArgs {
        file: Some(path),
        ..SourceArgs::default()
    };

    // Act
    let session = load_session(&container, &source).unwrap();
    let report = cmd_build(&container, &source, false).unwrap();

    // Assert
    assert!(session.is_none());
    assert!(report.is_none());
}

#[test]
fn given_cancelled_prompt_when_running_commands_then_no_report() {
    let container = container(None);
    let source = SourceArgs::default();

    assert!(cmd_build(&container, &source, false).unwrap().is_none());
    assert!(cmd_traverse(&container, &source, OrderArg::Pre).unwrap().is_none());
    assert!(cmd_layout(&container, &source, LayoutFormat::Text).unwrap().is_none());
}

#[test]
fn given_values_when_building_then_tree_summary_then_labelled_traversals() {
    // Arrange
    output::disable_color();
    let container = container(None);

    // Act
    let report = cmd_build(&container, &manual("2,1,3"), false).unwrap().unwrap();

    // Assert
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Tree");
    assert_eq!(lines[1], "2");
    assert!(lines[2].ends_with("L: 1"));
    assert!(lines[3].ends_with("R: 3"));
    assert_eq!(lines[4], "  nodes: 3, height: 2, leaves: 2");
    assert_eq!(lines[5], "Traversals");
    assert_eq!(lines[6], "preorder: 2, 1, 3");
    assert_eq!(lines[7], "inorder: 1, 2, 3");
    assert_eq!(lines[8], "postorder: 1, 3, 2");
}

#[test]
fn given_no_tree_flag_when_building_then_only_traversals() {
    output::disable_color();
    let container = container(None);

    let report = cmd_build(&container, &manual("5,8,3"), true).unwrap().unwrap();

    assert_eq!(
        report,
        "Traversals\npreorder: 5, 3, 8\ninorder: 3, 5, 8\npostorder: 3, 8, 5"
    );
}

#[test]
fn given_order_when_traversing_then_single_joined_line() {
    let container = container(Some("50, 30, 70, 20, 40"));

    let report = cmd_traverse(&container, &SourceArgs::default(), OrderArg::Post).unwrap();

    assert_eq!(report.as_deref(), Some("20, 40, 30, 70, 50"));
}

#[test]
fn given_toml_format_when_laying_out_then_nodes_and_edges_tables() {
    let container = container(None);

    let report = cmd_layout(&container, &manual("2,1,3"), LayoutFormat::Toml)
        .unwrap()
        .unwrap();

    assert_eq!(report.matches("[[nodes]]").count(), 3);
    assert_eq!(report.matches("[[edges]]").count(), 2);
    assert!(report.contains("side = \"left\""));
}
