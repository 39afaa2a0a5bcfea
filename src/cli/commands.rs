//! Command dispatch: acquire input, run the tree use case, print the results.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, InputSource, TreeSession};
use crate::cli::args::{Cli, Commands, ConfigCommands, LayoutFormat, OrderArg, SourceArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, DisplaySettings, Settings};
use crate::domain::{Traversal, TreeLayout};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    if cli.no_color || !settings.display.color {
        output::disable_color();
    }
    let container = ServiceContainer::new(settings);

    let report = match &cli.command {
        Some(Commands::Build { source, no_tree }) => cmd_build(&container, source, *no_tree)?,
        Some(Commands::Traverse { order, source }) => cmd_traverse(&container, source, *order)?,
        Some(Commands::Layout { source, format }) => cmd_layout(&container, source, *format)?,
        Some(Commands::Config { command }) => return cmd_config(&container, command),
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            return Ok(());
        }
        None => return Ok(()),
    };
    if let Some(report) = report {
        output::info(&report);
    }
    Ok(())
}

/// Resolve the source arguments into values. Empty means "no input provided".
#[instrument(level = "debug", skip(container))]
pub fn acquire_values(container: &ServiceContainer, source: &SourceArgs) -> CliResult<Vec<i64>> {
    let delimiter = source.delimiter.unwrap_or(container.settings.input.delimiter);
    if delimiter.is_ascii_digit() || delimiter == '-' || delimiter == '+' {
        return Err(CliError::InvalidArgs(format!(
            "delimiter {delimiter:?} cannot be part of a number"
        )));
    }
    let loader = container.input_loader_with(delimiter);

    let input = match (&source.file, &source.values) {
        (Some(path), _) => InputSource::File(path.clone()),
        (None, Some(values)) => InputSource::Manual(values.clone()),
        (None, None) => {
            let message = format!("Enter numbers separated by {delimiter:?}:");
            let answer = container
                .prompt
                .ask(&message)
                .map_err(|e| InfraError::io("read manual entry", e))?;
            match answer {
                Some(line) => InputSource::Manual(line),
                None => {
                    debug!("manual entry cancelled");
                    return Ok(Vec::new());
                }
            }
        }
    };

    let values = loader.load(&input).map_err(InfraError::from)?;
    Ok(values)
}

/// Load values into a session. None (after a warning) when there is nothing to build.
pub fn load_session(container: &ServiceContainer, source: &SourceArgs) -> CliResult<Option<TreeSession>> {
    let session = TreeSession::from_values(acquire_values(container, source)?);
    if session.is_empty() {
        output::warning("no input provided, nothing to build");
        return Ok(None);
    }
    Ok(Some(session))
}

fn join_values(values: &[i64], separator: &str) -> String {
    values.iter().join(separator)
}

/// Tree drawing and summary (unless hidden), then one labelled line per traversal.
pub fn render_build(session: &TreeSession, display: &DisplaySettings, no_tree: bool) -> CliResult<String> {
    let mut lines = Vec::new();

    if let Some(tree) = session.tree().filter(|_| display.show_tree && !no_tree) {
        lines.push(output::header("Tree"));
        let drawing = tree.to_tree_string().map_err(ApplicationError::from)?;
        lines.push(drawing.to_string().trim_end().to_string());
        let summary = session.summary();
        lines.push(output::detail(&format!(
            "nodes: {}, height: {}, leaves: {}",
            summary.nodes, summary.height, summary.leaves
        )));
    }

    lines.push(output::header("Traversals"));
    let traversals = session.traversals();
    for order in Traversal::ALL {
        lines.push(output::labelled(
            order.name(),
            &join_values(traversals.get(order), &display.separator),
        ));
    }
    Ok(lines.join("\n"))
}

#[instrument(level = "debug", skip(container))]
pub fn cmd_build(container: &ServiceContainer, source: &SourceArgs, no_tree: bool) -> CliResult<Option<String>> {
    let Some(session) = load_session(container, source)? else {
        return Ok(None);
    };
    render_build(&session, &container.settings.display, no_tree).map(Some)
}

#[instrument(level = "debug", skip(container))]
pub fn cmd_traverse(
    container: &ServiceContainer,
    source: &SourceArgs,
    order: OrderArg,
) -> CliResult<Option<String>> {
    let Some(session) = load_session(container, source)? else {
        return Ok(None);
    };
    let order = Traversal::from(order);
    Ok(Some(join_values(
        &order.traverse(session.tree()),
        &container.settings.display.separator,
    )))
}

/// Plain-text layout: one line per node, then one line per edge.
pub fn render_layout_text(layout: &TreeLayout) -> String {
    let nodes = layout.nodes.iter().map(|n| {
        format!(
            "node {} value={} depth={} x={} y={}",
            n.id, n.value, n.depth, n.x, n.y
        )
    });
    let edges = layout.edges.iter().map(|e| {
        format!("edge {} -> {} ({})", e.parent, e.child, e.side)
    });
    nodes.chain(edges).join("\n")
}

#[instrument(level = "debug", skip(container))]
pub fn cmd_layout(
    container: &ServiceContainer,
    source: &SourceArgs,
    format: LayoutFormat,
) -> CliResult<Option<String>> {
    let Some(session) = load_session(container, source)? else {
        return Ok(None);
    };
    let Some(layout) = session.layout()? else {
        return Ok(None);
    };
    let rendered = match format {
        LayoutFormat::Text => render_layout_text(&layout),
        LayoutFormat::Toml => {
            toml::to_string_pretty(&layout).map_err(|e| ApplicationError::OperationFailed {
                context: "serialize layout".to_string(),
                source: Box::new(e),
            })?
        }
    };
    Ok(Some(rendered))
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build, layout};

    #[test]
    fn given_layout_when_rendering_text_then_nodes_then_edges() {
        let tree = build(&[2, 1, 3]).unwrap();
        let text = render_layout_text(&layout(&tree).unwrap());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "node #0 value=2 depth=0 x=0 y=0");
        assert_eq!(lines[1], "node #1 value=1 depth=1 x=-1 y=-1");
        assert_eq!(lines[3], "edge #0 -> #1 (left)");
        assert_eq!(lines[4], "edge #0 -> #2 (right)");
    }

    #[test]
    fn given_values_when_joining_then_uses_separator() {
        assert_eq!(join_values(&[1, 2, 3], " "), "1 2 3");
        assert_eq!(join_values(&[], ", "), "");
    }
}
