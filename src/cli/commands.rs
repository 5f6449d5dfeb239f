//! Command dispatch: turns parsed arguments into service calls and output.

use std::io::{self, Read};

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::{TreeReport, TreeService};
use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{expand_path, global_config_path, OutputFormat, Settings};
use crate::domain::{parse_sequence, RenderStyle, TraversalOrder};
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build {
            input,
            format,
            style,
        }) => cmd_build(cli, input, *format, *style),
        Some(Commands::Render { input, style }) => cmd_render(cli, input, *style),
        Some(Commands::Traverse { input, order }) => cmd_traverse(cli, input, *order),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "cartree", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run 'cartree --help'".to_string(),
        )),
    }
}

/// Merged settings with per-invocation overrides from the command line.
fn load_settings(
    cli: &Cli,
    input: Option<&InputArgs>,
    format: Option<OutputFormat>,
    style: Option<RenderStyle>,
) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config_file.as_deref())?;
    if let Some(strategy) = input.and_then(|i| i.strategy) {
        settings.build.strategy = strategy;
    }
    if let Some(format) = format {
        settings.output.format = format;
    }
    if let Some(style) = style {
        settings.output.style = style;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Values from the command line, else from --file, else from stdin.
fn read_values(service: &TreeService, input: &InputArgs) -> CliResult<Vec<i64>> {
    if !input.values.is_empty() {
        return Ok(input.values.clone());
    }
    if let Some(file) = &input.file {
        return Ok(service.load(&expand_path(file))?);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .with_context("read sequence from stdin")?;
    Ok(parse_sequence(&buffer).map_err(ApplicationError::from)?)
}

#[instrument(skip(cli))]
fn cmd_build(
    cli: &Cli,
    input: &InputArgs,
    format: Option<OutputFormat>,
    style: Option<RenderStyle>,
) -> CliResult<()> {
    let settings = load_settings(cli, Some(input), format, style)?;
    let container = ServiceContainer::new(settings);
    let values = read_values(&container.tree_service, input)?;
    let report = container.tree_service.analyze(&values)?;

    match container.settings.output.format {
        OutputFormat::Json => output::info(&serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &TreeReport) {
    let root = report
        .root
        .map(|v| v.to_string())
        .unwrap_or_else(|| "(empty)".to_string());

    output::header("Tree");
    output::field("root", &root);
    output::field("height", &report.height);
    output::field("nodes", &report.node_count);
    output::field("in-order", &report.in_order.iter().join(", "));
    output::field("pre-order", &report.pre_order.iter().join(", "));
    output::field("post-order", &report.post_order.iter().join(", "));
    output::field("level-order", &report.level_order.iter().join(", "));
    output::field("leaves", &report.leaves.iter().join(", "));

    if !report.rendering.is_empty() {
        output::info("");
        output::header("Shape");
        output::block(&report.rendering);
    }
}

#[instrument(skip(cli))]
fn cmd_render(cli: &Cli, input: &InputArgs, style: Option<RenderStyle>) -> CliResult<()> {
    let settings = load_settings(cli, Some(input), None, style)?;
    let container = ServiceContainer::new(settings);
    let values = read_values(&container.tree_service, input)?;
    output::block(&container.tree_service.render(&values)?);
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_traverse(cli: &Cli, input: &InputArgs, order: TraversalOrder) -> CliResult<()> {
    let settings = load_settings(cli, Some(input), None, None)?;
    let container = ServiceContainer::new(settings);
    let values = read_values(&container.tree_service, input)?;
    let visited = container.tree_service.traverse(&values, order)?;
    output::info(&visited.iter().join(", "));
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli, None, None, None)?;
            output::block(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "exists" } else { "not found" };
                    output::info(&format!("global: {} ({})", path.display(), state));
                }
                None => output::warning("cannot determine global config directory"),
            }
            if let Some(path) = &cli.config_file {
                output::info(&format!("explicit: {}", expand_path(path).display()));
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine global config directory".to_string())
            })?;
            let container = ServiceContainer::new(Settings::default());
            if container.fs.exists(&path) {
                if !force {
                    return Err(CliError::Usage(format!(
                        "config already exists: {} (use --force to overwrite)",
                        path.display()
                    )));
                }
                output::warning(&format!("overwriting {}", path.display()));
            }
            container
                .fs
                .ensure_parent(&path)
                .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
            container
                .fs
                .write(&path, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
