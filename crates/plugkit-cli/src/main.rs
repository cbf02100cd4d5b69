mod cmd;
mod output;
mod root;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use plugkit_core::{catalog, Installer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plugkit",
    about = "Install Claude Code plugins into ~/.claude/plugins",
    override_usage = "plugkit <PLUGIN> | all | list | uninstall <PLUGIN> | install <PLUGIN>... | info <PLUGIN>",
    version,
    propagate_version = true,
    disable_help_subcommand = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Directory containing plugins/ (default: auto-detect from the binary or cwd)
    #[arg(long, global = true, env = "PLUGKIT_SOURCE")]
    source: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Plugin to install
    plugin: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install one or more plugins
    Install {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Install every available plugin
    All,

    /// Show which plugins are installed
    List,

    /// Remove an installed plugin
    Uninstall {
        /// Plugin to remove
        name: Option<String>,
    },

    /// Show the commands, agents, and skills a plugin ships
    Info { name: String },

    /// Print usage and the available plugins
    Help,
}

/// The clap command with the plugin catalog appended to the help text.
fn command() -> clap::Command {
    Cli::command().after_help(catalog::help_listing())
}

fn main() {
    let matches = command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Errors go to stdout with the rest of the report; logs use stderr.
        println!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.plugin.is_none() && matches!(cli.command, None | Some(Commands::Help)) {
        return cmd::help::run(command());
    }

    let source = root::resolve_source_root(cli.source.as_deref());
    tracing::debug!(source = %source.display(), "resolved plugin source");
    let installer =
        Installer::for_user(source).context("failed to resolve ~/.claude/plugins")?;

    if let Some(plugin) = cli.plugin {
        return cmd::install::run(&installer, &[plugin], cli.json);
    }

    match cli.command {
        Some(Commands::Install { names }) => cmd::install::run(&installer, &names, cli.json),
        Some(Commands::All) => cmd::install::run_all(&installer, cli.json),
        Some(Commands::List) => cmd::list::run(&installer, cli.json),
        Some(Commands::Uninstall { name }) => {
            cmd::uninstall::run(&installer, name.as_deref(), cli.json)
        }
        Some(Commands::Info { name }) => cmd::info::run(&installer, &name, cli.json),
        Some(Commands::Help) | None => cmd::help::run(command()),
    }
}
