use clap::Command;

/// Print usage followed by the plugin catalog. Used for bare `plugkit` and `plugkit help`.
pub fn run(mut command: Command) -> anyhow::Result<()> {
    command.print_help()?;
    Ok(())
}
