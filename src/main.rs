use anyhow::Context;
use clap::Parser;
use dirsync::config::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.example {
        dirsync::commands::print_example();
        return Ok(());
    }

    dirsync::logging::init(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    dirsync::commands::sync::run(&cli.config, &cwd, cli.quiet)
        .with_context(|| format!("Cannot run sync jobs from {}", cli.config.display()))?;

    // Job failures were already reported; they do not change the exit status.
    Ok(())
}
