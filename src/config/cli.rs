//! Command-line arguments

use super::DEFAULT_CONFIG_FILE;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Usage:
  1. Create a configuration file:
       dirsync --example > config.yaml
     then edit source_dir / target_dirs / method for each job.

  2. Run the sync:
       dirsync                      # uses ./config.yaml
       dirsync --config jobs.yaml   # explicit configuration path

Methods:
  copy  every target receives a copy, the source is left untouched
  move  every target but the last receives a copy, the last one receives
        the original (the source file is removed)";

/// Replicate directory trees into one or more targets, as described by a config file
#[derive(Debug, Clone, Parser)]
#[command(name = "dirsync", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Configuration file (relative paths are resolved against the current directory)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print an example configuration and exit
    #[arg(long)]
    pub example: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print a line per transferred file
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dirsync"]).expect("parse defaults");
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
        assert!(!cli.example);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from(["dirsync", "-c", "jobs.toml", "-vv", "--quiet"])
            .expect("parse flags");
        assert_eq!(cli.config, PathBuf::from("jobs.toml"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_version_flag_short_circuits() {
        let err = Cli::try_parse_from(["dirsync", "--version"]).expect_err("version exits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
