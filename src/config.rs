//! Configuration management for the preferences form checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Form directory configuration

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the preferences form checker
#[derive(Debug, Parser)]
#[command(name = "prefs-check")]
#[command(about = "Validate a snapshot of preferences form values")]
#[command(version)]
pub struct Args {
    /// Form to validate against
    #[arg(
        long,
        default_value = "preferences",
        help = "Name of the form to validate against"
    )]
    pub form: String,

    /// Custom form directory to search for form definition files
    #[arg(long, help = "Directory containing *.form.toml files")]
    pub form_dir: Option<PathBuf>,

    /// Snapshot of field values (stdin when omitted)
    #[arg(long, help = "Path to a JSON snapshot of field values")]
    pub snapshot: Option<PathBuf>,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the form to validate against
    pub form: String,
    /// Directories searched for form definition files
    pub form_dirs: Vec<PathBuf>,
    /// Snapshot path; stdin when `None`
    pub snapshot: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Determine form directories
        let mut form_dirs = Vec::new();

        // Add user-specified directory if provided
        if let Some(custom_dir) = args.form_dir {
            form_dirs.push(custom_dir);
        }

        // Add default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            form_dirs.push(config_dir.join("prefs-check").join("forms"));
        }

        Ok(Config {
            form: args.form,
            form_dirs,
            snapshot: args.snapshot,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_form_dir_comes_first() {
        let args = Args {
            form: "preferences".to_string(),
            form_dir: Some(PathBuf::from("/tmp/forms")),
            snapshot: None,
            log_level: "info".to_string(),
        };

        let config = Config::from_args(args).expect("config");
        assert_eq!(config.form_dirs[0], PathBuf::from("/tmp/forms"));
    }

    #[test]
    fn test_defaults() {
        let args = Args {
            form: "preferences".to_string(),
            form_dir: None,
            snapshot: None,
            log_level: "info".to_string(),
        };

        let config = Config::from_args(args).expect("config");
        assert_eq!(config.form, "preferences");
        assert!(config.snapshot.is_none());
    }
}
