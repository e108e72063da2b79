//! Command-line argument definitions for the mind-map shell.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control configuration file selection and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the mind-map shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
