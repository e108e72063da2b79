//! CLI logic for the mind-map shell.
//!
//! This module wires configuration, the diagram surface, and the terminal
//! frontend together.

pub mod error_adapter;
pub mod shell;

mod args;
mod config;

pub use args::Args;
pub use config::load_config;

use std::io;

use log::info;

use mindmap::{DiagramSurface, MindMapError, config::AppConfig};

use shell::Shell;

/// Builds a surface holding the configured root node.
///
/// # Errors
///
/// Returns [`MindMapError::Config`] if a configured color is invalid.
pub fn build_surface(config: &AppConfig) -> Result<DiagramSurface, MindMapError> {
    let mut surface = DiagramSurface::from_config(config)?;
    let root = config.root().build_node().map_err(MindMapError::Config)?;
    surface.add_node(root);
    Ok(surface)
}

/// Run the mind-map shell on standard input and output
///
/// # Errors
///
/// Returns `MindMapError` for:
/// - Configuration loading errors
/// - Terminal I/O errors
pub fn run(args: &Args) -> Result<(), MindMapError> {
    let app_config = load_config(args.config.as_ref())?;
    let surface = build_surface(&app_config)?;

    info!(
        width = surface.canvas_size().width(),
        height = surface.canvas_size().height();
        "Starting mind-map session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(surface, stdin.lock(), stdout.lock());
    shell.run()?;

    info!(nodes = shell.surface().len(); "Session finished");
    Ok(())
}
