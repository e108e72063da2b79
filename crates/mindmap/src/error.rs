//! Error types for mind-map operations.
//!
//! This module provides the main error type [`MindMapError`] which wraps
//! the error conditions that can escape the editing surface.

use std::io;

use thiserror::Error;

use crate::export;

/// The main error type for mind-map operations.
///
/// Editing operations never fail; only exports and configuration can.
#[derive(Debug, Error)]
pub enum MindMapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
