//! Diagram export.
//!
//! - [`svg`] - an in-memory [`Canvas`](crate::Canvas) producing SVG documents
//! - [`xml`] - the flat node list as an XML document
//! - [`raster`] - the visible canvas as an RGB PNG

pub mod raster;
pub mod svg;
pub mod xml;

use std::io;

use thiserror::Error;

/// Errors raised while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    /// The output file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document or image could not be built.
    #[error("Encoding error: {0}")]
    Encoding(String),
}
