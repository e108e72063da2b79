//! Error adapter for converting MindMapError to miette diagnostics.
//!
//! This module bridges the library's standard error type and miette's
//! formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use mindmap::MindMapError;

/// Adapter for [`MindMapError`] values.
pub struct ErrorAdapter<'a>(pub &'a MindMapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(error_code(self.0)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            MindMapError::Config(_) => Some(Box::new(
                "check the file passed with --config or mindmap/config.toml",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Stable diagnostic code for an error.
pub fn error_code(err: &MindMapError) -> &'static str {
    match err {
        MindMapError::Io(_) => "mindmap::io",
        MindMapError::Export(_) => "mindmap::export",
        MindMapError::Config(_) => "mindmap::config",
    }
}
