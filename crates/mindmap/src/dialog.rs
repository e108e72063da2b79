//! Modal dialog collaborator interface.
//!
//! Dialogs are synchronous: each call blocks until the user confirms or
//! cancels. `None` means cancelled.

use std::fmt;

use mindmap_core::color::Color;

/// A non-fatal message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info { title: String, message: String },
    Error { title: String, message: String },
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Info {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Info { title, .. } | Self::Error { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Error { message, .. } => message,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title(), self.message())
    }
}

/// Blocking prompts and notifications provided by the windowing frontend.
pub trait Dialogs {
    /// Asks for a line of text, pre-filled with `default` if given.
    fn prompt_text(&mut self, label: &str, default: Option<&str>) -> Option<String>;

    /// Asks for a color, starting from `default`.
    fn prompt_color(&mut self, default: Color) -> Option<Color>;

    fn notify(&mut self, notification: Notification);
}
