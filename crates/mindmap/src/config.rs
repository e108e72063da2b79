//! Configuration types for the mind-map surface.
//!
//! This module provides configuration structures that control the canvas,
//! node styling, the initial root node, and export file names. All types
//! implement [`serde::Deserialize`] for loading from external sources;
//! every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`CanvasConfig`] - Canvas pixel dimensions.
//! - [`StyleConfig`] - Colors and font used when drawing.
//! - [`RootConfig`] - The node placed on the canvas at startup.
//! - [`ExportConfig`] - File names written by the export menu items.
//!
//! # Example
//!
//! ```
//! # use mindmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 800);
//! assert!(config.style().theme().is_ok());
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use mindmap_core::{color::Color, geometry::Point, geometry::Size, node::Node};

use crate::canvas::Theme;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    root: RootConfig,

    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(
        canvas: CanvasConfig,
        style: StyleConfig,
        root: RootConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            canvas,
            style,
            root,
            export,
        }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn root(&self) -> &RootConfig {
        &self.root
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas dimensions as a [`Size`], saturating at `i32::MAX`.
    pub fn size(&self) -> Size {
        Size::new(
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

/// Visual styling configuration.
///
/// Colors are stored as CSS color strings and parsed on use. Fields that are
/// not set fall back to the values of [`Theme::default`] and
/// [`Color::LIGHT_GRAY`] for new children.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    outline_color: Option<String>,

    #[serde(default)]
    line_color: Option<String>,

    #[serde(default)]
    text_color: Option<String>,

    /// Fill for nodes created through "add child".
    #[serde(default)]
    child_color: Option<String>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    font_size: Option<u16>,
}

impl StyleConfig {
    /// Resolves the drawing [`Theme`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configured color string cannot be parsed.
    pub fn theme(&self) -> Result<Theme, String> {
        let defaults = Theme::default();
        Ok(Theme {
            background: parse_or(&self.background_color, defaults.background, "background")?,
            outline: parse_or(&self.outline_color, defaults.outline, "outline")?,
            line: parse_or(&self.line_color, defaults.line, "line")?,
            text: parse_or(&self.text_color, defaults.text, "text")?,
            font_family: self
                .font_family
                .clone()
                .unwrap_or(defaults.font_family),
            font_size: self.font_size.unwrap_or(defaults.font_size),
        })
    }

    /// Returns the fill used for newly added children.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn child_color(&self) -> Result<Color, String> {
        parse_or(&self.child_color, Color::LIGHT_GRAY, "child")
    }
}

fn parse_or(value: &Option<String>, default: Color, what: &str) -> Result<Color, String> {
    value
        .as_deref()
        .map(Color::new)
        .transpose()
        .map(|color| color.unwrap_or(default))
        .map_err(|err| format!("Invalid {what} color in config: {err}"))
}

/// The node placed on the canvas when the application starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    text: String,
    x: i32,
    y: i32,
    color: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            text: "Root".to_string(),
            x: 300,
            y: 200,
            color: "cyan".to_string(),
        }
    }
}

impl RootConfig {
    /// Builds the root [`Node`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn build_node(&self) -> Result<Node, String> {
        let color = Color::new(&self.color)
            .map_err(|err| format!("Invalid root color in config: {err}"))?;
        Ok(Node::new(
            self.text.clone(),
            Point::new(self.x, self.y),
            color,
        ))
    }
}

/// Output file names for the export menu items.
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    xml_file: PathBuf,
    png_file: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            xml_file: PathBuf::from("MindMap.xml"),
            png_file: PathBuf::from("MindMap.png"),
        }
    }
}

impl ExportConfig {
    pub fn new(xml_file: impl Into<PathBuf>, png_file: impl Into<PathBuf>) -> Self {
        Self {
            xml_file: xml_file.into(),
            png_file: png_file.into(),
        }
    }

    pub fn xml_file(&self) -> &PathBuf {
        &self.xml_file
    }

    pub fn png_file(&self) -> &PathBuf {
        &self.png_file
    }
}
