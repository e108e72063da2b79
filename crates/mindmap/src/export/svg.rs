//! SVG canvas.
//!
//! [`SvgCanvas`] records drawing primitives into an [`svg::Document`] sized to
//! the canvas. It backs raster export and can be written out as-is.

use log::debug;
use svg::{
    Document,
    node::{
        Text as SvgText,
        element::{Ellipse, Line, Rectangle, Text},
    },
};

use mindmap_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

use crate::canvas::{Canvas, TextMetrics, Theme};

pub struct SvgCanvas {
    elements: Vec<Box<dyn svg::Node>>,
    size: Size,
    font_family: String,
    font_size: u16,
}

impl SvgCanvas {
    /// Creates an empty canvas of `size` pixels using the theme's font.
    pub fn new(size: Size, theme: &Theme) -> Self {
        Self {
            elements: Vec::new(),
            size,
            font_family: theme.font_family.clone(),
            font_size: theme.font_size,
        }
    }

    fn push(&mut self, node: impl svg::Node + 'static) {
        self.elements.push(Box::new(node));
    }

    /// Assembles the recorded primitives, in drawing order, into a document.
    pub fn into_document(self) -> Document {
        let document = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        self.elements
            .into_iter()
            .fold(document, |document, element| document.add(element))
    }
}

/// Ellipse inscribed in `bounds`.
fn ellipse(bounds: Bounds) -> Ellipse {
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;
    Ellipse::new()
        .set("cx", bounds.min_x() as f32 + rx)
        .set("cy", bounds.min_y() as f32 + ry)
        .set("rx", rx)
        .set("ry", ry)
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, color: Color) {
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", color.to_string());
        self.push(background);
    }

    fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        self.push(
            ellipse(bounds)
                .set("fill", color.to_string())
                .set("stroke", "none"),
        );
    }

    fn stroke_ellipse(&mut self, bounds: Bounds, color: Color) {
        self.push(
            ellipse(bounds)
                .set("fill", "none")
                .set("stroke", color.to_string())
                .set("stroke-width", 1),
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.push(
            Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y())
                .set("stroke", color.to_string())
                .set("stroke-width", 1),
        );
    }

    fn draw_text(&mut self, text: &str, baseline: Point, color: Color) {
        let element = Text::new("")
            .set("x", baseline.x())
            .set("y", baseline.y())
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("fill", color.to_string())
            .add(SvgText::new(text));
        self.push(element);
    }

    fn text_metrics(&mut self, text: &str) -> TextMetrics {
        let metrics = crate::text::measure(text, &self.font_family, self.font_size);
        debug!(text, width = metrics.width; "Measured text");
        metrics
    }
}
