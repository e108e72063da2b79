//! Rendering collaborator interface.
//!
//! The surface computes all geometry itself and only asks a [`Canvas`] to
//! draw primitive shapes. [`crate::export::svg::SvgCanvas`] is the bundled
//! implementation; a windowing frontend supplies its own.

use mindmap_core::{
    color::Color,
    geometry::{Bounds, Point},
};

/// Rendered size of a string, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: i32,
    pub height: i32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: i32,
}

/// Colors and font used when drawing a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub outline: Color,
    pub line: Color,
    pub text: Color,
    pub font_family: String,
    pub font_size: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            outline: Color::BLACK,
            line: Color::BLACK,
            text: Color::BLACK,
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}

/// Drawing primitives the surface renders through.
pub trait Canvas {
    /// Paints the whole canvas with `color`.
    fn clear(&mut self, color: Color);

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Bounds, color: Color);

    /// Outlines the ellipse inscribed in `bounds`.
    fn stroke_ellipse(&mut self, bounds: Bounds, color: Color);

    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draws `text` with its baseline starting at `baseline`.
    fn draw_text(&mut self, text: &str, baseline: Point, color: Color);

    fn text_metrics(&mut self, text: &str) -> TextMetrics;
}

/// Baseline origin that centers `text` inside `bounds`.
pub(crate) fn centered_baseline(bounds: Bounds, metrics: TextMetrics) -> Point {
    let inset = Point::new(
        (bounds.width() - metrics.width) / 2,
        (bounds.height() - metrics.height) / 2 + metrics.ascent,
    );
    Point::new(bounds.min_x(), bounds.min_y()).add_point(inset)
}

#[cfg(test)]
mod tests {
    use mindmap_core::geometry::Size;

    use super::*;

    #[test]
    fn test_centered_baseline() {
        let bounds = Bounds::new(Point::new(300, 200), Size::new(100, 50));
        let metrics = TextMetrics {
            width: 30,
            height: 16,
            ascent: 12,
        };
        assert_eq!(centered_baseline(bounds, metrics), Point::new(335, 229));
    }

    #[test]
    fn test_centered_baseline_wider_text_overflows_left() {
        let bounds = Bounds::new(Point::new(0, 0), Size::new(100, 50));
        let metrics = TextMetrics {
            width: 120,
            height: 10,
            ascent: 8,
        };
        assert_eq!(centered_baseline(bounds, metrics), Point::new(-10, 28));
    }
}
