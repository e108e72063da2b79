//! A single mind-map node.
//!
//! A [`Node`] owns its text, geometry, color and selection flag, and keeps an
//! ordered list of [`NodeId`] handles to its children. It does not know its
//! parent.

use crate::{
    arena::NodeId,
    color::Color,
    geometry::{Bounds, Point, Size},
};

/// Minimum node width in pixels.
pub const MIN_WIDTH: i32 = 100;
/// Horizontal pixels reserved per character of text.
pub const CHAR_WIDTH: i32 = 7;
/// Fixed node height in pixels.
pub const HEIGHT: i32 = 50;

/// Size derived from the node text.
///
/// Width is `max(100, 7 * chars)`, height is always 50.
pub fn size_for_text(text: &str) -> Size {
    let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    Size::new(MIN_WIDTH.max(chars.saturating_mul(CHAR_WIDTH)), HEIGHT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    text: String,
    position: Point,
    size: Size,
    color: Color,
    selected: bool,
    children: Vec<NodeId>,
}

impl Node {
    /// Creates a node with its top-left corner at `position`.
    pub fn new(text: impl Into<String>, position: Point, color: Color) -> Self {
        let text = text.into();
        let size = size_for_text(&text);
        Self {
            text,
            position,
            size,
            color,
            selected: false,
            children: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner on the canvas
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Replaces the text and recomputes the size.
    ///
    /// Any string is accepted; rejecting blank input is up to the caller.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.size = size_for_text(&self.text);
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Strict interior hit test, see [`Bounds::contains_strict`].
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains_strict(point)
    }

    /// Appends a child handle. Cycles are not checked.
    pub fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub fn toggle_selection(&mut self) {
        self.selected = !self.selected;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn root() -> Node {
        Node::new("Root", Point::new(300, 200), Color::CYAN)
    }

    #[test]
    fn test_new_derives_size() {
        let node = root();
        assert_eq!(node.size(), Size::new(100, 50));
        assert_eq!(node.position(), Point::new(300, 200));
        assert!(!node.is_selected());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_set_text_recomputes_width() {
        let mut node = root();
        node.set_text("a fairly long label for a node");
        assert_eq!(node.size(), Size::new(7 * 30, 50));
        node.set_text("x");
        assert_eq!(node.size(), Size::new(100, 50));
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        assert_eq!(size_for_text(&"é".repeat(20)).width(), 140);
    }

    #[test]
    fn test_contains_point_one_unit_inside_each_edge() {
        let node = root();
        assert!(node.contains_point(Point::new(301, 225)));
        assert!(node.contains_point(Point::new(399, 225)));
        assert!(node.contains_point(Point::new(350, 201)));
        assert!(node.contains_point(Point::new(350, 249)));
    }

    #[test]
    fn test_contains_point_on_edges_is_false() {
        let node = root();
        assert!(!node.contains_point(Point::new(300, 225)));
        assert!(!node.contains_point(Point::new(400, 225)));
        assert!(!node.contains_point(Point::new(350, 200)));
        assert!(!node.contains_point(Point::new(350, 250)));
        assert!(!node.contains_point(Point::new(300, 200)));
    }

    #[test]
    fn test_toggle_selection_flips() {
        let mut node = root();
        node.toggle_selection();
        assert!(node.is_selected());
        node.toggle_selection();
        assert!(!node.is_selected());
    }

    #[test]
    fn test_set_color() {
        let mut node = root();
        node.set_color(Color::LIGHT_GRAY);
        assert_eq!(node.color(), Color::LIGHT_GRAY);
    }

    proptest! {
        #[test]
        fn prop_size_formula(text in ".{0,64}") {
            let size = size_for_text(&text);
            let len = text.chars().count() as i32;
            prop_assert_eq!(size.width(), 100.max(7 * len));
            prop_assert_eq!(size.height(), 50);
        }

        #[test]
        fn prop_edges_miss_and_interior_hits(
            x in -1000i32..1000,
            y in -1000i32..1000,
            text in "[a-z]{0,40}",
        ) {
            let node = Node::new(text, Point::new(x, y), Color::WHITE);
            let bounds = node.bounds();
            let mid_y = y + bounds.height() / 2;
            let mid_x = x + bounds.width() / 2;

            prop_assert!(!node.contains_point(Point::new(bounds.min_x(), mid_y)));
            prop_assert!(!node.contains_point(Point::new(bounds.max_x(), mid_y)));
            prop_assert!(!node.contains_point(Point::new(mid_x, bounds.min_y())));
            prop_assert!(!node.contains_point(Point::new(mid_x, bounds.max_y())));

            prop_assert!(node.contains_point(Point::new(bounds.min_x() + 1, mid_y)));
            prop_assert!(node.contains_point(Point::new(bounds.max_x() - 1, mid_y)));
            prop_assert!(node.contains_point(Point::new(mid_x, bounds.min_y() + 1)));
            prop_assert!(node.contains_point(Point::new(mid_x, bounds.max_y() - 1)));
        }
    }
}
