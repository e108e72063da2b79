//! The diagram surface.
//!
//! [`DiagramSurface`] owns the [`NodeArena`], the active collection of node
//! handles in insertion order, and the current selection. The active
//! collection decides what is drawn, hit-tested and exported; children lists
//! inside nodes may still hold handles that have left it.

use std::path::Path;

use log::{debug, info, trace};

use mindmap_core::{
    arena::{NodeArena, NodeId},
    color::Color,
    geometry::{Point, Size},
    node::Node,
};

use crate::{
    MindMapError,
    canvas::{Canvas, Theme, centered_baseline},
    config::{AppConfig, ExportConfig},
    export,
};

/// Gap between a parent's bottom-right corner and a new child's top-left corner.
const CHILD_OFFSET: i32 = 10;

#[derive(Debug)]
pub struct DiagramSurface {
    arena: NodeArena,
    active: Vec<NodeId>,
    selected: Option<NodeId>,
    canvas_size: Size,
    theme: Theme,
    child_color: Color,
    export_files: ExportConfig,
    redraw_requested: bool,
}

impl Default for DiagramSurface {
    fn default() -> Self {
        Self {
            arena: NodeArena::new(),
            active: Vec::new(),
            selected: None,
            canvas_size: Size::new(800, 600),
            theme: Theme::default(),
            child_color: Color::LIGHT_GRAY,
            export_files: ExportConfig::default(),
            redraw_requested: false,
        }
    }
}

impl DiagramSurface {
    /// Creates an empty surface from the application configuration.
    ///
    /// The configured root node is not added; see [`crate::config::RootConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`MindMapError::Config`] if a configured color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, MindMapError> {
        let theme = config.style().theme().map_err(MindMapError::Config)?;
        let child_color = config.style().child_color().map_err(MindMapError::Config)?;

        Ok(Self::default()
            .with_canvas_size(config.canvas().size())
            .with_theme(theme)
            .with_child_color(child_color)
            .with_export_files(config.export().clone()))
    }

    pub fn with_canvas_size(mut self, size: Size) -> Self {
        self.canvas_size = size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_child_color(mut self, color: Color) -> Self {
        self.child_color = color;
        self
    }

    pub fn with_export_files(mut self, export_files: ExportConfig) -> Self {
        self.export_files = export_files;
        self
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Resizes the visible canvas region.
    pub fn resize(&mut self, size: Size) {
        self.canvas_size = size;
        self.request_redraw();
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn xml_file(&self) -> &Path {
        self.export_files.xml_file()
    }

    pub fn png_file(&self) -> &Path {
        self.export_files.png_file()
    }

    /// Returns any node ever stored on this surface, active or not.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.node(id)
    }

    /// Handles of the active collection in insertion order.
    pub fn active_ids(&self) -> &[NodeId] {
        &self.active
    }

    /// Active nodes in insertion order.
    pub fn active_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.active
            .iter()
            .filter_map(|&id| self.arena.node(id).map(|node| (id, node)))
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.active.contains(&id)
    }

    /// Number of nodes in the active collection.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|id| self.arena.node(id))
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Appends a node to the active collection.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.arena.insert(node);
        self.active.push(id);
        info!(id = id.index(), active = self.active.len(); "Node added");
        self.request_redraw();
        id
    }

    /// Returns the first active node, in insertion order, that contains `point`.
    ///
    /// Where nodes overlap, the earliest inserted one wins even though later
    /// nodes are drawn on top of it.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        self.active_nodes()
            .find(|(_, node)| node.contains_point(point))
            .map(|(id, _)| id)
    }

    /// Selects the node under `point`.
    ///
    /// A press that hits nothing keeps the current selection.
    pub fn select(&mut self, point: Point) -> Option<NodeId> {
        if let Some(id) = self.hit_test(point) {
            debug!(id = id.index(), x = point.x(), y = point.y(); "Node selected");
            self.selected = Some(id);
        } else {
            trace!(x = point.x(), y = point.y(); "Press missed every node");
        }
        self.selected
    }

    pub fn clear_selection_on_popup_dismiss(&mut self) {
        if self.selected.take().is_some() {
            debug!("Selection cleared");
        }
    }

    /// Moves the selected node so that its center follows `point`.
    pub fn drag_selected(&mut self, point: Point) {
        let Some(node) = self.selected.and_then(|id| self.arena.node_mut(id)) else {
            return;
        };

        node.set_position(point.sub_point(node.size().half()));
        self.request_redraw();
    }

    /// Applies an edited text to `id`.
    ///
    /// `None` or blank input is a cancelled edit. Returns true if the node
    /// text changed.
    pub fn commit_text_edit(&mut self, id: NodeId, new_text: Option<&str>) -> bool {
        let Some(text) = new_text.filter(|text| !text.trim().is_empty()) else {
            debug!(id = id.index(); "Text edit cancelled");
            return false;
        };

        let Some(node) = self.arena.node_mut(id) else {
            return false;
        };

        node.set_text(text);
        debug!(id = id.index(), text; "Node text changed");
        self.request_redraw();
        true
    }

    /// Creates a child of the selected node, placed below and to the right of it.
    ///
    /// Blank `text` or an empty selection is ignored.
    pub fn add_child_to_selected(&mut self, text: &str) -> Option<NodeId> {
        if text.trim().is_empty() {
            debug!("Blank child text ignored");
            return None;
        }

        let parent_id = self.selected?;
        let parent = self.arena.node(parent_id)?;
        let bounds = parent.bounds();
        let position = Point::new(bounds.max_x(), bounds.max_y())
            .add_point(Point::new(CHILD_OFFSET, CHILD_OFFSET));

        let child_id = self.arena.insert(Node::new(text, position, self.child_color));
        self.arena.add_child(parent_id, child_id);
        self.active.push(child_id);

        info!(
            parent = parent_id.index(),
            child = child_id.index(),
            active = self.active.len();
            "Child node added"
        );
        self.request_redraw();
        Some(child_id)
    }

    /// Removes the selected node and all of its transitive descendants from
    /// the active collection, then clears the selection.
    ///
    /// Children lists of surviving nodes are left untouched. Returns the
    /// number of nodes removed.
    pub fn delete_selected_subtree(&mut self) -> usize {
        let Some(target) = self.selected.take() else {
            return 0;
        };

        let before = self.active.len();
        let arena = &self.arena;
        self.active
            .retain(|&id| id != target && !arena.is_descendant(target, id));
        let removed = before - self.active.len();

        info!(id = target.index(), removed, active = self.active.len(); "Subtree deleted");
        self.request_redraw();
        removed
    }

    /// Sets the fill color of the selected node. Returns false if nothing is selected.
    pub fn recolor_selected(&mut self, color: Color) -> bool {
        let Some(node) = self.selected.and_then(|id| self.arena.node_mut(id)) else {
            return false;
        };

        node.set_color(color);
        debug!(color = color.to_hex_rgb(); "Selected node recolored");
        self.request_redraw();
        true
    }

    /// Draws the diagram: background, every active node in insertion order,
    /// then a line from each node's center to each active child's center.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear(self.theme.background);

        for (_, node) in self.active_nodes() {
            let bounds = node.bounds();
            canvas.fill_ellipse(bounds, node.color());
            canvas.stroke_ellipse(bounds, self.theme.outline);

            let metrics = canvas.text_metrics(node.text());
            canvas.draw_text(node.text(), centered_baseline(bounds, metrics), self.theme.text);
        }

        for (_, node) in self.active_nodes() {
            for &child_id in node.children() {
                if !self.is_active(child_id) {
                    continue;
                }
                if let Some(child) = self.arena.node(child_id) {
                    canvas.draw_line(node.center(), child.center(), self.theme.line);
                }
            }
        }
    }

    /// Writes the active nodes as an XML document to `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`export::Error`] if the document cannot be built or written.
    pub fn export_xml(&self, path: impl AsRef<Path>) -> Result<(), export::Error> {
        export::xml::write_file(path.as_ref(), self.active_nodes().map(|(_, node)| node))
    }

    /// Rasterizes the visible canvas into an RGB PNG at `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`export::Error`] if rasterization or the file write fails.
    pub fn export_raster(&self, path: impl AsRef<Path>) -> Result<(), export::Error> {
        export::raster::write_png(self, path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use mindmap_core::geometry::Bounds;

    use super::*;
    use crate::canvas::TextMetrics;

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<String>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Color) {
            self.ops.push(format!("clear {color}"));
        }

        fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
            self.ops
                .push(format!("fill {},{} {color}", bounds.min_x(), bounds.min_y()));
        }

        fn stroke_ellipse(&mut self, bounds: Bounds, _color: Color) {
            self.ops
                .push(format!("stroke {},{}", bounds.min_x(), bounds.min_y()));
        }

        fn draw_line(&mut self, from: Point, to: Point, _color: Color) {
            self.ops.push(format!(
                "line {},{} {},{}",
                from.x(),
                from.y(),
                to.x(),
                to.y()
            ));
        }

        fn draw_text(&mut self, text: &str, baseline: Point, _color: Color) {
            self.ops
                .push(format!("text {text} {},{}", baseline.x(), baseline.y()));
        }

        fn text_metrics(&mut self, _text: &str) -> TextMetrics {
            TextMetrics {
                width: 20,
                height: 10,
                ascent: 8,
            }
        }
    }

    fn surface_with_root() -> (DiagramSurface, NodeId) {
        let mut surface = DiagramSurface::default();
        let root = surface.add_node(Node::new("Root", Point::new(300, 200), Color::CYAN));
        (surface, root)
    }

    #[test]
    fn test_add_node_requests_redraw() {
        let (mut surface, _) = surface_with_root();
        assert!(surface.take_redraw());
        assert!(!surface.take_redraw());
    }

    #[test]
    fn test_hit_test_prefers_first_inserted_on_overlap() {
        let (mut surface, root) = surface_with_root();
        let _top = surface.add_node(Node::new("Top", Point::new(320, 210), Color::WHITE));
        assert_eq!(surface.hit_test(Point::new(350, 230)), Some(root));
    }

    #[test]
    fn test_hit_test_misses_on_edge() {
        let (surface, _) = surface_with_root();
        assert_eq!(surface.hit_test(Point::new(300, 225)), None);
    }

    #[test]
    fn test_miss_click_keeps_selection() {
        let (mut surface, root) = surface_with_root();
        surface.select(Point::new(350, 225));
        assert_eq!(surface.select(Point::new(10, 10)), Some(root));
        surface.clear_selection_on_popup_dismiss();
        assert_eq!(surface.selected(), None);
    }

    #[test]
    fn test_drag_centers_node_on_pointer() {
        let (mut surface, root) = surface_with_root();
        surface.select(Point::new(350, 225));
        surface.take_redraw();

        surface.drag_selected(Point::new(100, 100));
        assert_eq!(surface.node(root).unwrap().position(), Point::new(50, 75));
        assert!(surface.take_redraw());
    }

    #[test]
    fn test_drag_and_add_child_at_coordinate_limits() {
        let (mut surface, root) = surface_with_root();
        surface.select(Point::new(350, 225));

        surface.drag_selected(Point::new(i32::MIN, 0));
        assert_eq!(
            surface.node(root).unwrap().position(),
            Point::new(i32::MAX - 49, -25)
        );

        surface.drag_selected(Point::new(i32::MAX, 25));
        assert_eq!(surface.node(root).unwrap().position(), Point::new(i32::MAX - 50, 0));

        // The right edge wrapped, so nothing is hit and the selection stays.
        assert_eq!(surface.hit_test(Point::new(i32::MAX - 47, 25)), None);
        assert_eq!(surface.select(Point::new(i32::MAX - 47, 25)), Some(root));

        let child = surface.add_child_to_selected("Edge").unwrap();
        assert_eq!(
            surface.node(child).unwrap().position(),
            Point::new(i32::MIN + 59, 60)
        );

        let mut canvas = RecordingCanvas::default();
        surface.render(&mut canvas);
        assert!(canvas.ops.iter().any(|op| op.starts_with("line")));
    }

        #[test]
    fn test_drag_without_selection_is_noop() {
        let (mut surface, root) = surface_with_root();
        surface.take_redraw();
        surface.drag_selected(Point::new(100, 100));
        assert_eq!(surface.node(root).unwrap().position(), Point::new(300, 200));
        assert!(!surface.take_redraw());
    }

    #[test]
    fn test_commit_text_edit() {
        let (mut surface, root) = surface_with_root();
        assert!(!surface.commit_text_edit(root, None));
        assert!(!surface.commit_text_edit(root, Some("  \t")));
        assert_eq!(surface.node(root).unwrap().text(), "Root");

        assert!(surface.commit_text_edit(root, Some("A considerably longer root label")));
        assert_eq!(surface.node(root).unwrap().size(), Size::new(7 * 32, 50));
    }

    #[test]
    fn test_add_child_requires_selection() {
        let (mut surface, root) = surface_with_root();
        assert_eq!(surface.add_child_to_selected("Child"), None);
        assert_eq!(surface.len(), 1);
        assert!(surface.node(root).unwrap().children().is_empty());
    }

    #[test]
    fn test_add_child_uses_child_color() {
        let (surface, _) = surface_with_root();
        let mut surface = surface.with_child_color(Color::from_rgb8(1, 2, 3));
        surface.select(Point::new(350, 225));
        let child = surface.add_child_to_selected("Child").unwrap();
        assert_eq!(surface.node(child).unwrap().color(), Color::from_rgb8(1, 2, 3));
    }

    #[test]
    fn test_delete_keeps_siblings_and_ancestors() {
        let (mut surface, root) = surface_with_root();
        surface.select(Point::new(350, 225));
        let left = surface.add_child_to_selected("Left").unwrap();
        let right = surface.add_child_to_selected("Right").unwrap();

        // Both children share a position; select the first through the arena handle.
        surface.selected = Some(left);
        let grandchild = surface.add_child_to_selected("Leaf").unwrap();

        surface.selected = Some(left);
        assert_eq!(surface.delete_selected_subtree(), 2);
        assert_eq!(surface.active_ids(), &[root, right]);
        assert!(!surface.is_active(grandchild));
        assert_eq!(surface.selected(), None);

        // The dangling handle stays in the root's children list.
        assert_eq!(surface.node(root).unwrap().children(), &[left, right]);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let (mut surface, _) = surface_with_root();
        assert_eq!(surface.delete_selected_subtree(), 0);
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_recolor_selected() {
        let (mut surface, root) = surface_with_root();
        assert!(!surface.recolor_selected(Color::WHITE));
        surface.select(Point::new(350, 225));
        assert!(surface.recolor_selected(Color::WHITE));
        assert_eq!(surface.node(root).unwrap().color(), Color::WHITE);
    }

    #[test]
    fn test_render_draws_nodes_before_connections() {
        let (mut surface, _) = surface_with_root();
        surface.select(Point::new(350, 225));
        surface.add_child_to_selected("Analysis");

        let mut canvas = RecordingCanvas::default();
        surface.render(&mut canvas);

        assert_eq!(
            canvas.ops,
            vec![
                "clear #ffffff",
                "fill 300,200 #00ffff",
                "stroke 300,200",
                "text Root 340,228",
                "fill 410,260 #c0c0c0",
                "stroke 410,260",
                "text Analysis 450,288",
                "line 350,225 460,285",
            ]
        );
    }

    #[test]
    fn test_render_skips_dangling_children() {
        let (mut surface, root) = surface_with_root();
        surface.select(Point::new(350, 225));
        let child = surface.add_child_to_selected("Child").unwrap();

        // Remove only the child from the active set.
        surface.selected = Some(child);
        surface.delete_selected_subtree();
        assert_eq!(surface.node(root).unwrap().children(), &[child]);

        let mut canvas = RecordingCanvas::default();
        surface.render(&mut canvas);
        assert!(canvas.ops.iter().all(|op| !op.starts_with("line")));
        assert_eq!(canvas.ops.len(), 4);
    }
}
