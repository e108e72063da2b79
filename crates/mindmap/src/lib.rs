//! Mind-map - an editing surface for hierarchical mind-map diagrams.
//!
//! The [`DiagramSurface`] owns every node placed on the canvas, interprets
//! pointer events and context-menu actions into edits, renders through a
//! [`Canvas`] collaborator, and exports the diagram as XML or PNG.
//!
//! # Examples
//!
//! ```rust
//! use mindmap::{DiagramSurface, color::Color, geometry::Point, node::Node};
//!
//! let mut surface = DiagramSurface::default();
//! let root = surface.add_node(Node::new("Root", Point::new(300, 200), Color::CYAN));
//!
//! surface.select(Point::new(350, 225));
//! assert_eq!(surface.selected(), Some(root));
//!
//! let child = surface.add_child_to_selected("Analysis").expect("child created");
//! assert_eq!(surface.node(child).map(|n| n.position()), Some(Point::new(410, 260)));
//! ```

pub mod canvas;
pub mod config;
pub mod dialog;
pub mod event;
pub mod export;

mod error;
mod menu;
mod surface;
mod text;

pub use mindmap_core::{arena, color, geometry, node};

pub use canvas::{Canvas, TextMetrics, Theme};
pub use dialog::{Dialogs, Notification};
pub use error::MindMapError;
pub use event::InputEvent;
pub use menu::MenuAction;
pub use surface::DiagramSurface;
