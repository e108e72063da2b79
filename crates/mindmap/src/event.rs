//! Pointer input and its mapping onto surface operations.

use log::debug;

use mindmap_core::geometry::Point;

use crate::{dialog::Dialogs, surface::DiagramSurface};

/// Label of the text prompt opened by double-clicking a node.
pub const EDIT_TEXT_LABEL: &str = "Edit Node Text:";

/// A discrete pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PrimaryPress(Point),
    SecondaryPress(Point),
    /// Button release; `popup_trigger` is set when the platform treats the
    /// release as the context-menu gesture.
    Release { point: Point, popup_trigger: bool },
    DoubleClick(Point),
    DragMove(Point),
    PopupDismiss(Point),
}

impl DiagramSurface {
    /// Applies a pointer event.
    ///
    /// Double-clicking a node opens a text prompt through `dialogs`; no other
    /// event uses them.
    pub fn handle_event(&mut self, event: InputEvent, dialogs: &mut impl Dialogs) {
        debug!(event:?; "Handling input event");

        match event {
            InputEvent::PrimaryPress(point) | InputEvent::SecondaryPress(point) => {
                self.select(point);
            }
            InputEvent::Release {
                popup_trigger: true,
                ..
            }
            | InputEvent::PopupDismiss(_) => self.clear_selection_on_popup_dismiss(),
            InputEvent::Release { .. } => {}
            InputEvent::DoubleClick(point) => self.edit_text_at(point, dialogs),
            InputEvent::DragMove(point) => self.drag_selected(point),
        }
    }

    fn edit_text_at(&mut self, point: Point, dialogs: &mut impl Dialogs) {
        let Some(id) = self.hit_test(point) else {
            return;
        };
        let current = self.node(id).map(|node| node.text().to_string());

        let new_text = dialogs.prompt_text(EDIT_TEXT_LABEL, current.as_deref());
        self.commit_text_edit(id, new_text.as_deref());
    }
}
