//! Context-menu actions.

use std::{fmt, str::FromStr};

use log::{error, info};

use crate::{
    dialog::{Dialogs, Notification},
    export,
    surface::DiagramSurface,
};

/// Label of the text prompt opened by "Add Child Node".
pub const CHILD_TEXT_LABEL: &str = "Child Node Text:";

/// Items of the canvas context menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddChild,
    ExportXml,
    Delete,
    ChangeColor,
    ExportPng,
}

impl MenuAction {
    pub const ALL: [Self; 5] = [
        Self::AddChild,
        Self::ExportXml,
        Self::Delete,
        Self::ChangeColor,
        Self::ExportPng,
    ];

    /// Text shown on the menu item.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddChild => "Add Child Node",
            Self::ExportXml => "Export to XML",
            Self::Delete => "Delete Node",
            Self::ChangeColor => "Change Color",
            Self::ExportPng => "Export to PNG",
        }
    }

    /// Short command name, used by text frontends.
    pub fn command(self) -> &'static str {
        match self {
            Self::AddChild => "add-child",
            Self::ExportXml => "export-xml",
            Self::Delete => "delete",
            Self::ChangeColor => "color",
            Self::ExportPng => "export-png",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.command() == s)
            .ok_or_else(|| format!("Unknown menu action '{s}'"))
    }
}

impl DiagramSurface {
    /// Runs a context-menu action, prompting through `dialogs` as needed.
    ///
    /// Export failures are logged and reported as an error notification;
    /// they never propagate.
    pub fn handle_menu(&mut self, action: MenuAction, dialogs: &mut impl Dialogs) {
        info!(action = action.command(); "Menu action");

        match action {
            MenuAction::AddChild => {
                if self.selected().is_none() {
                    return;
                }
                if let Some(text) = dialogs.prompt_text(CHILD_TEXT_LABEL, None) {
                    self.add_child_to_selected(&text);
                }
            }
            MenuAction::Delete => {
                self.delete_selected_subtree();
            }
            MenuAction::ChangeColor => {
                let Some(current) = self.selected_node().map(|node| node.color()) else {
                    return;
                };
                if let Some(color) = dialogs.prompt_color(current) {
                    self.recolor_selected(color);
                }
            }
            MenuAction::ExportXml => {
                let result = self.export_xml(self.xml_file());
                report_export(dialogs, "XML", result);
            }
            MenuAction::ExportPng => {
                let result = self.export_raster(self.png_file());
                report_export(dialogs, "PNG", result);
            }
        }
    }
}

fn report_export(dialogs: &mut impl Dialogs, format: &str, result: Result<(), export::Error>) {
    let notification = match result {
        Ok(()) => {
            info!(format; "Export finished");
            Notification::info("Export", format!("Exported as {format} successfully!"))
        }
        Err(err) => {
            error!(format, err:err; "Export failed");
            Notification::error("Export Error", format!("Failed to export as {format}."))
        }
    };
    dialogs.notify(notification);
}
