//! XML export of the active nodes.
//!
//! The document is a flat list; tree structure is not serialized:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="no"?>
//! <MindMap>
//!     <Node Text="Root" X="300" Y="200" Color="00ffff"/>
//! </MindMap>
//! ```

use std::{fs, path::Path};

use log::{error, info};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};

use mindmap_core::node::Node;

use crate::export::Error;

const ROOT_ELEMENT: &str = "MindMap";
const NODE_ELEMENT: &str = "Node";

/// Serializes `nodes` into an indented XML document.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the document cannot be built.
pub fn to_string<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))),
    )?;
    write_event(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;

    for node in nodes {
        let x = node.position().x().to_string();
        let y = node.position().y().to_string();
        let color = node.color().to_hex_rgb();

        let mut element = BytesStart::new(NODE_ELEMENT);
        element.push_attribute(("Text", node.text()));
        element.push_attribute(("X", x.as_str()));
        element.push_attribute(("Y", y.as_str()));
        element.push_attribute(("Color", color.as_str()));
        write_event(&mut writer, Event::Empty(element))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    let mut document = String::from_utf8(writer.into_inner())
        .map_err(|err| Error::Encoding(format!("XML output is not UTF-8: {err}")))?;
    document.push('\n');
    Ok(document)
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|err| Error::Encoding(format!("Failed to write XML event: {err}")))
}

/// Serializes `nodes` and writes the document to `path`.
pub(crate) fn write_file<'a>(
    path: &Path,
    nodes: impl IntoIterator<Item = &'a Node>,
) -> Result<(), Error> {
    let document = to_string(nodes)?;

    info!(path = path.display().to_string(); "Writing XML export");
    fs::write(path, document).map_err(|err| {
        error!(path = path.display().to_string(), err:err; "Failed to write XML file");
        Error::Io(err)
    })
}
