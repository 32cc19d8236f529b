//! Types for writing attributed trees
//!

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tracing::instrument;

use crate::error::Result;
use crate::node::{Attribute, Document, TreeNode, ATTRIBUTE};

const INDENT: usize = 2;

impl Document {
    /// Serialize the tree as UTF-8 XML with a declaration and two space indentation
    #[instrument(skip_all, err)]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        write_node(&mut writer, &self.root)?;

        Ok(writer.into_inner())
    }
}

impl TreeNode {
    /// Serialize this node and everything below it, without an XML declaration
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
        write_node(&mut writer, self)?;

        Ok(String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?)
    }
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &TreeNode) -> Result<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    for (key, value) in &node.properties {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.attributes.is_empty() && node.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for attribute in &node.attributes {
        write_attribute(writer, attribute)?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;

    Ok(())
}

fn write_attribute<W: Write>(writer: &mut Writer<W>, attribute: &Attribute) -> Result<()> {
    let mut start = BytesStart::new(ATTRIBUTE);
    start.push_attribute(("Name", attribute.name.as_str()));
    start.push_attribute(("Type", attribute.kind.as_str()));
    start.push_attribute(("ValueType", attribute.value_type.as_str()));
    start.push_attribute(("Value", attribute.value.as_str()));

    if attribute.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &attribute.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ATTRIBUTE)))?;

    Ok(())
}
