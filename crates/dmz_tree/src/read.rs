//! Types for reading attributed trees
//!

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::node::{Attribute, Document, TreeNode, ATTRIBUTE};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

enum Frame {
    Node(TreeNode),
    Attribute(Attribute),
}

impl Frame {
    fn open(element: &BytesStart<'_>, parent: Option<&Frame>) -> Result<Frame> {
        let tag = std::str::from_utf8(element.name().as_ref())?.to_owned();

        let mut properties = Vec::new();
        for attr in element.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_owned();
            let value = unescape(std::str::from_utf8(&attr.value)?)?.into_owned();
            properties.push((key, value));
        }

        // Attribute records only exist directly below a node
        if tag == ATTRIBUTE && matches!(parent, Some(Frame::Node(_))) {
            let mut attribute = Attribute::default();
            for (key, value) in properties {
                match key.as_str() {
                    "Name" => attribute.name = value,
                    "Type" => attribute.kind = value,
                    "ValueType" => attribute.value_type = value,
                    "Value" => attribute.value = value,
                    _ => {}
                }
            }
            return Ok(Frame::Attribute(attribute));
        }

        Ok(Frame::Node(TreeNode {
            tag,
            properties,
            ..Default::default()
        }))
    }

    fn tag(&self) -> &str {
        match self {
            Frame::Node(node) => &node.tag,
            Frame::Attribute(_) => ATTRIBUTE,
        }
    }

    fn into_node(self) -> TreeNode {
        match self {
            Frame::Node(node) => node,
            Frame::Attribute(attribute) => TreeNode {
                tag: ATTRIBUTE.into(),
                properties: vec![
                    ("Name".into(), attribute.name),
                    ("Type".into(), attribute.kind),
                    ("ValueType".into(), attribute.value_type),
                    ("Value".into(), attribute.value),
                ],
                attributes: Vec::new(),
                children: attribute.children,
            },
        }
    }

    fn close(self, stack: &mut [Frame], root: &mut Option<TreeNode>) {
        match stack.last_mut() {
            Some(Frame::Node(parent)) => match self {
                Frame::Node(node) => parent.children.push(node),
                Frame::Attribute(attribute) => parent.attributes.push(attribute),
            },
            Some(Frame::Attribute(parent)) => parent.children.push(self.into_node()),
            None => {
                if root.is_none() {
                    *root = Some(self.into_node());
                }
            }
        }
    }
}

impl Document {
    /// Parse an XML buffer into a tree
    ///
    /// A leading UTF-8 byte order mark is accepted. Text content is ignored, everything the
    /// format stores lives in element attributes.
    #[instrument(skip_all, err, fields(size = bytes.len()))]
    pub fn parse(bytes: &[u8]) -> Result<Document> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let frame = Frame::open(&e, stack.last())?;
                    stack.push(frame);
                }
                Event::Empty(e) => {
                    let frame = Frame::open(&e, stack.last())?;
                    frame.close(&mut stack, &mut root);
                }
                Event::End(e) => {
                    let Some(frame) = stack.pop() else {
                        return Err(Error::Unbalanced(
                            String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        ));
                    };
                    frame.close(&mut stack, &mut root);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::Unbalanced(open.tag().to_owned()));
        }

        root.map(Document::new).ok_or(Error::MissingRoot)
    }

    pub fn parse_str(xml: &str) -> Result<Document> {
        Self::parse(xml.as_bytes())
    }
}

impl TreeNode {
    /// Parse a single serialized element, as produced by [`TreeNode::to_xml_string`]
    pub fn parse_fragment(xml: &str) -> Result<TreeNode> {
        Document::parse_str(xml).map(|document| document.root)
    }
}
