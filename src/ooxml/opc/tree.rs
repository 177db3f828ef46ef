//! Backing XML node tree for relationship parts.
//!
//! A deliberately small element tree: nodes carry a qualified name and an
//! ordered attribute list, and nothing else. Text, comments and processing
//! instructions are dropped on parse since `.rels` parts never carry any.
//!
//! Nodes live in an [`indextree::Arena`]. Handles are stamped [`NodeId`]s, so a
//! handle to a removed node (even one whose slot was reused) is reported as
//! stale instead of silently reaching a different node.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use indextree::{Arena, NodeId};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// An element node: qualified name plus attributes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attrs: SmallVec<[(String, String); 4]>,
}

impl XmlNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: SmallVec::new(),
        }
    }

    /// Get the value of an attribute by its qualified name.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serialization options for [`XmlTree::to_xml_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlWriteOptions {
    /// Emit the `<?xml ... standalone="yes"?>` declaration
    pub declaration: bool,
    /// Put each child element on its own indented line
    pub indent: bool,
}

impl Default for XmlWriteOptions {
    fn default() -> Self {
        Self {
            declaration: true,
            indent: true,
        }
    }
}

/// Arena-backed element tree with a single root.
#[derive(Debug, Clone)]
pub struct XmlTree {
    arena: Arena<XmlNode>,
    root: NodeId,
}

impl XmlTree {
    /// Create a tree holding only an empty root element.
    pub fn new(root_name: &str) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(XmlNode::new(root_name));
        Self { arena, root }
    }

    /// Create a tree whose root element declares a default namespace.
    pub fn with_namespace(root_name: &str, namespace: &str) -> Self {
        let mut data = XmlNode::new(root_name);
        data.attrs.push(("xmlns".to_string(), namespace.to_string()));

        let mut arena = Arena::new();
        let root = arena.new_node(data);
        Self { arena, root }
    }

    /// Parse a tree from serialized XML.
    ///
    /// Uses quick-xml streaming events; attribute values are unescaped.
    ///
    /// # Errors
    /// Fails on malformed XML, on a document without a root element, and on
    /// a document with more than one root element.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut arena = Arena::new();
        let mut root: Option<NodeId> = None;
        let mut open: SmallVec<[NodeId; 4]> = SmallVec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let node = Self::insert_element(&mut arena, &mut root, &open, e)?;
                    open.push(node);
                },
                Ok(Event::Empty(ref e)) => {
                    Self::insert_element(&mut arena, &mut root, &open, e)?;
                },
                Ok(Event::End(_)) => {
                    open.pop();
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!(
                        "Relationships parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        let root = root.ok_or_else(|| OpcError::XmlError("Missing root element".to_string()))?;
        Ok(Self { arena, root })
    }

    fn insert_element(
        arena: &mut Arena<XmlNode>,
        root: &mut Option<NodeId>,
        open: &[NodeId],
        e: &BytesStart<'_>,
    ) -> Result<NodeId> {
        let mut data = XmlNode::new(std::str::from_utf8(e.name().as_ref())?);
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            data.attrs.push((key, value));
        }

        let node = arena.new_node(data);
        match (open.last(), root.is_some()) {
            (Some(parent), _) => parent.append(node, arena),
            (None, false) => *root = Some(node),
            (None, true) => {
                return Err(OpcError::XmlError(
                    "Multiple root elements".to_string(),
                ));
            },
        }
        Ok(node)
    }

    /// Get the root element.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Check whether a handle still refers to a node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        match self.arena.get(node) {
            Some(n) => !n.is_removed() && !node.is_removed(&self.arena),
            None => false,
        }
    }

    /// Get the data of a live node.
    pub fn node(&self, node: NodeId) -> Result<&XmlNode> {
        if !self.contains(node) {
            return Err(OpcError::StaleNode);
        }
        self.arena.get(node).map(|n| n.get()).ok_or(OpcError::StaleNode)
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut XmlNode> {
        if !self.contains(node) {
            return Err(OpcError::StaleNode);
        }
        self.arena
            .get_mut(node)
            .map(|n| n.get_mut())
            .ok_or(OpcError::StaleNode)
    }

    /// Get the qualified name of a live node.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|n| n.name.as_str())
    }

    /// Get an attribute value of a live node.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).ok().and_then(|n| n.attribute(name))
    }

    /// Iterate the children of a node in document order.
    ///
    /// Yields nothing for a stale handle.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let live = self.contains(node);
        node.children(&self.arena).filter(move |_| live)
    }

    /// Create a detached element. Attach it with [`XmlTree::append`].
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.arena.new_node(XmlNode::new(name))
    }

    /// Set an attribute, replacing the value if the attribute already exists.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let data = self.node_mut(node)?;
        match data.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.attrs.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(OpcError::StaleNode);
        }
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|e| OpcError::XmlError(e.to_string()))
    }

    /// Remove a node and its descendants.
    ///
    /// Returns `false` without touching the tree when the node is already
    /// removed or is the root.
    pub fn delete(&mut self, node: NodeId) -> bool {
        if node == self.root || !self.contains(node) {
            return false;
        }
        node.remove_subtree(&mut self.arena);
        true
    }

    /// Serialize with the default options.
    pub fn to_xml(&self) -> String {
        self.to_xml_with(&XmlWriteOptions::default())
    }

    /// Serialize the tree to an XML string.
    pub fn to_xml_with(&self, options: &XmlWriteOptions) -> String {
        let mut xml = String::with_capacity(1024);
        if options.declaration {
            xml.push_str(XML_DECLARATION);
            if options.indent {
                xml.push('\n');
            }
        }
        self.write_element(&mut xml, self.root, 0, options);
        xml
    }

    fn write_element(&self, xml: &mut String, node: NodeId, depth: usize, options: &XmlWriteOptions) {
        let Ok(data) = self.node(node) else {
            return;
        };

        if options.indent {
            for _ in 0..depth {
                xml.push_str("  ");
            }
        }
        xml.push('<');
        xml.push_str(&data.name);
        for (key, value) in &data.attrs {
            xml.push(' ');
            xml.push_str(key);
            xml.push_str("=\"");
            xml.push_str(&escape_xml(value));
            xml.push('"');
        }

        let mut children = node.children(&self.arena).peekable();
        if children.peek().is_none() {
            xml.push_str("/>");
        } else {
            xml.push('>');
            if options.indent {
                xml.push('\n');
            }
            for child in children {
                self.write_element(xml, child, depth + 1, options);
            }
            if options.indent {
                for _ in 0..depth {
                    xml.push_str("  ");
                }
            }
            xml.push_str("</");
            xml.push_str(&data.name);
            xml.push('>');
        }

        if options.indent && depth > 0 {
            xml.push('\n');
        }
    }
}
