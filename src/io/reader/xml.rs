/*! Owned XML element tree.

[roxmltree] documents borrow their source text, so parsed files are converted into
an owned [Element] tree that can be moved out of worker threads.

Only elements are kept. The text of an element is the text that precedes its first child
element, comments and processing instructions excluded. It is [None] when there is no such text.

Files are decoded according to their XML declaration, UTF-8 being the default.
!*/
use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Parse a whole document, returning its root element.
    pub fn parse(src: &str) -> Result<Self, Error> {
        let opts = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(src, opts)?;
        Ok(Self::from_node(doc.root_element()))
    }

    /// Read and parse a file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        let src = decode(bytes)?;
        Self::parse(&src)
    }

    fn from_node(node: Node) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(Node::is_element)
            .map(Self::from_node)
            .collect();

        Self {
            name: node.tag_name().name().to_string(),
            attributes,
            text: leading_text(node),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a mandatory attribute.
    pub fn require_attribute(&self, name: &str) -> Result<&str, Error> {
        self.attribute(name).ok_or_else(|| Error::MissingAttribute {
            element: self.name.clone(),
            name: name.to_string(),
        })
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child named `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Get a mandatory direct child.
    pub fn require(&self, name: &str) -> Result<&Element, Error> {
        self.find(name).ok_or_else(|| Error::MissingElement {
            parent: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Get a mandatory direct child by position.
    pub fn require_nth(&self, idx: usize) -> Result<&Element, Error> {
        self.children.get(idx).ok_or_else(|| Error::MissingElement {
            parent: self.name.clone(),
            name: format!("child #{}", idx),
        })
    }

    pub fn into_children(self) -> Vec<Element> {
        self.children
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

/// Concatenated text nodes before the first child element.
fn leading_text(node: Node) -> Option<String> {
    let text: String = node
        .children()
        .take_while(|child| !child.is_element())
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Value of the `encoding` pseudo-attribute of the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let decl = bytes.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&decl[..end]).ok()?;

    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    rest[1..].split(quote).next()
}

/// Decode a file following its declared encoding.
fn decode(bytes: Vec<u8>) -> Result<String, Error> {
    let encoding = match declared_encoding(&bytes) {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| Error::Custom(format!("unsupported encoding: {}", label)))?,
        None => UTF_8,
    };

    if encoding == UTF_8 {
        return Ok(String::from_utf8(bytes)?);
    }
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| Error::Custom(format!("invalid {} content", encoding.name())))
}
