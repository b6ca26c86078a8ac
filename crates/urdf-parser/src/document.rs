//! Document tree consumed by the parser, and the text reader that builds it.
//!
//! The parser never sees raw text. It walks an already-tokenized tree of
//! [`Element`]s: a tag name, ordered attributes and ordered child elements.
//! Text content, comments and processing instructions are dropped since no
//! robot description element carries meaning in them.

use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, UrdfError};

/// An element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Raw attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First child element, whatever its tag.
    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }

    /// First child element with the given tag.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given tag.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// A document: its single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The root element.
    pub root: Element,
}

impl Document {
    /// Wrap a root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Tokenize XML text into a document tree.
    pub fn parse_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(element_from_start(e)?),
                Ok(Event::Empty(ref e)) => {
                    let element = element_from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| UrdfError::Xml("unexpected closing tag".into()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(UrdfError::Xml(format!(
                        "at byte {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(UrdfError::Xml(format!("unclosed element <{}>", open.name)));
        }

        root.map(Document::new)
            .ok_or_else(|| UrdfError::Xml("document has no root element".into()))
    }
}

impl FromStr for Document {
    type Err = UrdfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

fn element_from_start(e: &BytesStart) -> Result<Element> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|_| UrdfError::Xml("element name is not valid UTF-8".into()))?
        .to_string();

    let mut element = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| UrdfError::Xml(format!("in <{}>: {err}", element.name)))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| UrdfError::Xml(format!("attribute name in <{}> is not valid UTF-8", element.name)))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| UrdfError::Xml(format!("attribute '{key}' in <{}>: {err}", element.name)))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(UrdfError::Xml(format!(
                "multiple root elements: <{}>",
                element.name
            )));
        }
    }
    Ok(())
}
