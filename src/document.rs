//! Read-only XML element tree and tag queries.
//!
//! Bulletins are small, so the whole document is materialized as an owned
//! tree built from `quick_xml` events. Element names keep their namespace
//! prefix (`jmx_eb:Axis`), matching how the bulletin vocabulary is written.
//!
//! All lookups search descendants depth-first in document order. Tag name
//! and attribute filtering goes through [`TagQuery`], the single query
//! primitive used by the parser.

use crate::error::{BulletinError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parsed XML document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

/// An element with its attributes and mixed content
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Element(Element),
    Text(String),
}

impl Document {
    /// Parse a document from XML text
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        // Stack of open elements; the bottom entry is a synthetic container
        let mut stack: Vec<Element> = vec![Element::new("")];

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    push_child(&mut stack, Node::Element(element));
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .filter(|_| !stack.is_empty())
                        .ok_or_else(|| BulletinError::malformed("document", "unbalanced end tag"))?;
                    push_child(&mut stack, Node::Element(element));
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    push_child(&mut stack, Node::Text(text.into_owned()));
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    push_child(&mut stack, Node::Text(text));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if stack.len() != 1 {
            return Err(BulletinError::malformed(
                "document",
                format!("{} unclosed element(s)", stack.len() - 1),
            ));
        }

        let container = stack.remove(0);
        let root = container
            .children
            .into_iter()
            .find_map(|node| match node {
                Node::Element(element) => Some(element),
                Node::Text(_) => None,
            })
            .ok_or_else(|| BulletinError::malformed("document", "no root element"))?;

        Ok(Self { root })
    }

    /// Root element of the document
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First element matching the query, including the root itself
    pub fn find(&self, query: &TagQuery<'_>) -> Option<&Element> {
        if query.matches(&self.root) {
            Some(&self.root)
        } else {
            self.root.find(query)
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn push_child(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

impl Element {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Qualified tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by qualified name
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated descendant text with surrounding whitespace removed
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Direct child elements
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First direct child matching the query
    pub fn child(&self, query: &TagQuery<'_>) -> Option<&Element> {
        self.children().find(|child| query.matches(child))
    }

    /// First descendant matching the query (direct children only for
    /// [`TagQuery::direct`] queries)
    pub fn find(&self, query: &TagQuery<'_>) -> Option<&Element> {
        if query.direct {
            return self.child(query);
        }
        for child in self.children() {
            if query.matches(child) {
                return Some(child);
            }
            if let Some(found) = child.find(query) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants matching the query, in document order
    pub fn find_all(&self, query: &TagQuery<'_>) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matches(query, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, query: &TagQuery<'_>, found: &mut Vec<&'a Element>) {
        for child in self.children() {
            if query.matches(child) {
                found.push(child);
            }
            if !query.direct {
                child.collect_matches(query, found);
            }
        }
    }

    /// First descendant with the given tag whose attributes all match
    pub fn find_child_by_tag_and_attr(
        &self,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Option<&Element> {
        let query = attrs
            .iter()
            .fold(TagQuery::tag(tag), |query, &(key, value)| {
                query.with_attr(key, value)
            });
        self.find(&query)
    }
}

/// Tag-name plus attribute-value filter
#[derive(Debug, Clone)]
pub struct TagQuery<'q> {
    names: Vec<&'q str>,
    attrs: Vec<(&'q str, &'q str)>,
    direct: bool,
}

impl<'q> TagQuery<'q> {
    /// Match a single tag name
    pub fn tag(name: &'q str) -> Self {
        Self {
            names: vec![name],
            attrs: Vec::new(),
            direct: false,
        }
    }

    /// Match any of several tag names
    pub fn any_of(names: &[&'q str]) -> Self {
        Self {
            names: names.to_vec(),
            attrs: Vec::new(),
            direct: false,
        }
    }

    /// Additionally require an attribute to equal a value
    pub fn with_attr(mut self, key: &'q str, value: &'q str) -> Self {
        self.attrs.push((key, value));
        self
    }

    /// Restrict matching to direct children of the searched element
    pub fn direct(mut self) -> Self {
        self.direct = true;
        self
    }

    /// Human-readable form used in error messages
    pub fn describe(&self) -> String {
        let mut out = self.names.join("|");
        for (key, value) in &self.attrs {
            out.push_str(&format!("[{}={}]", key, value));
        }
        out
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.names.iter().any(|name| *name == element.name)
            && self
                .attrs
                .iter()
                .all(|(key, value)| element.attr(key) == Some(*value))
    }
}
