//! XML helpers: a small element tree for writing requests, and
//! namespace-agnostic path queries over parsed responses.
//!
//! Requests are built as an [`Element`] tree and written with `quick-xml`.
//! Responses are parsed with `roxmltree` and queried with [`NodePath`].

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use roxmltree::{Document, Edge, Node};
use std::fmt;
use std::io::{Cursor, Read};

use crate::core::TinError;

/// Deepest element nesting accepted in a response.
pub const MAX_DEPTH: usize = 256;

fn xml_io(e: std::io::Error) -> TinError {
    TinError::Xml(format!("XML write error: {e}"))
}

/// An element of an outgoing document.
///
/// Only used for documents assembled in code, such as the request
/// template; responses are never loaded into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Qualified name as written, e.g. `soapenv:Body`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// First element (self included) with the given local name, in document order.
    pub fn find_mut(&mut self, local_name: &str) -> Option<&mut Element> {
        if self.local_name() == local_name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(local_name))
    }

    /// Serialize with an XML declaration and no indentation.
    pub fn to_xml_string(&self) -> Result<String, TinError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        self.write_to(&mut writer)?;
        let buf = writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| TinError::Xml(format!("XML UTF-8 error: {e}")))
    }

    fn write_to(&self, writer: &mut Writer<Cursor<Vec<u8>>>) -> Result<(), TinError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (k, v) in &self.attributes {
            start.push_attribute((k.as_str(), v.as_str()));
        }
        if self.text.is_empty() && self.children.is_empty() {
            writer.write_event(Event::Empty(start)).map_err(xml_io)?;
            return Ok(());
        }
        writer.write_event(Event::Start(start)).map_err(xml_io)?;
        if !self.text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&self.text)))
                .map_err(xml_io)?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(xml_io)?;
        Ok(())
    }
}

/// Read a whole response body, which must be UTF-8.
pub fn read_body<R: Read>(mut body: R) -> Result<String, TinError> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;
    String::from_utf8(buf).map_err(|e| TinError::Xml(format!("response is not UTF-8: {e}")))
}

/// Parse a response document, rejecting nesting deeper than [`MAX_DEPTH`].
pub fn parse_response(text: &str) -> Result<Document<'_>, TinError> {
    let doc = Document::parse(text)?;
    let mut depth = 0usize;
    for edge in doc.root().traverse() {
        match edge {
            Edge::Open(node) if node.is_element() => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(TinError::Xml(format!(
                        "elements nested deeper than {MAX_DEPTH} levels"
                    )));
                }
            }
            Edge::Close(node) if node.is_element() => depth -= 1,
            _ => {}
        }
    }
    Ok(doc)
}

/// A compiled, namespace-agnostic path query.
///
/// The first step matches an element anywhere in the document; each
/// following step matches a direct child. All steps compare local names
/// only, so `NodePath::new(["Fault", "faultstring"])` behaves like
/// `//*[local-name()='Fault']/*[local-name()='faultstring']`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    steps: Vec<String>,
}

impl NodePath {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// First matching element in document order.
    pub fn select<'a, 'input>(&self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        let (first, rest) = self.steps.split_first()?;
        doc.descendants()
            .filter(|n| is_named(n, first))
            .find_map(|n| follow(n, rest))
    }

    /// Trimmed text of the first match, or an empty string when nothing matches.
    pub fn text(&self, doc: &Document<'_>) -> String {
        self.select(doc)
            .map(|node| {
                let text: String = node.descendants().filter_map(|d| d.text()).collect();
                text.trim().to_string()
            })
            .unwrap_or_default()
    }
}

fn is_named(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}

fn follow<'a, 'input>(node: Node<'a, 'input>, steps: &[String]) -> Option<Node<'a, 'input>> {
    let Some((step, rest)) = steps.split_first() else {
        return Some(node);
    };
    node.children()
        .filter(|c| is_named(c, step))
        .find_map(|c| follow(c, rest))
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            let sep = if i == 0 { "//" } else { "/" };
            write!(f, "{sep}*[local-name()='{step}']")?;
        }
        Ok(())
    }
}
