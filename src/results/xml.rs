//! Parser for the server's XML response format.
//!
//! The body is first read into a small element tree with `quick-xml`, then
//! the known sections (`responseHeader`, `response`, `facet_counts`,
//! `highlighting`, `error`) are decoded from the tree. Unknown sections are
//! ignored.

use std::collections::HashMap;
use std::marker::PhantomData;

use log::trace;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::document::{Document, FieldValue, SolrDocument};
use crate::error::{Result, SolrError};
use crate::results::{
    DocumentHighlights, FacetValue, QueryResults, ResponseHeader, ResultParser,
};

/// One XML element with its attributes, text and children.
#[derive(Debug, Default)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            tag,
            attributes,
            ..Default::default()
        })
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    fn child_named(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name() == Some(name))
    }
}

/// Read `xml` into an element tree and return its root.
fn read_tree(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(Element::from_start(e)?),
            Event::Empty(ref e) => {
                let element = Element::from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| SolrError::parse("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SolrError::parse(format!("unclosed element <{}>", open.tag)));
    }
    root.ok_or_else(|| SolrError::parse("response has no root element"))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(SolrError::parse("response has more than one root element")),
    }
    Ok(())
}

fn parse_count(element: &Element) -> Result<u64> {
    element.text.trim().parse().map_err(|e| {
        SolrError::parse(format!(
            "invalid count {:?} for {:?}: {e}",
            element.text,
            element.name().unwrap_or_default()
        ))
    })
}

fn parse_attribute<T: std::str::FromStr>(element: &Element, key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    element
        .attribute(key)
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| SolrError::parse(format!("invalid {key} attribute {v:?}: {e}")))
        })
        .transpose()
}

fn decode_value(element: &Element) -> Result<FieldValue> {
    match element.tag.as_str() {
        "arr" => element
            .children
            .iter()
            .map(decode_value)
            .collect::<Result<Vec<_>>>()
            .map(FieldValue::Array),
        tag => FieldValue::from_xml(tag, &element.text),
    }
}

fn decode_document(element: &Element) -> Result<Document> {
    let mut document = Document::new();
    for field in &element.children {
        // Nested child documents are not part of the parent's fields.
        if field.tag == "doc" {
            continue;
        }
        let name = field.name().ok_or_else(|| {
            SolrError::parse(format!("<{}> inside <doc> has no name", field.tag))
        })?;
        document.add_field(name, decode_value(field)?);
    }
    Ok(document)
}

fn decode_header(element: &Element) -> Result<ResponseHeader> {
    let mut header = ResponseHeader::default();
    if let Some(status) = element.child_named("status") {
        header.status = status
            .text
            .trim()
            .parse()
            .map_err(|e| SolrError::parse(format!("invalid status {:?}: {e}", status.text)))?;
    }
    if let Some(qtime) = element.child_named("QTime") {
        header.query_time = parse_count(qtime)?;
    }
    Ok(header)
}

fn decode_facet_fields(element: &Element) -> Result<HashMap<String, Vec<FacetValue>>> {
    let mut fields = HashMap::new();
    for field in &element.children {
        let Some(name) = field.name() else {
            continue;
        };
        let values = field
            .children
            .iter()
            // An unnamed count is the number of documents missing the field.
            .map(|v| -> Result<FacetValue> {
                Ok(FacetValue::new(v.name().unwrap_or_default(), parse_count(v)?))
            })
            .collect::<Result<Vec<_>>>()?;
        fields.insert(name.to_string(), values);
    }
    Ok(fields)
}

fn decode_facet_queries(element: &Element) -> Result<HashMap<String, u64>> {
    element
        .children
        .iter()
        .filter_map(|q| q.name().map(|name| (name, q)))
        .map(|(name, q)| -> Result<(String, u64)> { Ok((name.to_string(), parse_count(q)?)) })
        .collect()
}

fn decode_highlighting(element: &Element) -> HashMap<String, DocumentHighlights> {
    let mut highlights = HashMap::new();
    for document in &element.children {
        let Some(key) = document.name() else {
            continue;
        };
        let mut fields = DocumentHighlights::new();
        for field in &document.children {
            if let Some(name) = field.name() {
                let snippets = field.children.iter().map(|s| s.text.clone()).collect();
                fields.insert(name.to_string(), snippets);
            }
        }
        highlights.insert(key.to_string(), fields);
    }
    highlights
}

/// Result parser for `wt=xml` responses.
#[derive(Debug)]
pub struct XmlResultParser<D> {
    _marker: PhantomData<fn() -> D>,
}

impl<D> XmlResultParser<D> {
    /// Create a new XML result parser.
    pub fn new() -> Self {
        XmlResultParser {
            _marker: PhantomData,
        }
    }
}

impl<D> Default for XmlResultParser<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for XmlResultParser<D> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<D: SolrDocument> ResultParser<D> for XmlResultParser<D> {
    fn parse(&self, response: &str) -> Result<QueryResults<D>> {
        if response.trim().is_empty() {
            return Err(SolrError::parse("empty response body"));
        }

        let root = read_tree(response)?;
        if root.tag != "response" {
            return Err(SolrError::parse(format!(
                "expected <response> root element, found <{}>",
                root.tag
            )));
        }

        let mut results = QueryResults::default();
        let mut error_message = None;

        for section in &root.children {
            match (section.tag.as_str(), section.name()) {
                ("lst", Some("responseHeader")) => results.header = decode_header(section)?,
                ("result", _) => {
                    results.num_found = parse_attribute(section, "numFound")?.unwrap_or(0);
                    results.start = parse_attribute(section, "start")?.unwrap_or(0);
                    results.max_score = parse_attribute(section, "maxScore")?;
                    results.documents = section
                        .children
                        .iter()
                        .filter(|c| c.tag == "doc")
                        .map(|doc| D::from_document(decode_document(doc)?))
                        .collect::<Result<Vec<_>>>()?;
                }
                ("lst", Some("facet_counts")) => {
                    if let Some(queries) = section.child_named("facet_queries") {
                        results.facet_queries = decode_facet_queries(queries)?;
                    }
                    if let Some(fields) = section.child_named("facet_fields") {
                        results.facet_fields = decode_facet_fields(fields)?;
                    }
                }
                ("lst", Some("highlighting")) => {
                    results.highlights = decode_highlighting(section);
                }
                ("lst", Some("error")) => {
                    error_message = section.child_named("msg").map(|m| m.text.clone());
                }
                (tag, name) => trace!("skipping response section <{tag}> {name:?}"),
            }
        }

        if results.header.status != 0 {
            return Err(SolrError::server(
                results.header.status,
                error_message.unwrap_or_else(|| "request failed".to_string()),
            ));
        }

        trace!(
            "parsed {} of {} documents",
            results.documents.len(),
            results.num_found
        );
        Ok(results)
    }
}
