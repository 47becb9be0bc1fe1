//! XML parsing into the [`Element`] tree.
//!
//! Names are reduced to their local part and namespace declarations are
//! dropped, so the same vocabulary published under different namespaces
//! resolves identically. Character data, CDATA sections, predefined entities
//! and numeric character references are concatenated in document order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ofac_model::{Document, Element};
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Parse the XML document at `path`.
pub fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|error| IngestError::io(path, error))?;
    parse_reader(BufReader::new(file))
}

/// Parse an in-memory XML string.
pub fn parse_str(xml: &str) -> Result<Document> {
    parse_reader(xml.as_bytes())
}

/// Parse XML from any buffered reader.
pub fn parse_reader<R: BufRead>(source: R) -> Result<Document> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut element_count = 0usize;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| IngestError::Xml {
                position: reader.error_position(),
                source,
            })?;
        let position = reader.buffer_position();
        match event {
            Event::Start(start) => {
                stack.push(open_element(&start, position)?);
            }
            Event::Empty(start) => {
                let element = open_element(&start, position)?;
                element_count += 1;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    element_count += 1;
                    attach(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(utf8(&text, position)?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(utf8(&data, position)?);
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(current) = stack.last_mut() {
                    push_reference(current, utf8(&reference, position)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(IngestError::UnclosedElement {
            name: open.name().to_string(),
        });
    }
    let root = root.ok_or(IngestError::EmptyDocument)?;
    debug!(root = root.name(), element_count, "parsed document");
    Ok(Document::new(root))
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<Element> {
    let mut element = Element::new(utf8(start.local_name().into_inner(), position)?);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|error| IngestError::Attribute {
            position,
            message: error.to_string(),
        })?;
        let qualified = attribute.key.as_ref();
        if qualified == b"xmlns" || qualified.starts_with(b"xmlns:") {
            continue;
        }
        let key = utf8(attribute.key.local_name().into_inner(), position)?;
        let raw = utf8(&attribute.value, position)?;
        let value = unescape(raw).map_err(|error| IngestError::Attribute {
            position,
            message: error.to_string(),
        })?;
        element.push_attribute(key, value);
    }
    Ok(element)
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(IngestError::MultipleRoots {
            name: element.name().to_string(),
        });
    }
    *root = Some(element);
    Ok(())
}

fn push_reference(target: &mut Element, name: &str) {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        if let Some(ch) = value.and_then(char::from_u32) {
            target.push_text(ch.encode_utf8(&mut [0; 4]));
            return;
        }
    } else if let Some(resolved) = resolve_predefined_entity(name) {
        target.push_text(resolved);
        return;
    }
    // Unknown entity: keep it verbatim.
    target.push_text(&format!("&{name};"));
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|source| IngestError::Encoding { position, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_namespace_prefixes() {
        let document = parse_str(
            r#"<ofac:Sanctions xmlns:ofac="urn:a" xmlns="urn:b"><ofac:Country ofac:ID="1" ISO2="US"/></ofac:Sanctions>"#,
        )
        .unwrap();
        let root = document.root();
        assert_eq!(root.name(), "Sanctions");
        assert_eq!(root.attributes().count(), 0);
        let country = root.child("Country").unwrap();
        assert_eq!(country.attr("ID"), Some("1"));
        assert_eq!(country.attr("ISO2"), Some("US"));
    }

    #[test]
    fn resolves_entities_and_cdata() {
        let document =
            parse_str("<a b=\"x &amp; y\">Smith &amp; Sons&#32;&#x41;<![CDATA[<1>]]>&nbsp;</a>")
                .unwrap();
        let root = document.root();
        assert_eq!(root.attr("b"), Some("x & y"));
        assert_eq!(root.raw_text(), "Smith & Sons A<1>&nbsp;");
    }

    #[test]
    fn rejects_unclosed_elements() {
        let error = parse_str("<a><b></b>").unwrap_err();
        assert!(matches!(error, IngestError::UnclosedElement { ref name } if name == "a"));
    }

    #[test]
    fn rejects_mismatched_end_tags() {
        let error = parse_str("<a><b></a>").unwrap_err();
        assert!(matches!(error, IngestError::Xml { .. }));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_str("").unwrap_err(), IngestError::EmptyDocument));
    }
}
