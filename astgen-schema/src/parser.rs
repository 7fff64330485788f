//! XML schema loader.
//!
//! This module reads author-maintained family definitions from XML into the
//! in-memory [`Schema`]. The loader checks document structure only; semantic
//! checks live in [`crate::validation`].
//!
//! ```xml
//! <astSchema>
//!     <family name="Expr" output="expression.py">
//!         <import line="from typing import Any"/>
//!         <import/>
//!         <variant name="Literal">
//!             <field name="value" type="Any"/>
//!         </variant>
//!     </family>
//! </astSchema>
//! ```

use crate::error::ParseError;
use crate::model::{Family, Field, Schema, Variant};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Parses a schema from an XML string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or misses required attributes.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut schema: Option<Schema> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                match (name.as_str(), schema.as_mut()) {
                    ("astSchema", None) => schema = Some(Schema::new()),
                    ("family", Some(schema)) => {
                        let family = parse_family(&mut reader, e)?;
                        schema.add_family(family);
                    }
                    (other, _) => return Err(ParseError::unexpected_element(other, "document")),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                match (name.as_str(), schema.as_mut()) {
                    ("astSchema", None) => schema = Some(Schema::new()),
                    ("family", Some(schema)) => schema.add_family(parse_family_attrs(e)?),
                    (other, _) => return Err(ParseError::unexpected_element(other, "document")),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    schema.ok_or_else(|| ParseError::InvalidStructure {
        message: "No astSchema element found".to_string(),
    })
}

/// Reads and parses a schema file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_schema(&xml)
}

/// Returns the qualified name of an element.
fn element_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

/// Returns the value of an attribute, if present.
fn attribute(e: &BytesStart<'_>, wanted: &str) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == wanted {
            let raw = std::str::from_utf8(&attr.value)?;
            let value = unescape(raw).map_err(|source| ParseError::Escape {
                attribute: wanted.to_string(),
                source,
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Returns the value of a required attribute.
fn required_attribute(
    e: &BytesStart<'_>,
    element: &str,
    wanted: &str,
) -> Result<String, ParseError> {
    attribute(e, wanted)?.ok_or_else(|| ParseError::missing_attr(element, wanted))
}

/// Parses the family element attributes.
fn parse_family_attrs(e: &BytesStart<'_>) -> Result<Family, ParseError> {
    let name = required_attribute(e, "family", "name")?;
    let output = required_attribute(e, "family", "output")?;
    Ok(Family::new(name, output))
}

/// Parses a family element and its children.
fn parse_family(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Family, ParseError> {
    let mut family = parse_family_attrs(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                match name.as_str() {
                    "import" => {
                        family.add_import(attribute(e, "line")?.unwrap_or_default());
                        skip_to_end(reader)?;
                    }
                    "variant" => {
                        let variant = parse_variant(reader, e)?;
                        family.add_variant(variant);
                    }
                    other => return Err(ParseError::unexpected_element(other, "family")),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                match name.as_str() {
                    "import" => family.add_import(attribute(e, "line")?.unwrap_or_default()),
                    "variant" => {
                        family.add_variant(Variant::new(required_attribute(e, "variant", "name")?))
                    }
                    other => return Err(ParseError::unexpected_element(other, "family")),
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unterminated family '{}'", family.name),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(family)
}

/// Parses a variant element and its fields.
fn parse_variant(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Variant, ParseError> {
    let mut variant = Variant::new(required_attribute(e, "variant", "name")?);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                if name != "field" {
                    return Err(ParseError::unexpected_element(name, "variant"));
                }
                variant.add_field(parse_field(e)?);
                skip_to_end(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                if name != "field" {
                    return Err(ParseError::unexpected_element(name, "variant"));
                }
                variant.add_field(parse_field(e)?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unterminated variant '{}'", variant.name),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(variant)
}

/// Parses a field element.
fn parse_field(e: &BytesStart<'_>) -> Result<Field, ParseError> {
    let name = required_attribute(e, "field", "name")?;
    let type_name = required_attribute(e, "field", "type")?;
    Ok(Field::new(name, type_name))
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
