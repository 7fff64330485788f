//! # astgen Codegen
//!
//! Code generation of AST node hierarchies from family schemas.
//!
//! This crate provides:
//! - Python base class, visitor and variant class generation
//! - A generator producing one output unit per family
//! - Output sinks for files, the console and memory

pub mod error;
pub mod generator;
pub mod python;
pub mod sink;

pub use error::CodegenError;
pub use generator::{GeneratedUnit, Generator};
pub use sink::{ConsoleSink, DirectorySink, MemorySink, OutputSink, Tee};

use astgen_schema::{Schema, SchemaIr};

/// Validates a schema and generates every family.
///
/// # Arguments
/// * `schema` - Family definitions
///
/// # Returns
/// One generated unit per family, in schema order.
///
/// # Errors
/// Returns `CodegenError::Schema` if the schema is malformed; nothing is
/// generated in that case.
pub fn generate_schema(schema: &Schema) -> Result<Vec<GeneratedUnit>, CodegenError> {
    astgen_schema::validate_schema(schema)?;
    let ir = SchemaIr::from_schema(schema);
    Ok(Generator::new(&ir).generate())
}

/// Validates a schema, generates every family and writes the units to `sink`.
///
/// # Errors
/// Returns `CodegenError` if validation fails or the sink rejects a unit.
pub fn write_schema(schema: &Schema, sink: &mut dyn OutputSink) -> Result<usize, CodegenError> {
    astgen_schema::validate_schema(schema)?;
    let ir = SchemaIr::from_schema(schema);
    Generator::new(&ir).write_all(sink)
}

/// Generates Python code from an XML schema string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<Vec<GeneratedUnit>, CodegenError> {
    let schema = astgen_schema::parse_schema(xml)?;
    generate_schema(&schema)
}

/// Generates Python code from an XML schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Vec<GeneratedUnit>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}

/// Returns a schema restricted to the named families.
///
/// # Errors
/// Returns `CodegenError::UnknownFamily` for the first name the schema does
/// not define.
pub fn select_families<S: AsRef<str>>(
    schema: &Schema,
    names: &[S],
) -> Result<Schema, CodegenError> {
    let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
    if let Some(missing) = names.iter().find(|name| !schema.has_family(name)) {
        return Err(CodegenError::UnknownFamily {
            name: (*missing).to_string(),
        });
    }
    Ok(schema.retain_families(&names))
}
