//! Prelude module for convenient imports.
//!
//! ```
//! use astgen::prelude::*;
//! ```

// Schema types
pub use astgen_schema::{
    Family, Field, ParseError, Schema, SchemaError, SchemaIr, Variant, interpreter_schema,
    parse_schema, validate_schema,
};

// Generation
pub use astgen_codegen::{
    CodegenError, GeneratedUnit, Generator, generate_from_file, generate_from_xml,
    generate_schema, write_schema,
};

// Sinks
pub use astgen_codegen::{ConsoleSink, DirectorySink, MemorySink, OutputSink, Tee};
