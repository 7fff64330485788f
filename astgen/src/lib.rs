//! # astgen
//!
//! Schema-driven generator for the AST node hierarchy and visitor scaffolding
//! of a tree-walking interpreter.
//!
//! Given a set of node families (expressions, statements, ...) and, within
//! each family, a set of variants with typed fields, astgen emits one Python
//! module per family containing:
//!
//! - an abstract base class whose `__call__` refuses to dispatch,
//! - a visitor class with one raising stub per variant,
//! - one concrete class per variant that dispatches back into the visitor.
//!
//! ## Quick Start
//!
//! ```
//! use astgen::prelude::*;
//!
//! let schema = Schema::new().family(
//!     Family::new("Stmt", "statement.py")
//!         .import("from typing import Any")
//!         .variant(Variant::new("Break")),
//! );
//!
//! let units = generate_schema(&schema)?;
//! assert!(units[0].contents.contains("return visitor.break_stmt(self)"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Family model, naming policy, validation and XML loading
//! - [`codegen`] - Python emitters, generator and output sinks

pub mod prelude;

/// Schema model, naming policy and loading.
pub mod schema {
    pub use astgen_schema::*;
}

/// Code generation from family schemas.
pub mod codegen {
    pub use astgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use astgen_codegen::{
    CodegenError, GeneratedUnit, Generator, OutputSink, generate_from_file, generate_from_xml,
    generate_schema, write_schema,
};
pub use astgen_schema::{Family, Field, Schema, SchemaError, Variant, interpreter_schema};
