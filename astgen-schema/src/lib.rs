//! # astgen Schema
//!
//! Schema model and naming rules for AST node families.
//!
//! This crate provides:
//! - Typed family / variant / field definitions
//! - The identifier policy mapping variants to visitor method names
//! - Schema validation
//! - An XML schema loader
//! - Intermediate representation for code generation
//! - The built-in interpreter schema

pub mod builtin;
pub mod error;
pub mod ir;
pub mod model;
pub mod naming;
pub mod parser;
pub mod validation;

pub use builtin::interpreter_schema;
pub use error::{ParseError, SchemaError};
pub use ir::{ResolvedFamily, ResolvedVariant, SchemaIr};
pub use model::{Family, Field, Schema, Variant};
pub use naming::dispatch_method_name;
pub use parser::{parse_schema, parse_schema_file};
pub use validation::{validate_family, validate_schema};
