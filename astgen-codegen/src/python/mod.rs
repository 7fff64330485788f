//! Python code generation modules.
//!
//! Each generator renders one part of a family's output unit. Every part
//! starts and ends with the blank lines that separate it from its
//! neighbours, so the orchestrator only concatenates and trims.

pub mod base;
pub mod variants;
pub mod visitor;

pub use base::BaseTypeGenerator;
pub use variants::VariantGenerator;
pub use visitor::VisitorGenerator;
