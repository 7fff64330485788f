//! Intermediate representation for code generation.
//!
//! This module provides a resolved representation of the schema in which
//! every derived name (visitor class, visitor parameter, dispatch method) is
//! computed once. Emitters only read from it, so a visitor stub and the
//! dispatch call that targets it can never disagree.

use crate::model::{Family, Field, Schema, Variant};
use crate::naming::{dispatch_method_name, parameter_name, visitor_name};

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Resolved families in declaration order.
    pub families: Vec<ResolvedFamily>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a schema.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            families: schema
                .families
                .iter()
                .map(ResolvedFamily::from_family)
                .collect(),
        }
    }

    /// Gets a resolved family by name.
    #[must_use]
    pub fn get_family(&self, name: &str) -> Option<&ResolvedFamily> {
        self.families.iter().find(|f| f.name == name)
    }
}

/// Resolved family information.
#[derive(Debug, Clone)]
pub struct ResolvedFamily {
    /// Family (base class) name.
    pub name: String,
    /// Visitor class name.
    pub visitor_name: String,
    /// Parameter name used by visitor methods.
    pub parameter_name: String,
    /// Output unit name.
    pub output_unit: String,
    /// Verbatim import lines.
    pub imports: Vec<String>,
    /// Resolved variants in declaration order.
    pub variants: Vec<ResolvedVariant>,
}

impl ResolvedFamily {
    /// Creates a resolved family from a family definition.
    #[must_use]
    pub fn from_family(family: &Family) -> Self {
        Self {
            name: family.name.clone(),
            visitor_name: visitor_name(&family.name),
            parameter_name: parameter_name(&family.name),
            output_unit: family.output_unit.clone(),
            imports: family.imports.clone(),
            variants: family
                .variants
                .iter()
                .map(ResolvedVariant::from_variant)
                .collect(),
        }
    }

    /// Gets a resolved variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&ResolvedVariant> {
        self.variants.iter().find(|v| v.name == name)
    }
}

/// Resolved variant information.
#[derive(Debug, Clone)]
pub struct ResolvedVariant {
    /// Variant (class) name.
    pub name: String,
    /// Visitor method this variant dispatches to.
    pub method_name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl ResolvedVariant {
    /// Creates a resolved variant from a variant definition.
    #[must_use]
    pub fn from_variant(variant: &Variant) -> Self {
        Self {
            name: variant.name.clone(),
            method_name: dispatch_method_name(&variant.name),
            fields: variant.fields.clone(),
        }
    }

    /// Returns true if the variant has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::interpreter_schema;

    #[test]
    fn test_schema_ir_from_builtin() {
        let ir = SchemaIr::from_schema(&interpreter_schema());

        let names: Vec<_> = ir.families.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Expr", "Stmt"]);

        let expr = ir.get_family("Expr").unwrap();
        assert_eq!(expr.visitor_name, "ExprVisitor");
        assert_eq!(expr.parameter_name, "expr");
        assert_eq!(expr.output_unit, "expression.py");
        assert_eq!(expr.variants.len(), 10);
    }

    #[test]
    fn test_resolved_method_names() {
        let ir = SchemaIr::from_schema(&interpreter_schema());
        let stmt = ir.get_family("Stmt").unwrap();

        assert_eq!(stmt.get_variant("If").unwrap().method_name, "if_stmt");
        assert_eq!(stmt.get_variant("While").unwrap().method_name, "while_stmt");
        assert_eq!(stmt.get_variant("Break").unwrap().method_name, "break_stmt");
        assert_eq!(stmt.get_variant("Return").unwrap().method_name, "return_stmt");
        assert_eq!(stmt.get_variant("Let").unwrap().method_name, "let");
    }

    #[test]
    fn test_resolved_variant_keeps_field_order() {
        let variant = Variant::new("Function")
            .field("name", "Token")
            .field("params", "List[Token]")
            .field("body", "List[Stmt]");
        let resolved = ResolvedVariant::from_variant(&variant);

        let names: Vec<_> = resolved.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "params", "body"]);
        assert!(!resolved.is_empty());
        assert!(ResolvedVariant::from_variant(&Variant::new("Break")).is_empty());
    }
}
