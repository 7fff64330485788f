//! Schema validation utilities.
//!
//! Validation runs before any emission so that a malformed family never
//! produces a partial output unit.

use crate::error::SchemaError;
use crate::model::{Family, Schema, Variant};
use crate::naming::{dispatch_method_name, is_identifier, is_python_keyword, is_visitor_member};
use std::path::{Component, Path};
use std::collections::HashMap;
use std::collections::HashSet;

/// Validates a schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_units: HashMap<&str, &str> = HashMap::new();

    for (index, family) in schema.families.iter().enumerate() {
        if family.name.is_empty() {
            return Err(SchemaError::EmptyFamilyName { index });
        }

        if !seen_names.insert(family.name.as_str()) {
            return Err(SchemaError::DuplicateFamily {
                family: family.name.clone(),
            });
        }

        if let Some(first) = seen_units.insert(&family.output_unit, &family.name) {
            return Err(SchemaError::DuplicateOutputUnit {
                unit: family.output_unit.clone(),
                first: first.to_string(),
                second: family.name.clone(),
            });
        }

        validate_family(family)?;
    }

    Ok(())
}

/// Validates a single family definition.
///
/// # Errors
/// Returns `SchemaError` naming the family (and variant, if any) at fault.
pub fn validate_family(family: &Family) -> Result<(), SchemaError> {
    if family.name.is_empty() {
        return Err(SchemaError::EmptyFamilyName { index: 0 });
    }

    let context = format!("family '{}'", family.name);
    if !is_identifier(&family.name) {
        return Err(SchemaError::invalid_identifier(context, &family.name));
    }
    if is_python_keyword(&family.name) {
        return Err(SchemaError::reserved_identifier(context, &family.name));
    }

    if family.output_unit.trim().is_empty() {
        return Err(SchemaError::EmptyOutputUnit {
            family: family.name.clone(),
        });
    }

    // Units are joined onto the output directory and must stay inside it.
    let unit = Path::new(&family.output_unit);
    if unit.is_absolute()
        || unit
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(SchemaError::InvalidOutputUnit {
            family: family.name.clone(),
            unit: family.output_unit.clone(),
        });
    }

    let mut seen_variants = HashSet::new();
    let mut seen_methods: HashMap<String, &str> = HashMap::new();

    for variant in &family.variants {
        if !seen_variants.insert(variant.name.as_str()) {
            return Err(SchemaError::DuplicateVariant {
                family: family.name.clone(),
                variant: variant.name.clone(),
            });
        }

        validate_variant(&family.name, variant)?;

        let method = dispatch_method_name(&variant.name);
        if is_python_keyword(&method) {
            return Err(SchemaError::reserved_identifier(
                format!("dispatch method of '{}.{}'", family.name, variant.name),
                method,
            ));
        }

        if is_visitor_member(&method) {
            return Err(SchemaError::reserved_identifier(
                format!("dispatch method of '{}.{}'", family.name, variant.name),
                method,
            ));
        }

        if let Some(first) = seen_methods.get(&method) {
            return Err(SchemaError::MethodCollision {
                family: family.name.clone(),
                method,
                first: (*first).to_string(),
                second: variant.name.clone(),
            });
        }
        seen_methods.insert(method, &variant.name);
    }

    Ok(())
}

/// Validates a variant and its fields.
fn validate_variant(family: &str, variant: &Variant) -> Result<(), SchemaError> {
    let context = format!("variant '{}.{}'", family, variant.name);
    if !is_identifier(&variant.name) {
        return Err(SchemaError::invalid_identifier(context, &variant.name));
    }
    if is_python_keyword(&variant.name) {
        return Err(SchemaError::reserved_identifier(context, &variant.name));
    }

    let mut seen_fields = HashSet::new();

    for field in &variant.fields {
        if !is_identifier(&field.name) {
            return Err(SchemaError::invalid_identifier(&context, &field.name));
        }

        // `self` is the receiver of every generated method.
        if is_python_keyword(&field.name) || field.name == "self" {
            return Err(SchemaError::reserved_identifier(&context, &field.name));
        }

        if !seen_fields.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                family: family.to_string(),
                variant: variant.name.clone(),
                field: field.name.clone(),
            });
        }

        if field.type_name.trim().is_empty() {
            return Err(SchemaError::EmptyFieldType {
                family: family.to_string(),
                variant: variant.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::interpreter_schema;

    fn expr_family() -> Family {
        Family::new("Expr", "expression.py")
            .variant(Variant::new("Literal").field("value", "Any"))
            .variant(Variant::new("Grouping").field("expr", "Expr"))
    }

    #[test]
    fn test_validate_builtin_schema() {
        assert!(validate_schema(&interpreter_schema()).is_ok());
    }

    #[test]
    fn test_validate_empty_schema() {
        assert!(validate_schema(&Schema::new()).is_ok());
    }

    #[test]
    fn test_validate_empty_family_name() {
        let schema = Schema::new()
            .family(expr_family())
            .family(Family::new("", "statement.py"));
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::EmptyFamilyName { index: 1 })
        );
    }

    #[test]
    fn test_validate_duplicate_family() {
        let schema = Schema::new()
            .family(expr_family())
            .family(Family::new("Expr", "other.py"));
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::DuplicateFamily {
                family: "Expr".to_string()
            })
        );
    }

    #[test]
    fn test_validate_shared_output_unit() {
        let schema = Schema::new()
            .family(expr_family())
            .family(Family::new("Stmt", "expression.py"));
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::DuplicateOutputUnit {
                unit: "expression.py".to_string(),
                first: "Expr".to_string(),
                second: "Stmt".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_empty_output_unit() {
        let family = Family::new("Expr", "  ");
        assert!(matches!(
            validate_family(&family),
            Err(SchemaError::EmptyOutputUnit { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_variant() {
        let family = expr_family().variant(Variant::new("Literal"));
        assert_eq!(
            validate_family(&family),
            Err(SchemaError::DuplicateVariant {
                family: "Expr".to_string(),
                variant: "Literal".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_case_insensitive_method_collision() {
        let family = expr_family().variant(Variant::new("LITERAL"));
        assert_eq!(
            validate_family(&family),
            Err(SchemaError::MethodCollision {
                family: "Expr".to_string(),
                method: "literal".to_string(),
                first: "Literal".to_string(),
                second: "LITERAL".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_collision_after_substitution() {
        let family = Family::new("Stmt", "statement.py")
            .variant(Variant::new("If"))
            .variant(Variant::new("If_Stmt"));
        assert!(matches!(
            validate_family(&family),
            Err(SchemaError::MethodCollision { method, .. }) if method == "if_stmt"
        ));
    }

    #[test]
    fn test_validate_unmapped_keyword_variant() {
        let family = Family::new("Stmt", "statement.py").variant(Variant::new("For"));
        let err = validate_family(&family).unwrap_err();
        assert!(matches!(err, SchemaError::ReservedIdentifier { ref name, .. } if name == "for"));
        assert!(err.to_string().contains("Stmt.For"));
    }

    #[test]
    fn test_validate_visitor_member_collision() {
        let family = Family::new("Stmt", "statement.py")
            .variant(Variant::new("Throw").field("value", "Any"))
            .variant(Variant::new("Break"));
        let err = validate_family(&family).unwrap_err();
        assert!(matches!(err, SchemaError::ReservedIdentifier { ref name, .. } if name == "throw"));
        assert!(err.to_string().contains("Stmt.Throw"));

        let family = Family::new("Expr", "expression.py").variant(Variant::new("__Call__"));
        assert!(matches!(
            validate_family(&family),
            Err(SchemaError::ReservedIdentifier { ref name, .. }) if name == "__call__"
        ));
    }

    #[test]
    fn test_validate_output_unit_escaping_root() {
        for unit in ["/tmp/expression.py", "../expression.py", "nodes/../../x.py"] {
            let family = Family::new("Expr", unit);
            assert_eq!(
                validate_family(&family),
                Err(SchemaError::InvalidOutputUnit {
                    family: "Expr".to_string(),
                    unit: unit.to_string(),
                }),
                "unit '{}' accepted",
                unit
            );
        }

        let nested = Family::new("Expr", "nodes/expression.py");
        assert!(validate_family(&nested).is_ok());
    }

    #[test]
    fn test_validate_duplicate_field() {
        let family = Family::new("Stmt", "statement.py").variant(
            Variant::new("While")
                .field("while_test", "Expr")
                .field("while_test", "Stmt"),
        );
        assert_eq!(
            validate_family(&family),
            Err(SchemaError::DuplicateField {
                family: "Stmt".to_string(),
                variant: "While".to_string(),
                field: "while_test".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_bad_field_names() {
        for name in ["self", "lambda", "else-body", ""] {
            let family =
                Family::new("Expr", "expression.py").variant(Variant::new("Call").field(name, "Expr"));
            assert!(validate_family(&family).is_err(), "field '{}' accepted", name);
        }
    }

    #[test]
    fn test_validate_empty_field_type() {
        let family =
            Family::new("Expr", "expression.py").variant(Variant::new("Literal").field("value", ""));
        assert!(matches!(
            validate_family(&family),
            Err(SchemaError::EmptyFieldType { .. })
        ));
    }

    #[test]
    fn test_validate_family_without_variants() {
        assert!(validate_family(&Family::new("Decl", "declaration.py")).is_ok());
    }
}
