//! Main code generator.
//!
//! The generator turns each resolved family into one output unit: base
//! class, visitor, then every variant class. Families are independent, so
//! they are rendered in parallel; the result keeps declaration order.

use crate::error::CodegenError;
use crate::python::{BaseTypeGenerator, VariantGenerator, VisitorGenerator};
use crate::sink::OutputSink;
use astgen_schema::ir::{ResolvedFamily, SchemaIr};
use rayon::prelude::*;

/// The complete generated text of one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Family the unit was generated from.
    pub family: String,
    /// Output unit (file name) to write to.
    pub output_unit: String,
    /// Generated source, terminated by exactly one newline.
    pub contents: String,
}

/// Main code generator for AST families.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given schema IR.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates every family, in schema order.
    #[must_use]
    pub fn generate(&self) -> Vec<GeneratedUnit> {
        self.ir
            .families
            .par_iter()
            .map(|family| self.generate_family(family))
            .collect()
    }

    /// Generates the output unit for one family.
    #[must_use]
    pub fn generate_family(&self, family: &ResolvedFamily) -> GeneratedUnit {
        tracing::debug!(
            "Generating family {} ({} variants) into {}",
            family.name,
            family.variants.len(),
            family.output_unit
        );
        if family.variants.is_empty() {
            tracing::warn!("Family {} has no variants", family.name);
        }

        let mut output = String::new();
        output.push_str(&BaseTypeGenerator::new(family).generate());
        output.push_str(&VisitorGenerator::new(family).generate());
        output.push_str(&VariantGenerator::new(family).generate());

        let mut contents = output.trim().to_string();
        contents.push('\n');

        GeneratedUnit {
            family: family.name.clone(),
            output_unit: family.output_unit.clone(),
            contents,
        }
    }

    /// Generates every family and hands each unit to `sink`.
    ///
    /// All units are rendered before the first hand-off. Returns the number
    /// of units written.
    ///
    /// # Errors
    /// Returns `CodegenError::Sink` for the first unit the sink rejects.
    pub fn write_all(&self, sink: &mut dyn OutputSink) -> Result<usize, CodegenError> {
        let units = self.generate();

        for unit in &units {
            sink.write_unit(unit)
                .map_err(|e| CodegenError::sink(&unit.output_unit, e))?;
        }

        Ok(units.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use astgen_schema::builtin::interpreter_schema;
    use astgen_schema::model::{Family, Schema, Variant};
    use std::io;

    fn generate(schema: &Schema) -> Vec<GeneratedUnit> {
        let ir = SchemaIr::from_schema(schema);
        Generator::new(&ir).generate()
    }

    /// Returns the visitor method `class`'s `__call__` dispatches to.
    fn dispatch_target(contents: &str, class: &str) -> String {
        let start = contents.find(&format!("class {}(", class)).unwrap();
        let rest = &contents[start..];
        let call = rest.find("return visitor.").unwrap() + "return visitor.".len();
        let end = rest[call..].find('(').unwrap();
        rest[call..call + end].to_string()
    }

    #[test]
    fn test_generate_literal_end_to_end() {
        let schema = Schema::new().family(
            Family::new("Expr", "expression.py")
                .import("from typing import Any")
                .variant(Variant::new("Literal").field("value", "Any")),
        );
        let units = generate(&schema);

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].output_unit, "expression.py");
        assert_eq!(
            units[0].contents,
            r#"from typing import Any


class Expr:
    def __call__(self, visitor: "ExprVisitor") -> Any:
        raise RuntimeError("Expected Expr")


class ExprVisitor:
    @staticmethod
    def throw():
        raise Exception("Unimplemented Expr Visitor")

    # pylint: disable=unused-argument
    def literal(self, expr: "Literal") -> Any:
        ExprVisitor.throw()

    # pylint: enable=unused-argument


class Literal(Expr):
    value: Any

    def __init__(self, value: Any):
        self.value = value

    def __call__(self, visitor: ExprVisitor) -> Any:
        return visitor.literal(self)
"#
        );
    }

    #[test]
    fn test_generate_if_and_break_statements() {
        let units = generate(&interpreter_schema());
        let stmt = units.iter().find(|u| u.family == "Stmt").unwrap();

        assert!(stmt.contents.contains("    def if_stmt(self, stmt: \"If\") -> Any:\n"));
        assert!(!stmt.contents.contains("def if("));
        assert_eq!(dispatch_target(&stmt.contents, "If"), "if_stmt");

        assert!(stmt.contents.contains(
            "class Break(Stmt):\n    def __init__(self):\n        pass\n"
        ));
        assert_eq!(dispatch_target(&stmt.contents, "Break"), "break_stmt");
    }

    #[test]
    fn test_stub_names_match_dispatch_targets() {
        let schema = interpreter_schema();
        let ir = SchemaIr::from_schema(&schema);
        let units = Generator::new(&ir).generate();

        for (family, unit) in ir.families.iter().zip(&units) {
            for variant in &family.variants {
                let target = dispatch_target(&unit.contents, &variant.name);
                let stub = format!(
                    "    def {}(self, {}: \"{}\") -> Any:",
                    target, family.parameter_name, variant.name
                );
                assert!(
                    unit.contents.contains(&stub),
                    "no visitor stub for {}.{}",
                    family.name,
                    variant.name
                );
            }
        }
    }

    #[test]
    fn test_generate_preserves_family_order() {
        let units = generate(&interpreter_schema());
        let order: Vec<_> = units.iter().map(|u| u.output_unit.as_str()).collect();
        assert_eq!(order, vec!["expression.py", "statement.py"]);
    }

    #[test]
    fn test_generate_section_order() {
        let units = generate(&interpreter_schema());
        let expr = &units[0].contents;

        let base = expr.find("class Expr:").unwrap();
        let visitor = expr.find("class ExprVisitor:").unwrap();
        let binary = expr.find("class Binary(Expr):").unwrap();
        let index_set = expr.find("class IndexSet(Expr):").unwrap();
        assert!(base < visitor && visitor < binary && binary < index_set);
    }

    #[test]
    fn test_generate_single_trailing_newline() {
        for unit in generate(&interpreter_schema()) {
            assert!(unit.contents.ends_with(")\n"));
            assert!(!unit.contents.ends_with("\n\n"));
            assert!(!unit.contents.starts_with('\n'));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let schema = interpreter_schema();
        assert_eq!(generate(&schema), generate(&schema));
    }

    #[test]
    fn test_generate_empty_family() {
        let schema = Schema::new().family(Family::new("Decl", "declaration.py"));
        let units = generate(&schema);

        assert!(units[0].contents.starts_with("class Decl:\n"));
        assert!(units[0].contents.ends_with("# pylint: enable=unused-argument\n"));
    }

    #[test]
    fn test_write_all_to_memory() {
        let ir = SchemaIr::from_schema(&interpreter_schema());
        let mut sink = MemorySink::new();

        let written = Generator::new(&ir).write_all(&mut sink).unwrap();

        assert_eq!(written, 2);
        assert_eq!(sink.units().len(), 2);
        assert_eq!(sink.units()[1].family, "Stmt");
    }

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_unit(&mut self, _unit: &GeneratedUnit) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_write_all_reports_sink_failure() {
        let ir = SchemaIr::from_schema(&interpreter_schema());
        let err = Generator::new(&ir).write_all(&mut FailingSink).unwrap_err();

        assert!(matches!(err, CodegenError::Sink { ref unit, .. } if unit == "expression.py"));
        assert!(err.to_string().contains("expression.py"));
    }
}
