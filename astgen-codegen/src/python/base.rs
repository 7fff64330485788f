//! Abstract base class generation.

use astgen_schema::ir::ResolvedFamily;

/// Generator for a family's imports and abstract base class.
pub struct BaseTypeGenerator<'a> {
    family: &'a ResolvedFamily,
}

impl<'a> BaseTypeGenerator<'a> {
    /// Creates a new base type generator.
    #[must_use]
    pub fn new(family: &'a ResolvedFamily) -> Self {
        Self { family }
    }

    /// Generates the import block followed by the base class.
    ///
    /// Calling the base class directly raises, naming the family, so only
    /// concrete variants can be dispatched.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let name = &self.family.name;

        output.push_str(&self.family.imports.join("\n"));
        output.push_str("\n\n\n");

        output.push_str(&format!("class {}:\n", name));
        output.push_str(&format!(
            "    def __call__(self, visitor: \"{}\") -> Any:\n",
            self.family.visitor_name
        ));
        output.push_str(&format!(
            "        raise RuntimeError(\"Expected {}\")\n\n",
            name
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::model::{Family, Variant};

    fn resolve(family: &Family) -> ResolvedFamily {
        ResolvedFamily::from_family(family)
    }

    #[test]
    fn test_generate_base_class() {
        let family = resolve(
            &Family::new("Expr", "expression.py")
                .import("from typing import Any, List")
                .import("")
                .import("from token_type import Token")
                .variant(Variant::new("Literal").field("value", "Any")),
        );
        let output = BaseTypeGenerator::new(&family).generate();

        assert_eq!(
            output,
            "from typing import Any, List\n\
             \n\
             from token_type import Token\n\
             \n\
             \n\
             class Expr:\n    \
             def __call__(self, visitor: \"ExprVisitor\") -> Any:\n        \
             raise RuntimeError(\"Expected Expr\")\n\n"
        );
    }

    #[test]
    fn test_generate_base_class_without_imports() {
        let family = resolve(&Family::new("Stmt", "statement.py"));
        let output = BaseTypeGenerator::new(&family).generate();

        assert!(output.starts_with("\n\n\nclass Stmt:\n"));
        assert!(output.contains("raise RuntimeError(\"Expected Stmt\")"));
    }
}
