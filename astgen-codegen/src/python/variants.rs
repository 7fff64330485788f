//! Concrete variant class generation.

use astgen_schema::ir::{ResolvedFamily, ResolvedVariant};

/// Generator for the concrete classes of a family.
pub struct VariantGenerator<'a> {
    family: &'a ResolvedFamily,
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new variant generator.
    #[must_use]
    pub fn new(family: &'a ResolvedFamily) -> Self {
        Self { family }
    }

    /// Generates every variant class in declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for variant in &self.family.variants {
            output.push_str(&self.generate_variant(variant));
        }

        output
    }

    /// Generates one variant class.
    ///
    /// Field declarations, constructor parameters and constructor assignments
    /// all follow the declared field order.
    #[must_use]
    pub fn generate_variant(&self, variant: &ResolvedVariant) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\nclass {}({}):\n",
            variant.name, self.family.name
        ));

        if variant.is_empty() {
            output.push_str("    def __init__(self):\n");
            output.push_str("        pass\n\n");
        } else {
            for field in &variant.fields {
                output.push_str(&format!("    {}: {}\n", field.name, field.type_name));
            }
            output.push('\n');

            let params: Vec<String> = variant
                .fields
                .iter()
                .map(|field| format!("{}: {}", field.name, field.type_name))
                .collect();
            output.push_str(&format!(
                "    def __init__(self, {}):\n",
                params.join(", ")
            ));
            for field in &variant.fields {
                output.push_str(&format!("        self.{} = {}\n", field.name, field.name));
            }
            output.push('\n');
        }

        output.push_str(&self.generate_dispatch(variant));

        output
    }

    /// Generates the `__call__` method that hands the node to its visitor.
    fn generate_dispatch(&self, variant: &ResolvedVariant) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "    def __call__(self, visitor: {}) -> Any:\n",
            self.family.visitor_name
        ));
        output.push_str(&format!(
            "        return visitor.{}(self)\n\n",
            variant.method_name
        ));

        output
    }
}
