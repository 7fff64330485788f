//! Visitor class generation.

use astgen_schema::ir::{ResolvedFamily, ResolvedVariant};

/// Generator for a family's visitor class.
///
/// Every variant gets a stub that raises; consumers subclass the visitor and
/// override the methods they handle.
pub struct VisitorGenerator<'a> {
    family: &'a ResolvedFamily,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(family: &'a ResolvedFamily) -> Self {
        Self { family }
    }

    /// Generates the visitor class.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let visitor = &self.family.visitor_name;

        output.push_str(&format!("\nclass {}:\n", visitor));
        output.push_str("    @staticmethod\n");
        output.push_str("    def throw():\n");
        output.push_str(&format!(
            "        raise Exception(\"Unimplemented {} Visitor\")\n\n",
            self.family.name
        ));

        // Stubs never read their argument.
        output.push_str("    # pylint: disable=unused-argument\n");
        let methods: Vec<String> = self
            .family
            .variants
            .iter()
            .map(|variant| self.generate_method(variant))
            .collect();
        output.push_str(&methods.join("\n\n"));
        output.push_str("\n\n    # pylint: enable=unused-argument\n\n");

        output
    }

    /// Generates the stub method for one variant.
    fn generate_method(&self, variant: &ResolvedVariant) -> String {
        format!(
            "    def {}(self, {}: \"{}\") -> Any:\n        {}.throw()",
            variant.method_name, self.family.parameter_name, variant.name, self.family.visitor_name
        )
    }
}
