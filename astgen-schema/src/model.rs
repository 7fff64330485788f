//! Schema model for AST node families.
//!
//! A [`Schema`] is an ordered list of [`Family`] definitions. Each family
//! owns an ordered list of [`Variant`]s and each variant an ordered list of
//! [`Field`]s. Declaration order is significant everywhere: it fixes the order
//! of generated output units, classes, field declarations and constructor
//! parameters.

/// Complete schema: every node family to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Families in declaration order.
    pub families: Vec<Family>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family to the schema.
    pub fn add_family(&mut self, family: Family) {
        self.families.push(family);
    }

    /// Adds a family, builder style.
    #[must_use]
    pub fn family(mut self, family: Family) -> Self {
        self.add_family(family);
        self
    }

    /// Looks up a family by name.
    #[must_use]
    pub fn get_family(&self, name: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Returns true if a family with the given name exists.
    #[must_use]
    pub fn has_family(&self, name: &str) -> bool {
        self.get_family(name).is_some()
    }

    /// Returns the family names in declaration order.
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|f| f.name.as_str())
    }

    /// Returns a schema holding only the named families, in this schema's order.
    #[must_use]
    pub fn retain_families(&self, names: &[&str]) -> Self {
        Self {
            families: self
                .families
                .iter()
                .filter(|f| names.contains(&f.name.as_str()))
                .cloned()
                .collect(),
        }
    }
}

/// A node family: one abstract base, one visitor, many variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Family name, also the name of the generated base class.
    pub name: String,
    /// Output unit (file name) the family is written to.
    pub output_unit: String,
    /// Import lines emitted verbatim at the top of the unit.
    ///
    /// Empty entries render as blank lines.
    pub imports: Vec<String>,
    /// Variants in declaration order.
    pub variants: Vec<Variant>,
}

impl Family {
    /// Creates a new family definition.
    #[must_use]
    pub fn new(name: impl Into<String>, output_unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_unit: output_unit.into(),
            imports: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Adds an import line.
    pub fn add_import(&mut self, line: impl Into<String>) {
        self.imports.push(line.into());
    }

    /// Adds a variant.
    pub fn add_variant(&mut self, variant: Variant) {
        self.variants.push(variant);
    }

    /// Adds an import line, builder style.
    #[must_use]
    pub fn import(mut self, line: impl Into<String>) -> Self {
        self.add_import(line);
        self
    }

    /// Adds a variant, builder style.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.add_variant(variant);
        self
    }

    /// Looks up a variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns true if the family has no variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// One concrete node type of a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant name, also the generated class name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Variant {
    /// Creates a variant with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.add_field(Field::new(name, type_name));
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the variant has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A named, typed member of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Type descriptor in the output language's syntax, copied verbatim.
    pub type_name: String,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}
