//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Element appearing outside of the context that allows it.
    #[error("unexpected element '{element}' in context '{context}'")]
    UnexpectedElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Attribute value with a malformed escape sequence.
    #[error("invalid escape in attribute '{attribute}': {source}")]
    Escape {
        /// Attribute name.
        attribute: String,
        /// Underlying error.
        #[source]
        source: quick_xml::escape::EscapeError,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
///
/// Every variant carries enough names to locate the defect in the schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A family was declared without a name.
    #[error("family #{index} has an empty name")]
    EmptyFamilyName {
        /// Position of the family in declaration order.
        index: usize,
    },

    /// Two families share a name.
    #[error("duplicate family '{family}'")]
    DuplicateFamily {
        /// Family name.
        family: String,
    },

    /// A family has no output unit to be written to.
    #[error("family '{family}' has an empty output unit name")]
    EmptyOutputUnit {
        /// Family name.
        family: String,
    },

    /// An output unit would be written outside the output directory.
    #[error("family '{family}' has output unit '{unit}' outside the output directory")]
    InvalidOutputUnit {
        /// Family name.
        family: String,
        /// Output unit name.
        unit: String,
    },

    /// Two families would be written to the same output unit.
    #[error("output unit '{unit}' is claimed by both '{first}' and '{second}'")]
    DuplicateOutputUnit {
        /// Output unit name.
        unit: String,
        /// Family that claimed the unit first.
        first: String,
        /// Family that claimed it again.
        second: String,
    },

    /// Two variants share a name within a family.
    #[error("duplicate variant '{variant}' in family '{family}'")]
    DuplicateVariant {
        /// Family name.
        family: String,
        /// Variant name.
        variant: String,
    },

    /// Two variants map onto the same visitor method.
    #[error(
        "variants '{first}' and '{second}' in family '{family}' both dispatch to method '{method}'"
    )]
    MethodCollision {
        /// Family name.
        family: String,
        /// Colliding method name.
        method: String,
        /// First variant.
        first: String,
        /// Second variant.
        second: String,
    },

    /// Two fields share a name within a variant.
    #[error("duplicate field '{field}' in variant '{family}.{variant}'")]
    DuplicateField {
        /// Family name.
        family: String,
        /// Variant name.
        variant: String,
        /// Field name.
        field: String,
    },

    /// A field was declared without a type descriptor.
    #[error("field '{field}' in variant '{family}.{variant}' has an empty type")]
    EmptyFieldType {
        /// Family name.
        family: String,
        /// Variant name.
        variant: String,
        /// Field name.
        field: String,
    },

    /// A name is not usable as an identifier in generated code.
    #[error("{context}: '{name}' is not a valid identifier")]
    InvalidIdentifier {
        /// Where the name was found.
        context: String,
        /// Offending name.
        name: String,
    },

    /// A generated name would shadow a reserved word of the output language.
    #[error("{context}: '{name}' is a reserved word in generated code")]
    ReservedIdentifier {
        /// Where the name was found.
        context: String,
        /// Offending name.
        name: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unexpected element error.
    pub fn unexpected_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnexpectedElement {
            element: element.into(),
            context: context.into(),
        }
    }
}

impl SchemaError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            context: context.into(),
            name: name.into(),
        }
    }

    /// Creates a reserved identifier error.
    pub fn reserved_identifier(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ReservedIdentifier {
            context: context.into(),
            name: name.into(),
        }
    }
}
