//! Naming rules shared by every emitter.
//!
//! The dispatch method of a variant is its lowercased name, unless that
//! collides with a flow-control keyword of the output language, in which
//! case a fixed replacement is used instead.

/// Lowercased variant names that must not be used verbatim as method names.
///
/// Extend this table whenever a family introduces a variant whose lowercase
/// name is a keyword of the output language.
pub const RESERVED_METHOD_NAMES: &[(&str, &str)] = &[
    ("if", "if_stmt"),
    ("while", "while_stmt"),
    ("break", "break_stmt"),
    ("return", "return_stmt"),
];

/// Hard keywords of the output language (Python 3).
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Members every generated visitor defines besides its dispatch stubs.
pub const VISITOR_MEMBERS: &[&str] = &["throw"];

/// Returns the visitor method name a variant dispatches to.
///
/// # Examples
/// ```
/// use astgen_schema::naming::dispatch_method_name;
///
/// assert_eq!(dispatch_method_name("IndexSet"), "indexset");
/// assert_eq!(dispatch_method_name("While"), "while_stmt");
/// ```
#[must_use]
pub fn dispatch_method_name(variant: &str) -> String {
    let lowered = variant.to_lowercase();
    RESERVED_METHOD_NAMES
        .iter()
        .find(|(reserved, _)| *reserved == lowered)
        .map_or(lowered, |(_, replacement)| (*replacement).to_string())
}

/// Returns the visitor class name for a family.
#[must_use]
pub fn visitor_name(family: &str) -> String {
    format!("{}Visitor", family)
}

/// Returns the parameter name used by visitor methods of a family.
#[must_use]
pub fn parameter_name(family: &str) -> String {
    family.to_lowercase()
}

/// Returns true if `name` is an ASCII identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `name` is a keyword of the output language.
#[must_use]
pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Returns true if a dispatch method called `name` would replace a member
/// the generated visitor relies on (`throw`, or any `__dunder__` method).
#[must_use]
pub fn is_visitor_member(name: &str) -> bool {
    VISITOR_MEMBERS.contains(&name)
        || (name.len() > 4 && name.starts_with("__") && name.ends_with("__"))
}
