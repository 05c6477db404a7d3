use crate::domain::{entities::TableSpec, error::DomainError};

/// Words that cannot be used as a variable name in the generated JavaScript.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Parameter names of the generated service methods and handlers. The
/// lower-cased table name is bound as a local next to them.
const GENERATED_PARAMS: &[&str] = &["data", "id", "req", "res"];

/// Centralized domain validation.
///
/// All identifier rules live here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_table(table: &TableSpec) -> Result<(), DomainError> {
        table.validate()
    }

    /// Check that `name` is a plain identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
    ///
    /// Returns the reason on failure so callers can wrap it in the error
    /// variant that fits their context.
    pub fn check_identifier(name: &str) -> Result<(), String> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err("identifier cannot be empty".into());
        };

        if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
            return Err(format!("cannot start with '{first}'"));
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
            return Err(format!("contains invalid character '{bad}'"));
        }

        Ok(())
    }

    pub fn is_reserved(word: &str) -> bool {
        RESERVED_WORDS.contains(&word)
    }

    /// Whether `word` would shadow a parameter of a generated method.
    pub fn shadows_parameter(word: &str) -> bool {
        GENERATED_PARAMS.contains(&word)
    }
}
