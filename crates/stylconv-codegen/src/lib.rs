//! stylconv Code Generator
//!
//! Converts a Stylus syntax tree into SCSS source text, keeping the original
//! line and column layout so the output lines up with the input.
//!
//! ```text
//! Root (Stylus tree) → convert() → SCSS text
//! ```
//!
//! Rendering never fails. Node kinds the generator does not know render as
//! empty text; only loading a tree from JSON can produce an error.

pub mod cursor;
pub mod scss;

use stylconv_ast::{AstError, Root};

pub use cursor::Cursor;
pub use scss::{Position, ScssRenderer};

/// Output dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Scss,
}

impl Target {
    /// Resolve a dialect name. SCSS is the only dialect; other names are
    /// accepted and fall back to it.
    pub fn from_name(name: &str) -> Self {
        if !name.eq_ignore_ascii_case("scss") {
            tracing::debug!(dialect = name, "unknown target, using scss");
        }
        Target::Scss
    }

    pub fn name(self) -> &'static str {
        match self {
            Target::Scss => "scss",
        }
    }
}

/// Conversion error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Tree(#[from] AstError),
}

/// Convert a tree into source text for `target`.
pub fn convert(root: &Root, target: Target) -> String {
    tracing::debug!(nodes = root.nodes.len(), dialect = target.name(), "converting tree");
    let output = match target {
        Target::Scss => ScssRenderer::new().render_root(root),
    };
    tracing::debug!(bytes = output.len(), "conversion finished");
    output
}

/// Load a tree from its JSON serialization and convert it.
pub fn convert_json(json: &str, target: Target) -> Result<String, ConvertError> {
    let root = Root::from_json(json)?;
    Ok(convert(&root, target))
}

/// Convert a JSON tree value. Values that are not objects are not trees and
/// are returned unchanged.
pub fn convert_value(
    value: serde_json::Value,
    target: Target,
) -> Result<serde_json::Value, ConvertError> {
    if !value.is_object() {
        return Ok(value);
    }
    let root = Root::from_value(value)?;
    Ok(serde_json::Value::String(convert(&root, target)))
}

/// Rename a Stylus variable to SCSS form: one leading `$` or `@` sigil is
/// replaced, and a `$` is always added.
pub fn to_scss_variable(name: &str) -> String {
    let bare = name
        .strip_prefix('$')
        .or_else(|| name.strip_prefix('@'))
        .unwrap_or(name);
    format!("${bare}")
}

/// Format a number the way it reads in a stylesheet: whole numbers have no
/// fractional part and `-0` prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".into();
    }
    format!("{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn test_variable_from_at_sigil() {
        assert_eq!(to_scss_variable("@width"), "$width");
    }

    #[test]
    fn test_variable_from_dollar_sigil() {
        assert_eq!(to_scss_variable("$width"), "$width");
    }

    #[test]
    fn test_variable_without_sigil() {
        assert_eq!(to_scss_variable("width"), "$width");
    }

    #[test]
    fn test_variable_inner_sigil_kept() {
        assert_eq!(to_scss_variable("a$b"), "$a$b");
        assert_eq!(to_scss_variable("$$b"), "$$b");
    }

    #[test]
    fn test_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_number_beyond_integer_range() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-1e20), "-100000000000000000000");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_number_float() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.25), "1.25");
    }

    #[test]
    fn test_target_names() {
        assert_eq!(Target::from_name("scss"), Target::Scss);
        assert_eq!(Target::from_name("SCSS"), Target::Scss);
        assert_eq!(Target::from_name("less"), Target::Scss);
        assert_eq!(Target::default().name(), "scss");
    }

    // =========================================================================
    // Integration: convert()
    // =========================================================================

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert(&Root::default(), Target::Scss), "");
    }

    #[test]
    fn test_convert_json_stylesheet() {
        // @import 'base'
        //
        // @width = 10px
        //
        // a
        //   color red
        let json = r#"{
            "__type": "Root",
            "nodes": [
                {
                    "__type": "Import", "lineno": 1, "column": 1,
                    "path": { "__type": "Expression", "nodes": [
                        { "__type": "String", "val": "base", "quote": "'" }
                    ] }
                },
                {
                    "__type": "Ident", "name": "@width", "lineno": 3, "column": 1,
                    "val": { "__type": "Expression", "nodes": [
                        { "__type": "Unit", "val": 10, "type": "px" }
                    ] }
                },
                {
                    "__type": "Group", "lineno": 5, "column": 1,
                    "nodes": [{ "__type": "Selector", "lineno": 5, "column": 1,
                        "segments": [{ "__type": "Literal", "val": "a" }] }],
                    "block": { "__type": "Block", "nodes": [
                        { "__type": "Property", "lineno": 6, "column": 3,
                          "segments": [{ "__type": "Ident", "name": "color", "val": { "__type": "Null" } }],
                          "expr": { "__type": "Expression", "nodes": [
                              { "__type": "Ident", "name": "red", "val": { "__type": "Null" } }
                          ] } }
                    ] }
                }
            ]
        }"#;

        let output = convert_json(json, Target::Scss).unwrap();
        assert_eq!(output, "@import 'base';\n\n$width = 10px;\n\na {\n  color: red;\n}");
    }

    #[test]
    fn test_convert_json_error() {
        let err = convert_json("{ \"nodes\": 3 }", Target::Scss).unwrap_err();
        let ConvertError::Tree(tree) = &err;
        assert_eq!(tree.line, 1);
        assert!(err.to_string().starts_with("Tree error"));
    }

    #[test]
    fn test_convert_value_passthrough() {
        assert_eq!(convert_value(json!(42), Target::Scss).unwrap(), json!(42));
        assert_eq!(convert_value(json!(null), Target::Scss).unwrap(), json!(null));
        assert_eq!(
            convert_value(json!("already scss"), Target::Scss).unwrap(),
            json!("already scss")
        );
    }

    #[test]
    fn test_convert_value_tree() {
        let tree = json!({
            "__type": "Root",
            "nodes": [{ "__type": "Ident", "name": "gap", "lineno": 1,
                        "val": { "__type": "Unit", "val": 4, "type": "px" } }]
        });
        assert_eq!(convert_value(tree, Target::Scss).unwrap(), json!("$gap = 4px;"));
    }

    #[test]
    fn test_multiple_converts() {
        // Verify no state leakage between conversions
        let late = r#"{ "nodes": [{ "__type": "Ident", "name": "a", "lineno": 4,
                        "val": { "__type": "Unit", "val": 1 } }] }"#;
        let first = convert_json(late, Target::Scss).unwrap();
        let second = convert_json(late, Target::Scss).unwrap();
        assert_eq!(first, "\n\n\n$a = 1;");
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_converts() {
        let json = r#"{ "nodes": [{ "__type": "Ident", "name": "a", "lineno": 2,
                        "val": { "__type": "Unit", "val": 1 } }] }"#;
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || convert_json(json, Target::Scss).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "\n$a = 1;");
        }
    }
}
