//! Stylus syntax tree
//!
//! Typed view of the tree the Stylus parser produces. The tree is loaded from
//! the parser's JSON dump (`JSON.stringify(parser.parse())`); this crate never
//! reads Stylus source text itself.
//!
//! # Example
//!
//! ```
//! use stylconv_ast::Root;
//!
//! let root = Root::from_json(r#"{ "__type": "Root", "nodes": [] }"#).unwrap();
//! assert!(root.nodes.is_empty());
//! ```

pub mod ast;

pub use ast::{Block, Expression, Node, Root};

/// Tree loading error with position information in the JSON input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Tree error at line {line}, column {column}: {message}")]
pub struct AstError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for AstError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

impl Root {
    /// Load a tree from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Root, AstError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a tree from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Root, AstError> {
        Ok(serde_json::from_value(value)?)
    }
}
