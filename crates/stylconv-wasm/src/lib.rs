//! WASM bindings for the stylconv converter.
//!
//! Exposes `convert()` to JavaScript via wasm-bindgen. The tree can be passed
//! as the JSON text of a Stylus parse, or as the plain object its `toJSON()`
//! produces; anything else is handed back untouched.

use stylconv_ast::Root;
use stylconv_codegen::Target;
use wasm_bindgen::prelude::*;

/// Convert a Stylus syntax tree to SCSS.
///
/// `tree` is either a JSON string or a plain JS object tree. Other values
/// (numbers, `null`, ...) are returned as given. `target` names the output
/// dialect and defaults to `"scss"`.
/// Throws a JS error if the tree cannot be loaded.
#[wasm_bindgen]
pub fn convert(tree: JsValue, target: Option<String>) -> Result<JsValue, JsError> {
    let target = target.as_deref().map(Target::from_name).unwrap_or_default();

    if let Some(json) = tree.as_string() {
        let output = convert_json(&json, target)?;
        return Ok(output.into());
    }
    if !tree.is_object() {
        return Ok(tree);
    }

    let root: Root =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(stylconv_codegen::convert(&root, target).into())
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn convert_json(json: &str, target: Target) -> Result<String, JsError> {
    stylconv_codegen::convert_json(json, target).map_err(|e| JsError::new(&e.to_string()))
}
