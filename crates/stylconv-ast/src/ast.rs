//! Syntax tree for Stylus documents.
//!
//! Mirrors the shape of the Stylus parser's `toJSON()` output: every node is
//! an object tagged by `__type`, positions are `lineno`/`column`, and children
//! live in `nodes` or `segments`. Fields the converter never reads (`filename`,
//! `scope`, `mixin`, ...) are ignored on load.
//!
//! A `line` or `column` of `0` means the node carried no recorded position.

use serde::Deserialize;

/// A complete Stylus document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// A node in the syntax tree, discriminated by its `__type` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__type")]
pub enum Node {
    /// `@import 'path'`
    Import(Import),

    /// One selector of a rule set.
    Selector(Selector),

    /// A rule set: selectors plus their block.
    Group(Group),

    /// A CSS property declaration: `color red`
    Property(Property),

    /// A name, optionally bound to a value (`width = 10px`, `add(a, b)`).
    Ident(Ident),

    /// A sequence of value nodes.
    Expression(Expression),

    /// A function or mixin call: `darken(red, 10%)`
    Call(Call),

    /// Call arguments.
    Arguments(Arguments),

    /// Function or mixin parameters.
    Params(Arguments),

    /// Raw text. Stylus `String` nodes carry the same payload.
    #[serde(alias = "String")]
    Literal(Literal),

    /// A number with an optional unit: `10px`
    Unit(Unit),

    /// `true` / `false`
    Boolean(Boolean),

    /// A color literal: `#fff`, `rgba(0, 0, 0, .5)`
    #[serde(rename = "RGBA")]
    Color(Color),

    /// Binary operation: `a + b`
    BinOp(BinOp),

    /// Function or mixin definition.
    Function(Function),

    /// `if` / `else if` / `else`
    If(If),

    /// An indented body.
    Block(Block),

    /// The absent-value marker.
    Null,

    /// Any node kind this crate does not model.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// True for `Property` nodes.
    pub fn is_property(&self) -> bool {
        matches!(self, Node::Property(_))
    }

    /// True for `Selector` nodes.
    pub fn is_selector(&self) -> bool {
        matches!(self, Node::Selector(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Import {
    #[serde(default)]
    pub path: Expression,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Selector {
    #[serde(default)]
    pub segments: Vec<Node>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Group {
    /// Normally a single `Selector`.
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub block: Block,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Property {
    /// Name segments; interpolated names have more than one.
    #[serde(default)]
    pub segments: Vec<Node>,
    #[serde(default)]
    pub expr: Expression,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ident {
    pub name: String,
    /// The bound value. Stylus serializes "unbound" as a `Null` node.
    #[serde(default)]
    pub val: Option<Box<Node>>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Expression {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Arguments,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub val: Option<String>,
    /// Quote character of a string literal (`'` or `"`).
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

impl Literal {
    pub fn new(val: impl Into<String>) -> Self {
        Self {
            val: Some(val.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Unit {
    pub val: f64,
    #[serde(rename = "type", default)]
    pub unit: Option<String>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Boolean {
    pub val: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Color {
    /// The color exactly as written in the source.
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinOp {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub params: Arguments,
    #[serde(default)]
    pub block: Block,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct If {
    #[serde(default)]
    pub cond: Expression,
    #[serde(default)]
    pub block: Block,
    /// `else if` branches are nested `If` nodes, a trailing `else` is a `Block`.
    #[serde(default)]
    pub elses: Vec<Node>,
    #[serde(rename = "lineno", default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}
