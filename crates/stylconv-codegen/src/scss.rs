//! SCSS code generator.
//!
//! Walks the Stylus tree and emits SCSS, restoring the braces, semicolons and
//! `@` keywords that Stylus leaves implicit. Whitespace between constructs is
//! rebuilt from the recorded source positions through a [`Cursor`], so the
//! output lines up with the input line for line.
//!
//! Node kinds without a renderer (`Null`, and anything loaded as
//! `Node::Unknown`) produce empty text rather than an error.

use crate::cursor::Cursor;
use crate::{format_number, to_scss_variable};
use stylconv_ast::ast::{
    Arguments, BinOp, Block, Call, Color, Expression, Function, Group, Ident, If, Import,
    Literal, Node, Property, Root, Selector, Unit,
};

/// Keyword that introduces the value of a statement-level expression inside
/// a function or mixin body.
const RETURN_KEYWORD: &str = "@return ";

/// Where a node is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Directly inside a block or at the top level.
    Statement,
    /// Inside another construct: property value, argument, operand.
    Value,
    /// The condition of an `@if` / `@else if`.
    Condition,
}

/// Which link of an `@if` chain is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Leading,
    ElseIf,
}

impl Branch {
    fn keyword(self) -> &'static str {
        match self {
            Branch::Leading => "@if ",
            Branch::ElseIf => " @else if ",
        }
    }
}

/// Renders one tree. Create a fresh renderer per conversion.
#[derive(Debug, Default)]
pub struct ScssRenderer {
    cursor: Cursor,
    return_keyword: &'static str,
}

impl ScssRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole document.
    pub fn render_root(&mut self, root: &Root) -> String {
        self.render_nodes(&root.nodes, Position::Statement)
    }

    /// Render a single node.
    pub fn render_node(&mut self, node: &Node, position: Position) -> String {
        match node {
            Node::Import(import) => self.render_import(import),
            Node::Selector(selector) => self.render_selector(selector),
            Node::Group(group) => self.render_group(group),
            Node::Property(property) => self.render_property(property),
            Node::Ident(ident) => self.render_ident(ident),
            Node::Expression(expr) => self.render_expression(expr, position),
            Node::Call(call) => self.render_call(call),
            Node::Arguments(args) | Node::Params(args) => self.render_arguments(args),
            Node::Literal(literal) => render_literal(literal),
            Node::Unit(unit) => render_unit(unit),
            Node::Boolean(boolean) => boolean.val.to_string(),
            Node::Color(color) => render_color(color),
            Node::BinOp(binop) => self.render_binop(binop),
            Node::Function(function) => self.render_function(function),
            Node::If(node) => self.render_if(node, Branch::Leading),
            Node::Block(block) => self.render_block(block, ""),
            Node::Null => String::new(),
            Node::Unknown => {
                tracing::trace!("dropping node of unsupported kind");
                String::new()
            }
        }
    }

    /// Render nodes in order, concatenated without separators.
    pub fn render_nodes(&mut self, nodes: &[Node], position: Position) -> String {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.render_node(node, position));
        }
        out
    }

    fn render_import(&mut self, import: &Import) -> String {
        let before = self.cursor.newlines_to(import.line);
        self.cursor.advance_line(import.line);

        let mut quote = "";
        let mut path = String::new();
        for segment in &import.path.nodes {
            match segment {
                Node::Literal(literal) => {
                    path.push_str(literal.val.as_deref().unwrap_or_default());
                    if quote.is_empty() {
                        quote = literal.quote.as_deref().unwrap_or_default();
                    }
                }
                other => path.push_str(&self.render_node(other, Position::Value)),
            }
        }

        format!("{before}@import {quote}{path}{quote};")
    }

    fn render_selector(&mut self, selector: &Selector) -> String {
        let before = self.cursor.move_to(selector.line, selector.column);
        self.cursor.advance_line(selector.line);
        before + &self.render_nodes(&selector.segments, Position::Value)
    }

    fn render_group(&mut self, group: &Group) -> String {
        let selector = self.render_nodes(&group.nodes, Position::Value);

        // Align the closing brace with the start of the selector line.
        let anchor = if group.nodes.iter().any(Node::is_selector) {
            selector.trim_start_matches('\n')
        } else {
            ""
        };
        let width = group.column.saturating_sub(anchor.chars().count());
        let block = self.render_block(&group.block, &" ".repeat(width));

        selector + &block
    }

    /// Wrap a block's statements in braces, closing on a new line indented
    /// by `closing_indent`.
    pub fn render_block(&mut self, block: &Block, closing_indent: &str) -> String {
        let inner = self.render_nodes(&block.nodes, Position::Statement);
        wrap_block(&inner, closing_indent)
    }

    fn render_property(&mut self, property: &Property) -> String {
        let before = self.cursor.move_to(property.line, property.column);
        self.cursor.advance_line(property.line);
        let name = self.render_nodes(&property.segments, Position::Value);
        let value = self.render_expression(&property.expr, Position::Value);
        format!("{before}{name}: {value};")
    }

    fn render_ident(&mut self, ident: &Ident) -> String {
        match ident.val.as_deref() {
            None | Some(Node::Null) => ident.name.clone(),
            Some(Node::Function(function)) => self.render_function(function),
            Some(value) => {
                let before = self.cursor.newlines_to(ident.line);
                self.cursor.advance_line(ident.line);
                let value = self.render_node(value, Position::Value);
                format!("{before}{} = {value};", to_scss_variable(&ident.name))
            }
        }
    }

    fn render_expression(&mut self, expr: &Expression, position: Position) -> String {
        let text = self.render_nodes(&expr.nodes, Position::Value);
        if position != Position::Statement || self.return_keyword.is_empty() {
            return text;
        }

        // Place the returned value, not the keyword, under the expression.
        let target = expr.column as i64 + 1 - text.chars().count() as i64;
        let pad = self.cursor.spaces_to(target);
        format!("\n{pad}{}{text}", self.return_keyword)
    }

    fn render_call(&mut self, call: &Call) -> String {
        let before = self.cursor.newlines_to(call.line);
        self.cursor.advance_line(call.line);
        let args = self.render_arguments(&call.args);
        format!("{before}{}({args});", call.name)
    }

    fn render_arguments(&mut self, args: &Arguments) -> String {
        let rendered: Vec<String> = args
            .nodes
            .iter()
            .map(|node| self.render_node(node, Position::Value))
            .collect();
        rendered.join(", ")
    }

    fn render_binop(&mut self, binop: &BinOp) -> String {
        let left = self.render_operand(&binop.left);
        let right = self.render_operand(&binop.right);
        format!("{left} {} {right}", binop.op)
    }

    /// Operands share the identifier path; anything that is not an
    /// identifier has no binding and renders as its plain value.
    fn render_operand(&mut self, node: &Node) -> String {
        match node {
            Node::Ident(ident) => self.render_ident(ident),
            other => self.render_node(other, Position::Value),
        }
    }

    fn render_if(&mut self, node: &If, branch: Branch) -> String {
        let cond = self.render_expression(&node.cond, Position::Condition);
        let width = node.column as i64 - (cond.chars().count() as i64 + 2);

        let mut before = String::new();
        if branch == Branch::Leading {
            before.push_str(&self.cursor.newlines_to(node.line));
            self.cursor.advance_line(node.line);
            before.push_str(&self.cursor.spaces_to(width));
        }

        let indent = self.cursor.spaces_to(width);
        let block = self.render_block(&node.block, &indent);

        let mut elses = String::new();
        for alternative in &node.elses {
            match alternative {
                Node::If(nested) => elses.push_str(&self.render_if(nested, Branch::ElseIf)),
                Node::Block(block) => {
                    elses.push_str(" @else");
                    elses.push_str(&self.render_block(block, &indent));
                }
                other => {
                    let inner = self.render_node(other, Position::Statement);
                    elses.push_str(" @else");
                    elses.push_str(&wrap_block(&inner, &indent));
                }
            }
        }

        format!("{before}{}{cond}{block}{elses}", branch.keyword())
    }

    fn render_function(&mut self, function: &Function) -> String {
        let is_mixin = function.block.nodes.iter().any(Node::is_property);
        let before = self.cursor.newlines_to(function.line);
        self.cursor.advance_line(function.line);

        let keyword = if is_mixin { "@mixin " } else { "@function " };
        let params = self.render_arguments(&function.params);
        let block = self.with_return_keyword(RETURN_KEYWORD, |r| {
            r.render_block(&function.block, "")
        });

        format!("{before}{keyword}({params}){block}")
    }

    /// Run `f` with `keyword` as the active return keyword, restoring the
    /// previous keyword afterwards.
    fn with_return_keyword<T>(
        &mut self,
        keyword: &'static str,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = std::mem::replace(&mut self.return_keyword, keyword);
        let result = f(self);
        self.return_keyword = saved;
        result
    }
}

fn wrap_block(inner: &str, closing_indent: &str) -> String {
    format!(" {{{inner}\n{closing_indent}}}")
}

fn render_literal(literal: &Literal) -> String {
    literal.val.clone().unwrap_or_default()
}

fn render_unit(unit: &Unit) -> String {
    format!(
        "{}{}",
        format_number(unit.val),
        unit.unit.as_deref().unwrap_or_default()
    )
}

fn render_color(color: &Color) -> String {
    color.raw.clone().unwrap_or_default()
}
