//! Output cursor.
//!
//! Tracks the last source line and column reproduced in the output, and turns
//! a node's recorded position into the whitespace needed to reach it. Padding
//! is never negative: a target behind the cursor produces nothing.

/// Last emitted source position. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    line: usize,
    column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// One newline per line between the cursor and `line`.
    pub fn newlines_to(&self, line: usize) -> String {
        "\n".repeat(line.saturating_sub(self.line))
    }

    /// One space per column between the cursor and `column`.
    ///
    /// Takes a signed target because callers pass computed alignment columns
    /// that can fall below 1.
    pub fn spaces_to(&self, column: i64) -> String {
        let width = column - self.column as i64;
        " ".repeat(width.max(0) as usize)
    }

    /// Newlines to `line`, then spaces to `column`.
    pub fn move_to(&self, line: usize, column: usize) -> String {
        let mut out = self.newlines_to(line);
        out.push_str(&self.spaces_to(column as i64));
        out
    }

    /// Record that output has reached `line`. Line 0 (no recorded position)
    /// leaves the cursor where it is.
    pub fn advance_line(&mut self, line: usize) {
        if line > 0 {
            self.line = line;
        }
    }
}
