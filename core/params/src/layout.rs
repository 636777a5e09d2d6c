//! Re-lays a config source out as one statement per line.
//!
//! Statements end at `;` outside strings and array braces, `class X {` headers
//! end after their `{`. Each statement is indented with one tab per enclosing
//! class, so a parameter inside `class Params` always looks like:
//!
//! ```text
//! class Params {
//! 	class fVar {
//! 		title = "$STR_A";
//! 		values[] = {0,1};
//! 	};
//! };
//! ```
//!
//! A `}` outside array braces closes the current class and flushes any
//! statement still waiting for its `;`.
//!
//! Comments are dropped, preprocessor directives keep their own line and
//! blank lines between statements are kept as empty lines.

use log::trace;

#[derive(Default)]
struct Layout {
    lines: Vec<String>,
    statement: String,
    depth: usize,
    braces: usize,
    in_block_comment: bool,
    /// A class was just closed, so an immediately following `;` belongs to it.
    close_pending: bool,
}

fn is_class_header(statement: &str) -> bool {
    statement
        .trim_start()
        .strip_prefix("class")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

impl Layout {
    fn emit(&mut self, text: &str) {
        let line = format!("{}{}", "\t".repeat(self.depth), text.trim());
        trace!("layout: {:?}", line);
        self.lines.push(line);
        self.statement.clear();
        self.braces = 0;
    }

    fn at_statement_start(&self) -> bool {
        !self.in_block_comment && self.statement.trim().is_empty()
    }

    /// Emits an open statement that never got its `;`.
    fn flush(&mut self) {
        if self.statement.trim().is_empty() {
            self.statement.clear();
        } else {
            let statement = std::mem::take(&mut self.statement);
            self.emit(&statement);
        }
    }

    fn close_class(&mut self) {
        self.flush();
        self.depth = self.depth.saturating_sub(1);
        self.emit("};");
        self.close_pending = true;
    }

    fn push_line(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !self.in_block_comment
            && self.braces == 0
            && (trimmed.starts_with('#') || is_class_header(trimmed))
        {
            self.flush();
        }
        if self.at_statement_start() {
            if trimmed.is_empty() {
                self.statement.clear();
                self.lines.push(String::new());
                return;
            }
            if trimmed.starts_with('#') {
                self.statement.clear();
                self.lines.push(trimmed.to_string());
                return;
            }
        }

        // Continuation lines join the open statement with a single space.
        let raw = if self.statement.is_empty() {
            raw
        } else {
            raw.trim_start()
        };
        let mut in_quote = false;
        let mut chars = raw.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }
            if in_quote {
                self.statement.push(c);
                if c == '"' {
                    in_quote = false;
                }
                continue;
            }
            if self.close_pending && !c.is_whitespace() {
                self.close_pending = false;
                if c == ';' {
                    continue;
                }
            }
            match c {
                '"' => {
                    in_quote = true;
                    self.statement.push(c);
                }
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '{' if self.braces == 0 && is_class_header(&self.statement) => {
                    let header = format!("{} {{", self.statement.trim());
                    self.emit(&header);
                    self.depth += 1;
                }
                '{' => {
                    self.braces += 1;
                    self.statement.push(c);
                }
                '}' if self.braces > 0 => {
                    self.braces -= 1;
                    self.statement.push(c);
                }
                '}' => self.close_class(),
                ';' if self.braces == 0 => {
                    self.statement.push(';');
                    let statement = std::mem::take(&mut self.statement);
                    self.emit(&statement);
                }
                _ => self.statement.push(c),
            }
        }

        if self.statement.trim().is_empty() {
            self.statement.clear();
        } else {
            let kept = self.statement.trim_end().len();
            self.statement.truncate(kept);
            self.statement.push(' ');
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }
}

/// Splits `text` into canonical statement lines.
pub fn normalize(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut layout = Layout::default();
    for raw in text.lines() {
        layout.push_line(raw);
    }
    layout.finish()
}
