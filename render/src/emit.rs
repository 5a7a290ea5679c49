//! Source-file buffer and identifier helpers.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

/// Accumulates one generated Rust source file.
#[derive(Debug)]
pub struct SourceFile {
    /// The raw buffer; generators append through the helper methods.
    pub buf: String,
}

impl SourceFile {
    /// Creates a file starting with a module doc comment.
    #[must_use]
    pub fn new(module_doc: &str) -> Self {
        let mut buf = String::with_capacity(4 * 1024);
        for line in module_doc.lines() {
            if line.is_empty() {
                buf.push_str("//!\n");
            } else {
                let _ = writeln!(buf, "//! {line}");
            }
        }
        buf.push('\n');
        Self { buf }
    }

    /// Appends one line.
    pub fn line(&mut self, line: &str) {
        let _ = writeln!(self.buf, "{line}");
    }

    /// Appends a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `///` doc comment, wrapping each input line.
    pub fn doc_comment(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.buf.push_str("///\n");
            } else {
                let _ = writeln!(self.buf, "/// {line}");
            }
        }
    }

    /// Appends an indented `///` doc comment for struct fields.
    pub fn indented_doc_comment(&mut self, text: &str) {
        for line in text.lines() {
            let _ = writeln!(self.buf, "    /// {line}");
        }
    }

    /// Finishes the file, ensuring a single trailing newline.
    #[must_use]
    pub fn finish(mut self) -> String {
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        if !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
        self.buf
    }
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Converts a camelCase or PascalCase name into a snake_case Rust
/// identifier, escaping keywords.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                let prev = s.as_bytes()[i - 1] as char;
                if prev.is_lowercase() || prev.is_ascii_digit() {
                    result.push('_');
                }
            }
            result.push(ch.to_lowercase().next().unwrap_or(ch));
        } else {
            result.push(ch);
        }
    }
    match result.as_str() {
        "type" | "self" | "super" | "crate" | "mod" | "fn" | "pub" | "use" | "let" | "mut"
        | "ref" | "as" | "in" | "for" | "if" | "else" | "match" | "return" | "struct" | "enum"
        | "trait" | "impl" | "where" | "loop" | "while" | "break" | "continue" | "move" | "box"
        | "dyn" | "true" | "false" | "abstract" | "final" | "override" | "static" | "const" => {
            result.push('_');
            result
        }
        _ => result,
    }
}
