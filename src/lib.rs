//! Parser for a minimal Org-mode-like outline format.
//!
//! Only headings (with `TODO`/`DONE`, `[#A]` priorities and `:tags:`),
//! `# comments`, `#+NAME: value` directives and plain text lines are
//! recognized. Everything else is kept as text. Parsing never fails on
//! malformed input; only the underlying reader can produce an error.

use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

mod ast;
mod error;
mod heading;
mod lexer;
mod parser;
mod render;
mod token;

pub use ast::{Comment, Directive, Document, Heading, Node, NodeKind, Priority, Text, TodoState};
pub use error::{ParseError, Result};
pub use lexer::{Lexer, ParseOptions};
pub use parser::build;
pub use render::{render, render_nodes};
pub use token::{Token, TokenKind};

pub fn parse_str(text: &str) -> Document {
    parse_str_with_options(text, ParseOptions::default())
}

pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Document {
    let lines = text.lines().map(|line| Ok::<_, Infallible>(line.to_string()));
    match parser::build(Lexer::with_options(lines, options)) {
        Ok(document) => document,
        Err(never) => match never {},
    }
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, ParseOptions::default())
}

pub fn parse_reader_with_options<R: BufRead>(reader: R, options: ParseOptions) -> Result<Document> {
    parse_named(reader, None, options)
}

/// Parses the file at `path`; the document is named after the path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    parse_file_with_options(path, ParseOptions::default())
}

pub fn parse_file_with_options(path: impl AsRef<Path>, options: ParseOptions) -> Result<Document> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_named(
        BufReader::new(file),
        Some(path.display().to_string()),
        options,
    )
}

fn parse_named<R: BufRead>(
    reader: R,
    name: Option<String>,
    options: ParseOptions,
) -> Result<Document> {
    debug!(name = name.as_deref().unwrap_or("<reader>"), "parsing outline");

    let mut lexer = Lexer::with_options(reader.lines(), options);
    let document = parser::build_into(Document::new(name), lexer.by_ref()).map_err(|source| {
        ParseError::Read {
            line: lexer.line_no() + 1,
            source,
        }
    })?;

    debug!(
        lines = lexer.line_no(),
        top_level = document.children.len(),
        "parsed outline"
    );
    Ok(document)
}
