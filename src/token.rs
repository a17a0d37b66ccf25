/// A lexical unit of an outline, one per source line except where noted.
///
/// Tokens are handed straight to the tree builder and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `*`-prefixed line; `level` is the clamped nesting level, `title` the
    /// raw text after the marker run.
    Heading {
        line_no: usize,
        level: usize,
        title: String,
    },
    /// Closes the innermost open heading. Emitted once per level a heading
    /// line steps back, ahead of that heading.
    SubtreeClose { line_no: usize },
    Text { line_no: usize, value: String },
    Comment { line_no: usize, value: String },
    /// Control word of a `#+NAME:` line. Always followed by the `Text` token
    /// carrying its arguments.
    Directive { line_no: usize, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Heading,
    SubtreeClose,
    Text,
    Comment,
    Directive,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Heading { .. } => TokenKind::Heading,
            Token::SubtreeClose { .. } => TokenKind::SubtreeClose,
            Token::Text { .. } => TokenKind::Text,
            Token::Comment { .. } => TokenKind::Comment,
            Token::Directive { .. } => TokenKind::Directive,
        }
    }

    pub fn line_no(&self) -> usize {
        match self {
            Token::Heading { line_no, .. }
            | Token::SubtreeClose { line_no }
            | Token::Text { line_no, .. }
            | Token::Comment { line_no, .. }
            | Token::Directive { line_no, .. } => *line_no,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Heading { title, .. } => Some(title.as_str()),
            Token::SubtreeClose { .. } => None,
            Token::Text { value, .. } | Token::Comment { value, .. } => Some(value.as_str()),
            Token::Directive { name, .. } => Some(name.as_str()),
        }
    }
}
