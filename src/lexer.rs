use std::collections::VecDeque;

use tracing::trace;

use crate::token::Token;

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Drop a leading U+FEFF from the first line.
    pub strip_bom: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strip_bom: true }
    }
}

/// Line-at-a-time scanner over an outline.
///
/// Pulls lines lazily from `lines` and yields one token per line, except that
/// a heading stepping back several levels first yields one `SubtreeClose` per
/// level, and a `#+NAME: args` line yields `Directive` then `Text`. Those
/// extra tokens wait in `pending` and are always drained, front first, before
/// the next line is read.
///
/// Errors from the line source are passed through untouched.
#[derive(Debug)]
pub struct Lexer<I> {
    lines: I,
    options: ParseOptions,
    level: usize,
    pending: VecDeque<Token>,
    line_no: usize,
}

impl<I, E> Lexer<I>
where
    I: Iterator<Item = Result<String, E>>,
{
    pub fn new(lines: I) -> Self {
        Self::with_options(lines, ParseOptions::default())
    }

    pub fn with_options(lines: I, options: ParseOptions) -> Self {
        Self {
            lines,
            options,
            level: 0,
            pending: VecDeque::new(),
            line_no: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Current heading nesting level, 0 before the first heading.
    pub fn level(&self) -> usize {
        self.level
    }

    fn scan(&mut self, raw: &str) -> Token {
        let line_no = self.line_no;
        let mut line = raw.trim_end();
        if line_no == 1 && self.options.strip_bom {
            line = line.trim_start_matches('\u{feff}');
        }

        if line.is_empty() {
            return Token::Text {
                line_no,
                value: String::new(),
            };
        }

        if line.starts_with('*') {
            return self.scan_heading(line);
        }

        if let Some(rest) = line.strip_prefix('#') {
            return self.scan_comment(rest);
        }

        Token::Text {
            line_no,
            value: line.to_string(),
        }
    }

    fn scan_heading(&mut self, line: &str) -> Token {
        let line_no = self.line_no;
        let rest = line.trim_start_matches('*');
        let run = line.len() - rest.len();

        // A marker run must be followed by whitespace; "*bold*" is text.
        if !rest.starts_with(char::is_whitespace) {
            return Token::Text {
                line_no,
                value: line.to_string(),
            };
        }

        let previous = self.level;
        if run > previous {
            self.level = previous + 1;
        } else if run < previous {
            self.level = run;
        }

        let heading = Token::Heading {
            line_no,
            level: self.level,
            title: rest.trim_start().to_string(),
        };

        let closes = previous.saturating_sub(self.level);
        trace!(line_no, run, level = self.level, closes, "heading");
        if closes == 0 {
            return heading;
        }

        for _ in 1..closes {
            self.pending.push_back(Token::SubtreeClose { line_no });
        }
        self.pending.push_back(heading);
        Token::SubtreeClose { line_no }
    }

    fn scan_comment(&mut self, rest: &str) -> Token {
        let line_no = self.line_no;

        if let Some((name, args)) = split_directive(rest) {
            self.pending.push_back(Token::Text {
                line_no,
                value: args.trim().to_string(),
            });
            return Token::Directive {
                line_no,
                name: name.to_string(),
            };
        }

        let value = rest.strip_prefix(' ').unwrap_or(rest);
        Token::Comment {
            line_no,
            value: value.to_string(),
        }
    }
}

/// Splits the text after `#` into a control word and its arguments when it
/// reads `+NAME:args` with `NAME` made of `A-Z` and `_` only.
fn split_directive(rest: &str) -> Option<(&str, &str)> {
    let body = rest.strip_prefix('+')?;
    let (name, args) = body.split_once(':')?;
    if name.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
        Some((name, args))
    } else {
        None
    }
}

impl<I, E> Iterator for Lexer<I>
where
    I: Iterator<Item = Result<String, E>>,
{
    type Item = Result<Token, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(Ok(token));
        }

        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(err) => return Some(Err(err)),
        };
        self.line_no += 1;

        Some(Ok(self.scan(&line)))
    }
}
