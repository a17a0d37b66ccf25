use tracing::debug;

use crate::ast::*;
use crate::token::Token;

/// Builds a document tree from a token stream.
///
/// Stops at the first source error and returns it unchanged; running out of
/// tokens closes every open heading and is a normal end.
pub fn build<T, E>(tokens: T) -> Result<Document, E>
where
    T: IntoIterator<Item = Result<Token, E>>,
{
    build_into(Document::default(), tokens)
}

pub(crate) fn build_into<T, E>(document: Document, tokens: T) -> Result<Document, E>
where
    T: IntoIterator<Item = Result<Token, E>>,
{
    let mut builder = TreeBuilder::new(document);
    for token in tokens {
        builder.push(token?);
    }
    Ok(builder.finish())
}

struct PendingDirective {
    name: String,
    line_no: usize,
}

/// Open headings form an explicit stack on top of the document root; the
/// innermost one receives new children. A heading is attached to its parent
/// when its frame closes, so sibling order follows source order.
struct TreeBuilder {
    document: Document,
    open: Vec<Heading>,
    directive: Option<PendingDirective>,
}

impl TreeBuilder {
    fn new(document: Document) -> Self {
        Self {
            document,
            open: Vec::new(),
            directive: None,
        }
    }

    fn destination(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(heading) => &mut heading.children,
            None => &mut self.document.children,
        }
    }

    fn push(&mut self, token: Token) {
        if !matches!(token, Token::Text { .. }) {
            self.flush_directive();
        }

        match token {
            Token::Heading {
                line_no,
                level,
                title,
            } => {
                // A heading at level L lives in frame L; anything still open
                // at that depth or deeper is a finished sibling subtree.
                while self.open.len() >= level.max(1) {
                    self.close();
                }
                self.open.push(Heading::new(&title, line_no));
            }
            Token::SubtreeClose { .. } => self.close(),
            Token::Comment { line_no, value } => {
                self.destination().push(Node::Comment(Comment {
                    text: value,
                    line_no,
                }));
            }
            Token::Directive { line_no, name } => {
                self.directive = Some(PendingDirective { name, line_no });
            }
            Token::Text { line_no, value } => {
                let node = match self.directive.take() {
                    Some(d) => Node::Directive(Directive {
                        name: d.name,
                        value,
                        line_no: d.line_no,
                    }),
                    None => Node::Text(Text {
                        content: value,
                        line_no,
                    }),
                };
                self.destination().push(node);
            }
        }
    }

    fn close(&mut self) {
        if let Some(heading) = self.open.pop() {
            self.destination().push(Node::Heading(heading));
        }
    }

    fn flush_directive(&mut self) {
        if let Some(d) = self.directive.take() {
            debug!(line_no = d.line_no, name = %d.name, "directive without arguments");
            self.destination().push(Node::Directive(Directive {
                name: d.name,
                value: String::new(),
                line_no: d.line_no,
            }));
        }
    }

    fn finish(mut self) -> Document {
        self.flush_directive();
        while !self.open.is_empty() {
            self.close();
        }
        self.document
    }
}
