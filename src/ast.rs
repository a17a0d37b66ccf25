use std::mem;

use serde::{Deserialize, Serialize};

use crate::heading;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Heading(Heading),
    Text(Text),
    Comment(Comment),
    Directive(Directive),
}

/// Exact node kind, used to filter lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Heading,
    Text,
    Comment,
    Directive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoState {
    Pending,  // TODO
    Complete, // DONE
    #[default]
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
}

impl Priority {
    pub fn as_char(self) -> char {
        match self {
            Priority::A => 'A',
            Priority::B => 'B',
            Priority::C => 'C',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    #[serde(default)]
    pub done: TodoState,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Node>,
    pub line_no: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    pub line_no: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub line_no: usize,
}

/// `#+NAME: value` control line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    pub value: String,
    pub line_no: usize,
}

/// Root of a parsed outline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub children: Vec<Node>,
}

impl Heading {
    /// Builds a heading from the text following the `*` run, splitting off the
    /// keyword, priority cookie and tag group.
    pub fn new(raw: &str, line_no: usize) -> Self {
        let parts = heading::parse_title(raw);
        Self {
            title: parts.title,
            done: parts.done,
            priority: parts.priority,
            tags: parts.tags,
            children: Vec::new(),
            line_no,
        }
    }

    pub fn find_child_by_text(&self, text: &str, kind: Option<NodeKind>) -> Option<&Node> {
        find_child(&self.children, text, kind)
    }
}

// Frees nested headings from a work-list; the derived drop would recurse once
// per nesting level.
impl Drop for Heading {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Heading(mut heading) = node {
                pending.append(&mut heading.children);
            }
        }
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Heading(_) => NodeKind::Heading,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::Directive(_) => NodeKind::Directive,
        }
    }

    /// Text payload: heading title, text content, comment body or directive
    /// arguments.
    pub fn text(&self) -> &str {
        match self {
            Node::Heading(h) => &h.title,
            Node::Text(t) => &t.content,
            Node::Comment(c) => &c.text,
            Node::Directive(d) => &d.value,
        }
    }

    pub fn line_no(&self) -> usize {
        match self {
            Node::Heading(h) => h.line_no,
            Node::Text(t) => t.line_no,
            Node::Comment(c) => c.line_no,
            Node::Directive(d) => d.line_no,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading(h) => &h.children,
            _ => &[],
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Node::Heading(h) => Some(h),
            _ => None,
        }
    }

    pub fn find_child_by_text(&self, text: &str, kind: Option<NodeKind>) -> Option<&Node> {
        find_child(self.children(), text, kind)
    }
}

impl Document {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn find_child_by_text(&self, text: &str, kind: Option<NodeKind>) -> Option<&Node> {
        find_child(&self.children, text, kind)
    }
}

// Immediate children only, case-sensitive, first match wins.
fn find_child<'a>(children: &'a [Node], text: &str, kind: Option<NodeKind>) -> Option<&'a Node> {
    children
        .iter()
        .filter(|child| kind.map_or(true, |k| child.kind() == k))
        .find(|child| child.text() == text)
}
