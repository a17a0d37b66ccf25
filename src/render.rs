use crate::ast::*;

/// Renders a document back to outline text, one line per node.
///
/// Top-level headings get `depth` stars; each nesting step adds one. Lines are
/// joined with `\n` and there is no trailing newline.
pub fn render(document: &Document, depth: usize) -> String {
    render_nodes(&document.children, depth)
}

pub fn render_nodes(nodes: &[Node], depth: usize) -> String {
    let mut lines = Vec::new();
    collect_lines(nodes, depth, &mut lines);
    lines.join("\n")
}

fn collect_lines(nodes: &[Node], depth: usize, lines: &mut Vec<String>) {
    // Explicit stack so rendering depth is not bounded by the call stack.
    let mut stack: Vec<(std::slice::Iter<'_, Node>, usize)> = vec![(nodes.iter(), depth)];

    while let Some((iter, level)) = stack.last_mut() {
        let level = *level;
        let Some(node) = iter.next() else {
            stack.pop();
            continue;
        };

        lines.push(render_line(node, level));
        if !node.children().is_empty() {
            stack.push((node.children().iter(), level + 1));
        }
    }
}

fn render_line(node: &Node, depth: usize) -> String {
    match node {
        Node::Heading(h) => format!("{} {}", "*".repeat(depth), heading_line(h)),
        Node::Text(t) => t.content.clone(),
        Node::Comment(c) => format!("# {}", c.text),
        Node::Directive(d) => format!("#+{}: {}", d.name, d.value),
    }
}

fn heading_line(h: &Heading) -> String {
    let mut out = String::new();
    match h.done {
        TodoState::Pending => out.push_str("TODO "),
        TodoState::Complete => out.push_str("DONE "),
        TodoState::NotApplicable => {}
    }
    if let Some(priority) = h.priority {
        out.push_str("[#");
        out.push(priority.as_char());
        out.push_str("] ");
    }
    out.push_str(&h.title);
    if !h.tags.is_empty() {
        out.push_str(" :");
        out.push_str(&h.tags.join(":"));
        out.push(':');
    }
    out
}
