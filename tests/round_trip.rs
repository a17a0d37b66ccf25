//! Property tests for the outline parser.
//!
//! Outlines built only from recognized constructs must survive
//! parse → render unchanged, and no input may make the parser panic.

use org_rs::{build, parse_str, render, Lexer, Node, Token};
use proptest::prelude::*;
use std::convert::Infallible;

#[derive(Debug, Clone)]
enum Line {
    Heading { step: usize, title: String },
    Text(String),
    Comment(String),
    Directive(String, String),
}

fn title_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("TODO "), Just("DONE ")],
        prop_oneof![Just(""), Just("[#A] "), Just("[#B] "), Just("[#C] ")],
        "[a-z][a-z ]{0,12}[a-z]",
        prop::collection::vec("[a-z]{0,5}", 0..3),
    )
        .prop_map(|(keyword, priority, title, tags)| {
            let mut line = format!("{keyword}{priority}{title}");
            if !tags.is_empty() {
                line.push_str(&format!(" :{}:", tags.join(":")));
            }
            line
        })
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        (0usize..4, title_strategy()).prop_map(|(step, title)| Line::Heading { step, title }),
        "[a-z ]{0,10}[a-z.]".prop_map(Line::Text),
        "[a-z][a-z ]{0,10}".prop_map(|c| Line::Comment(c.trim_end().to_string())),
        ("[A-Z_]{1,8}", "[a-z]{1,8}").prop_map(|(n, v)| Line::Directive(n, v)),
    ]
}

/// Renders generated lines as outline text, choosing heading depths that never
/// jump more than one level deeper.
fn outline(lines: &[Line]) -> String {
    let mut level: usize = 0;
    lines
        .iter()
        .map(|line| match line {
            Line::Heading { step, title } => {
                level = if *step == 0 {
                    level + 1
                } else {
                    level.saturating_sub(*step - 1).max(1)
                };
                format!("{} {}", "*".repeat(level), title)
            }
            Line::Text(t) => t.clone(),
            Line::Comment(c) => format!("# {c}"),
            Line::Directive(n, v) => format!("#+{n}: {v}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn count_headings(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|n| match n {
            Node::Heading(h) => 1 + count_headings(&h.children),
            _ => 0,
        })
        .sum()
}

proptest! {
    #[test]
    fn recognized_outlines_round_trip(lines in prop::collection::vec(line_strategy(), 1..40)) {
        let text = outline(&lines);
        let document = parse_str(&text);
        prop_assert_eq!(render(&document, 1), text);
    }

    #[test]
    fn every_heading_line_becomes_a_heading(lines in prop::collection::vec(line_strategy(), 1..40)) {
        let expected = lines.iter().filter(|l| matches!(l, Line::Heading { .. })).count();
        let document = parse_str(&outline(&lines));
        prop_assert_eq!(count_headings(&document.children), expected);
    }

    #[test]
    fn closes_match_level_drops(runs in prop::collection::vec(1usize..8, 1..30)) {
        let text = runs
            .iter()
            .map(|r| format!("{} h", "*".repeat(*r)))
            .collect::<Vec<_>>()
            .join("\n");
        let tokens: Vec<Token> = Lexer::new(text.lines().map(|l| Ok::<_, Infallible>(l.to_string())))
            .map(|t| t.unwrap())
            .collect();

        let mut level = 0usize;
        let mut closes = 0usize;
        let mut runs_left = runs.iter();
        for token in tokens {
            match token {
                Token::SubtreeClose { .. } => closes += 1,
                Token::Heading { level: next, .. } => {
                    let run = *runs_left.next().unwrap();
                    let expected = if run > level {
                        level + 1
                    } else {
                        run.min(level)
                    };
                    prop_assert_eq!(next, expected);
                    prop_assert_eq!(closes, level.saturating_sub(next));
                    level = next;
                    closes = 0;
                }
                other => prop_assert!(false, "unexpected token {:?}", other),
            }
        }
        prop_assert!(runs_left.next().is_none());
    }

    #[test]
    fn arbitrary_input_never_panics(text in "\\PC{0,200}") {
        let document = parse_str(&text);
        let _ = render(&document, 1);
    }
}

#[test]
fn build_from_crate_root_matches_parse_str_and_passes_errors_through() {
    let text = "* a\n** b\nbody\n* c";
    let lines = text.lines().map(|l| Ok::<_, Infallible>(l.to_string()));
    let document = build(Lexer::new(lines)).unwrap();
    assert_eq!(document, parse_str(text));

    let failing = vec![Ok("* a".to_string()), Err("offline")].into_iter();
    assert_eq!(build(Lexer::new(failing)), Err("offline"));
}
