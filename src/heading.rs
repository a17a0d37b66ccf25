//! Heading title parsing.
//!
//! The text after the `*` run is matched once, left to right:
//!
//! ```text
//! [TODO|DONE <ws>] [[#A|B|C] <ws>] title [:tag:tag:] <ws>*
//! ```
//!
//! The tag group is only recognized at the very end of the line and may hold
//! empty tags (`::`).

use winnow::combinator::{alt, delimited, opt, terminated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::ast::{Priority, TodoState};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TitleParts {
    pub done: TodoState,
    pub priority: Option<Priority>,
    pub title: String,
    pub tags: Vec<String>,
}

pub(crate) fn parse_title(raw: &str) -> TitleParts {
    let mut input = raw;
    let (done, priority) = match prefix.parse_next(&mut input) {
        Ok(parts) => parts,
        Err(_) => {
            input = raw;
            (TodoState::NotApplicable, None)
        }
    };

    let (title, tags) = split_tags(input);
    TitleParts {
        done,
        priority,
        title: title.trim().to_string(),
        tags,
    }
}

fn prefix(input: &mut &str) -> ModalResult<(TodoState, Option<Priority>)> {
    let done = opt(terminated(opt(keyword), whitespace1)).parse_next(input)?;
    let priority = opt(terminated(cookie, whitespace1)).parse_next(input)?;
    Ok((
        done.flatten().unwrap_or(TodoState::NotApplicable),
        priority,
    ))
}

fn keyword(input: &mut &str) -> ModalResult<TodoState> {
    alt((
        "TODO".value(TodoState::Pending),
        "DONE".value(TodoState::Complete),
    ))
    .parse_next(input)
}

fn cookie(input: &mut &str) -> ModalResult<Priority> {
    delimited("[#", one_of(['A', 'B', 'C']), "]")
        .map(|c| match c {
            'A' => Priority::A,
            'B' => Priority::B,
            _ => Priority::C,
        })
        .parse_next(input)
}

fn whitespace1<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

/// Splits `rest` into the title and the trailing tag group.
///
/// The group cannot contain whitespace, so it lives in the last whitespace-free
/// run of the line and starts at that run's first colon.
fn split_tags(rest: &str) -> (&str, Vec<String>) {
    let trimmed = rest.trim_end();
    let run_start = trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());

    let run = &trimmed[run_start..];
    if let Some(colon) = run.find(':') {
        let group = &run[colon..];
        if group.len() >= 2 && group.ends_with(':') {
            let tags = group[1..group.len() - 1]
                .split(':')
                .map(str::to_string)
                .collect();
            return (&trimmed[..run_start + colon], tags);
        }
    }

    (trimmed, Vec::new())
}
