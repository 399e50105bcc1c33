/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Bullet, ordered and definition lists.
//!
//! Jira expresses nesting by repeating markers (`**`, `#*`), not by
//! indentation. A nested list is given the marker run of its enclosing
//! lists and writes its own item lines with that run in front. Other lines
//! of an item are kept as they are.

use crate::node::DefinitionItem;

pub const BULLET_MARKER: char = '*';
pub const ORDERED_MARKER: char = '#';

pub fn bullet_list<S: AsRef<str>>(items: &[S], nesting: &str) -> String {
    marked_list(items, nesting, BULLET_MARKER)
}

pub fn ordered_list<S: AsRef<str>>(items: &[S], nesting: &str) -> String {
    marked_list(items, nesting, ORDERED_MARKER)
}

/// Definition lists have no Jira syntax of their own; each term and its
/// definitions become one bullet item.
pub fn definition_list(items: &[DefinitionItem], nesting: &str) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|item| {
            std::iter::once(item.term.as_str())
                .chain(item.definitions.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    bullet_list(&items, nesting)
}

/// Marker run for a list nested in an item of the list with `marker`.
pub fn nested_markers(nesting: &str, marker: char) -> String {
    format!("{}{}", nesting, marker)
}

fn marked_list<S: AsRef<str>>(items: &[S], nesting: &str, marker: char) -> String {
    items
        .iter()
        .map(|item| format!("{}{} {}", nesting, marker, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
