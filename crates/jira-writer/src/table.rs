/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tables.
//!
//! Jira tables are one line per row: `||` delimits header cells and `|`
//! delimits data cells. There is no caption, alignment or width syntax, so
//! those parts of a [`TableNode`] are dropped.

use crate::node::TableNode;

/// `||c1||c2||...||`, or `None` when every header cell is empty.
pub fn header_row<S: AsRef<str>>(cells: &[S]) -> Option<String> {
    if cells.iter().all(|cell| cell.as_ref().is_empty()) {
        return None;
    }
    Some(format!("||{}||", join_cells(cells, "||")))
}

/// `|c1|c2|...|`.
pub fn data_row<S: AsRef<str>>(cells: &[S]) -> String {
    format!("|{}|", join_cells(cells, "|"))
}

pub fn table(node: &TableNode) -> String {
    header_row(&node.headers)
        .into_iter()
        .chain(node.rows.iter().map(|row| data_row(row)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_cells<S: AsRef<str>>(cells: &[S], separator: &str) -> String {
    cells
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}
