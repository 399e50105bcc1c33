/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attr, empty_attr};
use crate::block::Blocks;
use crate::caption::Caption;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Default,
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum ColWidth {
    Default,
    Percentage(f64),
}

pub type ColSpec = (Alignment, ColWidth);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub attr: Attr,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHead {
    pub attr: Attr,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBody {
    pub attr: Attr,
    pub rowhead_columns: usize,
    pub head: Vec<Row>,
    pub body: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFoot {
    pub attr: Attr,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub attr: Attr,
    pub alignment: Alignment,
    pub row_span: usize,
    pub col_span: usize,
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub attr: Attr,
    pub caption: Caption,
    pub colspec: Vec<ColSpec>,
    pub head: TableHead,
    pub bodies: Vec<TableBody>,
    pub foot: TableFoot,
}

impl Cell {
    /// A single-span, default-aligned cell.
    pub fn new(content: Blocks) -> Self {
        Cell {
            attr: empty_attr(),
            alignment: Alignment::Default,
            row_span: 1,
            col_span: 1,
            content,
        }
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            attr: empty_attr(),
            cells,
        }
    }
}

impl Table {
    /// A table with one head row (possibly none) and a single body.
    ///
    /// Columns get default alignment and width; the column count is taken
    /// from the widest of the given rows.
    pub fn simple(head: Option<Row>, body: Vec<Row>) -> Self {
        let columns = head
            .iter()
            .chain(body.iter())
            .map(|row| row.cells.len())
            .max()
            .unwrap_or(0);
        Table {
            attr: empty_attr(),
            caption: Caption::default(),
            colspec: vec![(Alignment::Default, ColWidth::Default); columns],
            head: TableHead {
                attr: empty_attr(),
                rows: head.into_iter().collect(),
            },
            bodies: vec![TableBody {
                attr: empty_attr(),
                rowhead_columns: 0,
                head: vec![],
                body,
            }],
            foot: TableFoot {
                attr: empty_attr(),
                rows: vec![],
            },
        }
    }

    pub fn column_count(&self) -> usize {
        self.colspec.len()
    }
}
