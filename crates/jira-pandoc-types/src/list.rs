/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListNumberStyle {
    #[default]
    Default,
    Example,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListNumberDelim {
    #[default]
    Default,
    Period,
    OneParen,
    TwoParens,
}

/// `(start number, numbering style, delimiter)`.
pub type ListAttributes = (usize, ListNumberStyle, ListNumberDelim);
