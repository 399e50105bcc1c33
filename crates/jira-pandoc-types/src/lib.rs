/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc AST type definitions for the Jira writer.
 *
 * This crate provides pure data type definitions for the Pandoc AST,
 * mirroring the types from pandoc-types in Haskell. It carries no
 * source tracking: trees arrive from a host pipeline that has already
 * parsed and resolved the document, and are consumed once by a writer.
 */

pub mod attr;
pub mod block;
pub mod caption;
pub mod inline;
pub mod list;
pub mod meta;
pub mod pandoc;
pub mod table;

// Re-export commonly used types at the crate root
pub use attr::{Attr, class_string, empty_attr};
pub use block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, DefinitionList, Div, Figure, Header,
    LineBlock, OrderedList, Paragraph, Plain, RawBlock,
};
pub use caption::Caption;
pub use inline::{
    Citation, CitationMode, Cite, Code, Emph, Image, Inline, Inlines, Link, Math, MathType, Note,
    QuoteType, Quoted, RawInline, SmallCaps, Span, Str, Strikeout, Strong, Subscript,
    Superscript, Target, Underline, words,
};
pub use list::{ListAttributes, ListNumberDelim, ListNumberStyle};
pub use meta::{Meta, MetaValue};
pub use pandoc::Pandoc;
pub use table::{Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead};
