/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render calls, one variant per node kind.
//!
//! A [`Node`] is what the host hands the writer after it has already
//! rendered the node's children: container content arrives as Jira text,
//! leaves and attributes arrive as they were in the document.

use jira_pandoc_types::{Alignment, Attr};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Inline nodes
    Str(String),
    Space,
    SoftBreak,
    LineBreak,
    Emph(String),
    Strong(String),
    Subscript(String),
    Superscript(String),
    SmallCaps(String),
    Strikeout(String),
    Code {
        text: String,
        attr: Attr,
    },
    InlineMath(String),
    Cite(String),
    Note(String),
    Link {
        text: String,
        target: String,
        title: String,
        attr: Attr,
    },
    Image {
        alt: String,
        src: String,
        title: String,
        attr: Attr,
    },
    Span {
        content: String,
        attr: Attr,
    },
    RawInline {
        format: String,
        text: String,
    },

    // Block nodes
    Plain(String),
    Para(String),
    Header {
        level: usize,
        content: String,
        attr: Attr,
    },
    BlockQuote(String),
    HorizontalRule,
    LineBlock(Vec<String>),
    CodeBlock {
        text: String,
        attr: Attr,
    },
    /// List nodes carry `nesting`, the marker run of the enclosing lists
    /// (`""` at top level, `"*#"` inside an ordered list inside a bullet list).
    BulletList {
        items: Vec<String>,
        nesting: String,
    },
    OrderedList {
        items: Vec<String>,
        nesting: String,
    },
    DefinitionList {
        items: Vec<DefinitionItem>,
        nesting: String,
    },
    RawBlock {
        format: String,
        text: String,
    },
    Div {
        content: String,
        attr: Attr,
    },
    CaptionedImage {
        src: String,
        title: String,
        caption: String,
        attr: Attr,
    },
    Table(TableNode),

    /// Any node type without a render function.
    Other {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefinitionItem {
    pub term: String,
    pub definitions: Vec<String>,
}

/// A table whose cells are already rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableNode {
    pub caption: String,
    pub aligns: Vec<Alignment>,
    /// Relative column widths; `0.0` where the document left it unspecified.
    pub widths: Vec<f64>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Node {
    /// Node-type name as it appears in the render function table.
    pub fn name(&self) -> &str {
        match self {
            Node::Str(_) => "Str",
            Node::Space => "Space",
            Node::SoftBreak => "SoftBreak",
            Node::LineBreak => "LineBreak",
            Node::Emph(_) => "Emph",
            Node::Strong(_) => "Strong",
            Node::Subscript(_) => "Subscript",
            Node::Superscript(_) => "Superscript",
            Node::SmallCaps(_) => "SmallCaps",
            Node::Strikeout(_) => "Strikeout",
            Node::Code { .. } => "Code",
            Node::InlineMath(_) => "InlineMath",
            Node::Cite(_) => "Cite",
            Node::Note(_) => "Note",
            Node::Link { .. } => "Link",
            Node::Image { .. } => "Image",
            Node::Span { .. } => "Span",
            Node::RawInline { .. } => "RawInline",
            Node::Plain(_) => "Plain",
            Node::Para(_) => "Para",
            Node::Header { .. } => "Header",
            Node::BlockQuote(_) => "BlockQuote",
            Node::HorizontalRule => "HorizontalRule",
            Node::LineBlock(_) => "LineBlock",
            Node::CodeBlock { .. } => "CodeBlock",
            Node::BulletList { .. } => "BulletList",
            Node::OrderedList { .. } => "OrderedList",
            Node::DefinitionList { .. } => "DefinitionList",
            Node::RawBlock { .. } => "RawBlock",
            Node::Div { .. } => "Div",
            Node::CaptionedImage { .. } => "CaptionedImage",
            Node::Table(_) => "Table",
            Node::Other { name } => name,
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Node::Other { name: name.into() }
    }
}
