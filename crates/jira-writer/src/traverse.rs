/*
 * traverse.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Post-order driver from a Pandoc document to Jira text.
//!
//! This is the host side of the writer contract: children are rendered
//! first and the parent receives their output. Node types the writer has
//! no entry for (underline, quotes, display math, non-image figures) are
//! handed over by name and go through the fallback; their children are not
//! visited.

use jira_pandoc_types::{
    Block, BlockQuote, Blocks, BulletList, Cite, CodeBlock, ColWidth, DefinitionList, Div, Emph,
    Figure, Header, Image, Inline, Inlines, LineBlock, Link, Math, MathType, Note, OrderedList,
    Pandoc, Paragraph, Plain, QuoteType, Quoted, RawBlock, RawInline, Row, SmallCaps, Span, Str,
    Strikeout, Strong, Subscript, Superscript, Table,
};

use crate::diagnostics::DiagnosticSink;
use crate::document::{RenderedDocument, Variables, finish_document, join_blocks};
use crate::list::{BULLET_MARKER, ORDERED_MARKER, nested_markers};
use crate::node::{DefinitionItem, Node, TableNode};
use crate::renderer::JiraWriter;

/// Separator between blocks inside a single list item.
///
/// Jira ends a list at a blank line, so item blocks are kept on adjacent lines.
const LIST_ITEM_SEPARATOR: &str = "\n";

/// Render a whole document and run the document pass.
pub fn write_document<S: DiagnosticSink>(
    doc: Pandoc,
    variables: Variables,
    writer: &mut JiraWriter<S>,
) -> RenderedDocument {
    tracing::debug!(blocks = doc.blocks.len(), "writing Jira document");
    let body = write_blocks(doc.blocks, writer);
    finish_document(body, doc.meta, variables)
}

/// Render blocks and join them with the document block separator.
pub fn write_blocks<S: DiagnosticSink>(blocks: Blocks, writer: &mut JiraWriter<S>) -> String {
    let rendered: Vec<String> = blocks
        .into_iter()
        .map(|block| write_block(block, "", writer))
        .collect();
    join_blocks(rendered)
}

/// Render inlines and concatenate them.
pub fn write_inlines<S: DiagnosticSink>(inlines: Inlines, writer: &mut JiraWriter<S>) -> String {
    inlines
        .into_iter()
        .map(|inline| write_inline(inline, writer))
        .collect()
}

// ============================================================================
// Inline writing
// ============================================================================

fn write_inline<S: DiagnosticSink>(inline: Inline, writer: &mut JiraWriter<S>) -> String {
    let node = match inline {
        Inline::Str(Str { text }) => Node::Str(text),
        Inline::Space => Node::Space,
        Inline::SoftBreak => Node::SoftBreak,
        Inline::LineBreak => Node::LineBreak,

        Inline::Emph(Emph { content }) => Node::Emph(write_inlines(content, writer)),
        Inline::Strong(Strong { content }) => Node::Strong(write_inlines(content, writer)),
        Inline::Strikeout(Strikeout { content }) => Node::Strikeout(write_inlines(content, writer)),
        Inline::Superscript(Superscript { content }) => {
            Node::Superscript(write_inlines(content, writer))
        }
        Inline::Subscript(Subscript { content }) => Node::Subscript(write_inlines(content, writer)),
        Inline::SmallCaps(SmallCaps { content }) => Node::SmallCaps(write_inlines(content, writer)),
        Inline::Span(Span { attr, content }) => Node::Span {
            content: write_inlines(content, writer),
            attr,
        },
        Inline::Cite(Cite { content, .. }) => Node::Cite(write_inlines(content, writer)),

        Inline::Code(code) => Node::Code {
            text: code.text,
            attr: code.attr,
        },

        Inline::Math(Math {
            math_type: MathType::InlineMath,
            text,
        }) => Node::InlineMath(text),
        Inline::Math(Math {
            math_type: MathType::DisplayMath,
            ..
        }) => Node::other("DisplayMath"),

        Inline::RawInline(RawInline { format, text }) => Node::RawInline { format, text },

        Inline::Link(Link {
            attr,
            content,
            target: (url, title),
        }) => Node::Link {
            text: write_inlines(content, writer),
            target: url,
            title,
            attr,
        },
        Inline::Image(Image {
            attr,
            content,
            target: (src, title),
        }) => Node::Image {
            alt: write_inlines(content, writer),
            src,
            title,
            attr,
        },

        Inline::Note(Note { content }) => Node::Note(write_blocks(content, writer)),

        Inline::Quoted(Quoted { quote_type, .. }) => match quote_type {
            QuoteType::SingleQuote => Node::other("SingleQuoted"),
            QuoteType::DoubleQuote => Node::other("DoubleQuoted"),
        },
        Inline::Underline(_) => Node::other("Underline"),
    };
    writer.render(node)
}

// ============================================================================
// Block writing
// ============================================================================

/// `nesting` is the marker run of the lists enclosing `block`; only a
/// block that sits directly in a list item has a non-empty one.
fn write_block<S: DiagnosticSink>(
    block: Block,
    nesting: &str,
    writer: &mut JiraWriter<S>,
) -> String {
    let node = match block {
        Block::Plain(Plain { content }) => Node::Plain(write_inlines(content, writer)),
        Block::Paragraph(Paragraph { content }) => Node::Para(write_inlines(content, writer)),

        Block::Header(Header {
            level,
            attr,
            content,
        }) => Node::Header {
            level,
            content: write_inlines(content, writer),
            attr,
        },

        Block::LineBlock(LineBlock { content }) => Node::LineBlock(
            content
                .into_iter()
                .map(|line| write_inlines(line, writer))
                .collect(),
        ),

        Block::CodeBlock(CodeBlock { attr, text }) => Node::CodeBlock { text, attr },
        Block::RawBlock(RawBlock { format, text }) => Node::RawBlock { format, text },

        Block::BlockQuote(BlockQuote { content }) => {
            Node::BlockQuote(write_blocks(content, writer))
        }

        Block::BulletList(BulletList { content }) => Node::BulletList {
            items: write_list_items(content, &nested_markers(nesting, BULLET_MARKER), writer),
            nesting: nesting.to_string(),
        },
        Block::OrderedList(OrderedList { content, .. }) => Node::OrderedList {
            items: write_list_items(content, &nested_markers(nesting, ORDERED_MARKER), writer),
            nesting: nesting.to_string(),
        },
        Block::DefinitionList(DefinitionList { content }) => {
            let inner = nested_markers(nesting, BULLET_MARKER);
            Node::DefinitionList {
                items: content
                    .into_iter()
                    .map(|(term, definitions)| DefinitionItem {
                        term: write_inlines(term, writer),
                        definitions: write_list_items(definitions, &inner, writer),
                    })
                    .collect(),
                nesting: nesting.to_string(),
            }
        }

        Block::HorizontalRule => Node::HorizontalRule,

        Block::Div(Div { attr, content }) => Node::Div {
            content: write_blocks(content, writer),
            attr,
        },

        Block::Table(table) => Node::Table(write_table(table, writer)),

        Block::Figure(Figure {
            caption, content, ..
        }) => match figure_image(content) {
            Some(Image {
                attr,
                target: (src, title),
                ..
            }) => Node::CaptionedImage {
                src,
                title,
                caption: write_blocks(caption.long.unwrap_or_default(), writer),
                attr,
            },
            None => Node::other("Figure"),
        },
    };
    writer.render(node)
}

fn write_list_items<S: DiagnosticSink>(
    items: Vec<Blocks>,
    nesting: &str,
    writer: &mut JiraWriter<S>,
) -> Vec<String> {
    items
        .into_iter()
        .map(|item| {
            item.into_iter()
                .map(|block| write_block(block, nesting, writer))
                .collect::<Vec<_>>()
                .join(LIST_ITEM_SEPARATOR)
        })
        .collect()
}

/// The image of a figure that holds nothing but one image.
fn figure_image(content: Blocks) -> Option<Image> {
    let [Block::Plain(Plain { content }) | Block::Paragraph(Paragraph { content })] =
        <[Block; 1]>::try_from(content).ok()?
    else {
        return None;
    };
    let [Inline::Image(image)] = <[Inline; 1]>::try_from(content).ok()? else {
        return None;
    };
    Some(image)
}

// ============================================================================
// Tables
// ============================================================================

fn write_table<S: DiagnosticSink>(table: Table, writer: &mut JiraWriter<S>) -> TableNode {
    let column_count = table.column_count();
    let caption = write_blocks(table.caption.long.unwrap_or_default(), writer);

    let (aligns, widths): (Vec<_>, Vec<_>) = table
        .colspec
        .into_iter()
        .map(|(align, width)| {
            let width = match width {
                ColWidth::Percentage(w) => w,
                ColWidth::Default => 0.0,
            };
            (align, width)
        })
        .unzip();

    let headers = match table.head.rows.into_iter().next() {
        Some(row) => write_row(row, writer),
        None => vec![String::new(); column_count],
    };

    let rows = table
        .bodies
        .into_iter()
        .flat_map(|body| body.head.into_iter().chain(body.body))
        .chain(table.foot.rows)
        .map(|row| write_row(row, writer))
        .collect();

    TableNode {
        caption,
        aligns,
        widths,
        headers,
        rows,
    }
}

fn write_row<S: DiagnosticSink>(row: Row, writer: &mut JiraWriter<S>) -> Vec<String> {
    row.cells
        .into_iter()
        .map(|cell| write_blocks(cell.content, writer))
        .collect()
}
