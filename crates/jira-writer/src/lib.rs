/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Jira wiki markup writer for Pandoc ASTs.
 *
 * The writer renders one node at a time from already-rendered children
 * ([`JiraWriter::render`]). [`traverse`] drives it over a whole
 * [`jira_pandoc_types::Pandoc`] document.
 */

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod escape;
pub mod fallback;
pub mod list;
pub mod node;
pub mod options;
pub mod renderer;
pub mod table;
pub mod traverse;

pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, StreamSink};
pub use document::{BLOCK_SEPARATOR, RenderedDocument, Variables, finish_document, join_blocks};
pub use error::{WriterError, WriterResult};
pub use fallback::{FallbackReporter, UndefinedFunction};
pub use node::{DefinitionItem, Node, TableNode};
pub use options::{
    BlockQuoteStyle, EscapePolicy, JIRA_FORMAT, MathStyle, ParagraphStyle, WriterOptions,
};
pub use renderer::JiraWriter;
pub use traverse::{write_blocks, write_document, write_inlines};
