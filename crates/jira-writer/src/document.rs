/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Whole-document assembly.
//!
//! Top-level blocks are separated by one blank line. The document pass
//! hands metadata and template variables back untouched, for the host's
//! template step; nothing is substituted into the body here.

use jira_pandoc_types::Meta;
use serde_json::{Map, Value};

/// Separator between consecutive blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Template variables supplied by the host.
pub type Variables = Map<String, Value>;

/// Output of the document pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedDocument {
    pub body: String,
    pub metadata: Meta,
    pub variables: Variables,
}

/// Join rendered blocks with [`BLOCK_SEPARATOR`].
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let blocks: Vec<S> = blocks.into_iter().collect();
    let parts: Vec<&str> = blocks.iter().map(AsRef::as_ref).collect();
    parts.join(BLOCK_SEPARATOR)
}

/// The document-level pass: the body is returned as given.
pub fn finish_document(body: String, metadata: Meta, variables: Variables) -> RenderedDocument {
    RenderedDocument {
        body,
        metadata,
        variables,
    }
}
