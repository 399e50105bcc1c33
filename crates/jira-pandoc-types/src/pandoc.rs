/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

pub use crate::block::Blocks;
pub use crate::meta::Meta;
use serde::{Deserialize, Serialize};

/*
 * A data structure that mimics Pandoc's `data Pandoc` type.
 * This is the whole document a host pipeline hands to a writer.
 */

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pandoc {
    /// Document metadata (frontmatter).
    pub meta: Meta,
    pub blocks: Blocks,
}
