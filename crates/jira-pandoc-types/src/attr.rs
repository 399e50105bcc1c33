/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use hashlink::LinkedHashMap;

pub fn empty_attr() -> Attr {
    (String::new(), vec![], LinkedHashMap::new())
}

/// `(identifier, classes, key/value attributes)`.
///
/// Key/value pairs keep their insertion order, matching how Pandoc
/// serializes them.
pub type Attr = (String, Vec<String>, LinkedHashMap<String, String>);

/// The classes of an attribute as a single space-separated string.
///
/// This is the form custom writers see for the `class` attribute, e.g.
/// `python numberLines` for a fenced block written as
/// ```` ```{.python .numberLines} ````.
pub fn class_string(attr: &Attr) -> String {
    attr.1.join(" ")
}
