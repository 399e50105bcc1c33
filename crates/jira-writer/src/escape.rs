/*
 * escape.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Escaping of literal text for Jira markup.
//!
//! The only character targeted is `{`, which opens Jira macros such as
//! `{code}` or `{quote}`. A brace already preceded by a backslash is left
//! alone, so escaping text that was escaped before (link text, citations)
//! leaves it unchanged.

use std::borrow::Cow;

use crate::options::EscapePolicy;

/// Escape `text` according to `policy`.
pub fn escape(text: &str, policy: EscapePolicy) -> Cow<'_, str> {
    match policy {
        EscapePolicy::Braces => escape_braces(text),
        EscapePolicy::None => Cow::Borrowed(text),
    }
}

/// Prefix every unescaped `{` with a backslash.
///
/// # Examples
///
/// ```
/// use jira_writer::escape::escape_braces;
///
/// assert_eq!(escape_braces("use {code} here"), "use \\{code} here");
/// assert_eq!(escape_braces("already \\{ok}"), "already \\{ok}");
/// ```
pub fn escape_braces(text: &str) -> Cow<'_, str> {
    if !text.contains('{') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 4);
    let mut prev = None;
    for c in text.chars() {
        if c == '{' && prev != Some('\\') {
            result.push('\\');
        }
        result.push(c);
        prev = Some(c);
    }
    Cow::Owned(result)
}
