/*
 * fallback.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Handling for node types the writer has no render function for.
//!
//! Looking up an unknown node type reports it once on the diagnostic
//! stream and hands back an operation that renders nothing, so the
//! conversion carries on without that subtree.

use crate::diagnostics::{Diagnostic, DiagnosticSink};

#[derive(Debug)]
pub struct FallbackReporter<S> {
    sink: S,
}

impl<S: DiagnosticSink> FallbackReporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Report `name` as undefined and return its empty stand-in.
    pub fn undefined_function(&mut self, name: &str) -> UndefinedFunction {
        tracing::warn!(function = name, "no Jira render function for node type");
        self.sink.emit(Diagnostic::undefined_function(name));
        UndefinedFunction {
            name: name.to_string(),
        }
    }
}

/// Render operation for an unknown node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedFunction {
    name: String,
}

impl UndefinedFunction {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepts any arguments and renders the empty string.
    pub fn call<A>(&self, _args: A) -> String {
        String::new()
    }
}
