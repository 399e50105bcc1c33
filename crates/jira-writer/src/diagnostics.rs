/*
 * diagnostics.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The writer's diagnostic stream.
//!
//! Rendering has exactly one side channel: warnings about nodes the writer
//! cannot express. They go to a [`DiagnosticSink`], which is either a text
//! stream (stderr by default) or an in-memory [`DiagnosticCollector`].

use std::fmt;
use std::io::{self, Write};

/// A single warning produced while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Warning for a node type that has no render function.
    pub fn undefined_function(name: &str) -> Self {
        Self::warning(format!("Undefined function '{}'", name))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WARNING: {}", self.message)
    }
}

/// Destination for diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Writes each diagnostic as one line to a text stream.
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    stream: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl StreamSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for StreamSink<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write> DiagnosticSink for StreamSink<W> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        // A closed diagnostic stream must not affect rendered output.
        let _ = writeln!(self.stream, "{}", diagnostic);
    }
}

/// Collector for diagnostic messages
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new diagnostic collector
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Render all diagnostics to text lines
    pub fn to_text(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
