/*
 * renderer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Jira wiki markup writer for Pandoc AST nodes.
//!
//! [`JiraWriter::render`] turns one node into Jira text. Children must
//! already be rendered: the caller visits the tree post-order and passes
//! each container its children's output (see [`crate::traverse`] for a
//! driver that does this for a whole document).
//!
//! # Design decisions
//!
//! - RawInline/RawBlock: echo contents if format is "jira", otherwise drop silently
//! - Unknown node types go through the [`FallbackReporter`]: one warning, empty output
//! - Literal text is escaped per [`EscapePolicy`](crate::options::EscapePolicy);
//!   link text, image alt text, citations and notes are escaped again, which is
//!   a no-op for text that is already escaped
//! - That second pass also reaches markup inside those nodes: inline code in a
//!   link (`{{x}}`) comes out as `\{\{x}}` and loses its monospace form
//! - Attributes, titles, captions and table layout are accepted but never rendered

use std::borrow::Cow;

use jira_pandoc_types::{Attr, class_string};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DiagnosticSink, StreamSink};
use crate::escape::escape;
use crate::fallback::FallbackReporter;
use crate::list::{bullet_list, definition_list, ordered_list};
use crate::node::Node;
use crate::options::{BlockQuoteStyle, JIRA_FORMAT, MathStyle, ParagraphStyle, WriterOptions};
use crate::table::table;

static LANGUAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// Renders nodes to Jira markup, reporting unknown node types to `S`.
#[derive(Debug)]
pub struct JiraWriter<S = StreamSink<std::io::Stderr>> {
    options: WriterOptions,
    fallback: FallbackReporter<S>,
}

impl JiraWriter {
    /// A writer that reports unknown node types on stderr.
    pub fn new(options: WriterOptions) -> Self {
        Self::with_sink(options, StreamSink::stderr())
    }
}

impl Default for JiraWriter {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}

impl<S: DiagnosticSink> JiraWriter<S> {
    pub fn with_sink(options: WriterOptions, sink: S) -> Self {
        Self {
            options,
            fallback: FallbackReporter::new(sink),
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        self.fallback.sink()
    }

    pub fn into_sink(self) -> S {
        self.fallback.into_sink()
    }

    /// Render a single node whose children are already rendered.
    pub fn render(&mut self, node: Node) -> String {
        tracing::trace!(node = node.name(), "rendering node");
        match node {
            // ================================================================
            // Inline nodes
            // ================================================================
            Node::Str(text) => self.escape(&text).into_owned(),
            Node::Space => " ".to_string(),
            Node::SoftBreak => "\n".to_string(),
            Node::LineBreak => "\n\n".to_string(),

            Node::Emph(content) => format!("_{}_", content),
            Node::Strong(content) => format!("*{}*", content),
            Node::Subscript(content) => format!("~{}~", content),
            Node::Superscript(content) => format!("^{}^", content),
            Node::Strikeout(content) => format!("-{}-", content),
            // Jira has no small caps
            Node::SmallCaps(content) => content,

            Node::Code { text, .. } => format!("{{{{{}}}}}", text),

            Node::InlineMath(text) => {
                let text = self.escape(&text);
                match self.options.math {
                    MathStyle::Plain => text.into_owned(),
                    MathStyle::Delimited => format!("//({}//)", text),
                }
            }

            Node::Cite(content) => format!("??{}??", self.escape(&content)),
            // Jira has no footnotes; the note text stays inline.
            Node::Note(content) => self.escape(&content).into_owned(),

            Node::Link { text, target, .. } => format!("[{}|{}]", self.escape(&text), target),
            Node::Image { alt, src, .. } => format!("!{}|{}!", self.escape(&alt), src),

            Node::Span { content, .. } => content,

            Node::RawInline { format, text } | Node::RawBlock { format, text } => {
                raw_passthrough(&format, text)
            }

            // ================================================================
            // Block nodes
            // ================================================================
            Node::Plain(content) => content,
            Node::Para(content) | Node::Div { content, .. } => self.paragraph(content),

            Node::Header { level, content, .. } => format!("h{}. {}", level, content),

            Node::BlockQuote(content) => match self.options.block_quote {
                BlockQuoteStyle::Panel => format!("{{quote}}\n{}\n{{quote}}", content),
                BlockQuoteStyle::SingleLine => format!("bq. {}", content.trim()),
            },

            Node::HorizontalRule => "----".to_string(),

            Node::LineBlock(lines) => lines.join("\n"),

            Node::CodeBlock { text, attr } => {
                let open = match self.code_language(&attr) {
                    Some(lang) => format!("{{code:{}}}", lang),
                    None => "{code}".to_string(),
                };
                format!("{}\n{}\n{{code}}", open, text)
            }

            Node::BulletList { items, nesting } => bullet_list(&items, &nesting),
            Node::OrderedList { items, nesting } => ordered_list(&items, &nesting),
            Node::DefinitionList { items, nesting } => definition_list(&items, &nesting),

            Node::CaptionedImage {
                src,
                title,
                caption,
                attr,
            } => self.render(Node::Image {
                alt: caption,
                src,
                title,
                attr,
            }),

            Node::Table(node) => table(&node),

            Node::Other { name } => self.fallback.undefined_function(&name).call(()),
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape(text, self.options.escape)
    }

    fn paragraph(&self, content: String) -> String {
        match self.options.paragraph {
            ParagraphStyle::Bare => content,
            ParagraphStyle::Padded => format!("\n{}\n", content),
        }
    }

    /// First run of ASCII letters in the block's class list.
    fn code_language(&self, attr: &Attr) -> Option<String> {
        if !self.options.code_language {
            return None;
        }
        LANGUAGE
            .find(&class_string(attr))
            .map(|m| m.as_str().to_string())
    }
}

fn raw_passthrough(format: &str, text: String) -> String {
    if format == JIRA_FORMAT {
        text
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticCollector;
    use crate::node::{DefinitionItem, TableNode};
    use crate::options::EscapePolicy;
    use hashlink::LinkedHashMap;
    use jira_pandoc_types::empty_attr;
    use pretty_assertions::assert_eq;

    fn writer() -> JiraWriter<DiagnosticCollector> {
        JiraWriter::with_sink(WriterOptions::default(), DiagnosticCollector::new())
    }

    fn writer_with(options: WriterOptions) -> JiraWriter<DiagnosticCollector> {
        JiraWriter::with_sink(options, DiagnosticCollector::new())
    }

    fn classes(classes: &[&str]) -> Attr {
        (
            String::new(),
            classes.iter().map(|c| c.to_string()).collect(),
            LinkedHashMap::new(),
        )
    }

    fn render(node: Node) -> String {
        writer().render(node)
    }

    #[test]
    fn test_str_is_escaped() {
        assert_eq!(render(Node::Str("{panel}".to_string())), "\\{panel}");
    }

    #[test]
    fn test_str_unescaped_with_none_policy() {
        let mut w = writer_with(WriterOptions::default().with_escape(EscapePolicy::None));
        assert_eq!(w.render(Node::Str("{panel}".to_string())), "{panel}");
    }

    #[test]
    fn test_whitespace_nodes() {
        assert_eq!(render(Node::Space), " ");
        assert_eq!(render(Node::SoftBreak), "\n");
        assert_eq!(render(Node::LineBreak), "\n\n");
    }

    #[test]
    fn test_inline_wrappers() {
        let s = || "x".to_string();
        assert_eq!(render(Node::Emph(s())), "_x_");
        assert_eq!(render(Node::Strong(s())), "*x*");
        assert_eq!(render(Node::Subscript(s())), "~x~");
        assert_eq!(render(Node::Superscript(s())), "^x^");
        assert_eq!(render(Node::Strikeout(s())), "-x-");
        assert_eq!(render(Node::SmallCaps(s())), "x");
    }

    #[test]
    fn test_inline_code() {
        let node = Node::Code {
            text: "let x = {1};".to_string(),
            attr: classes(&["rust"]),
        };
        assert_eq!(render(node), "{{let x = {1};}}");
    }

    #[test]
    fn test_inline_math_styles() {
        let tex = || Node::InlineMath("e^{i\\pi}".to_string());
        assert_eq!(render(tex()), "e^\\{i\\pi}");

        let mut w = writer_with(WriterOptions::default().with_math(MathStyle::Delimited));
        assert_eq!(w.render(tex()), "//(e^\\{i\\pi}//)");
    }

    #[test]
    fn test_cite_and_note() {
        assert_eq!(render(Node::Cite("Knuth 1984".to_string())), "??Knuth 1984??");
        assert_eq!(render(Node::Note("see {appendix}".to_string())), "see \\{appendix}");
    }

    #[test]
    fn test_link_ignores_title() {
        let node = Node::Link {
            text: "docs".to_string(),
            target: "https://example.com".to_string(),
            title: "Documentation".to_string(),
            attr: empty_attr(),
        };
        assert_eq!(render(node), "[docs|https://example.com]");
    }

    #[test]
    fn test_link_text_not_double_escaped() {
        let mut w = writer();
        let text = w.render(Node::Str("{x}".to_string()));
        let link = w.render(Node::Link {
            text,
            target: "t".to_string(),
            title: String::new(),
            attr: empty_attr(),
        });
        assert_eq!(link, "[\\{x}|t]");
    }

    #[test]
    fn test_inline_code_in_link_is_escaped() {
        let mut w = writer();
        let text = w.render(Node::Code {
            text: "x".to_string(),
            attr: empty_attr(),
        });
        let link = w.render(Node::Link {
            text,
            target: "t".to_string(),
            title: String::new(),
            attr: empty_attr(),
        });
        assert_eq!(link, "[\\{\\{x}}|t]");
    }

    #[test]
    fn test_image() {
        let node = Node::Image {
            alt: "logo".to_string(),
            src: "logo.png".to_string(),
            title: "Company logo".to_string(),
            attr: empty_attr(),
        };
        assert_eq!(render(node), "!logo|logo.png!");
    }

    #[test]
    fn test_span_passes_content() {
        let node = Node::Span {
            content: "*kept*".to_string(),
            attr: classes(&["mark"]),
        };
        assert_eq!(render(node), "*kept*");
    }

    #[test]
    fn test_raw_passthrough() {
        let raw = |format: &str| Node::RawInline {
            format: format.to_string(),
            text: "{color:red}x{color}".to_string(),
        };
        assert_eq!(render(raw("jira")), "{color:red}x{color}");
        assert_eq!(render(raw("html")), "");

        let block = Node::RawBlock {
            format: "jira".to_string(),
            text: "{panel}p{panel}".to_string(),
        };
        assert_eq!(render(block), "{panel}p{panel}");
    }

    #[test]
    fn test_raw_other_format_is_silent() {
        let mut w = writer();
        w.render(Node::RawBlock {
            format: "latex".to_string(),
            text: "\\newpage".to_string(),
        });
        assert!(w.sink().is_empty());
    }

    #[test]
    fn test_plain_and_para() {
        assert_eq!(render(Node::Plain("text".to_string())), "text");
        assert_eq!(render(Node::Para("text".to_string())), "text");

        let mut w = writer_with(WriterOptions::default().with_paragraph(ParagraphStyle::Padded));
        assert_eq!(w.render(Node::Para("text".to_string())), "\ntext\n");
    }

    #[test]
    fn test_div_renders_as_paragraph() {
        let mut w = writer_with(WriterOptions::default().with_paragraph(ParagraphStyle::Padded));
        let div = Node::Div {
            content: "inside".to_string(),
            attr: classes(&["callout"]),
        };
        assert_eq!(w.render(div), "\ninside\n");
    }

    #[test]
    fn test_header() {
        let node = Node::Header {
            level: 2,
            content: "Install".to_string(),
            attr: empty_attr(),
        };
        assert_eq!(render(node), "h2. Install");
    }

    #[test]
    fn test_block_quote_panel() {
        assert_eq!(
            render(Node::BlockQuote("line one\n\nline two".to_string())),
            "{quote}\nline one\n\nline two\n{quote}"
        );
    }

    #[test]
    fn test_block_quote_single_line_trims() {
        let mut w =
            writer_with(WriterOptions::default().with_block_quote(BlockQuoteStyle::SingleLine));
        assert_eq!(w.render(Node::BlockQuote("\n  quoted \n".to_string())), "bq. quoted");
    }

    #[test]
    fn test_horizontal_rule_and_line_block() {
        assert_eq!(render(Node::HorizontalRule), "----");
        assert_eq!(
            render(Node::LineBlock(vec!["one".to_string(), "two".to_string()])),
            "one\ntwo"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let node = Node::CodeBlock {
            text: "x=1".to_string(),
            attr: empty_attr(),
        };
        assert_eq!(render(node), "{code}\nx=1\n{code}");
    }

    #[test]
    fn test_code_block_with_language() {
        let node = Node::CodeBlock {
            text: "x=1".to_string(),
            attr: classes(&["python", "foo"]),
        };
        assert_eq!(render(node), "{code:python}\nx=1\n{code}");
    }

    #[test]
    fn test_code_block_language_is_first_letter_run() {
        let node = Node::CodeBlock {
            text: "int main;".to_string(),
            attr: classes(&["c++"]),
        };
        assert_eq!(render(node), "{code:c}\nint main;\n{code}");
    }

    #[test]
    fn test_code_block_language_disabled() {
        let mut w = writer_with(WriterOptions::default().with_code_language(false));
        let node = Node::CodeBlock {
            text: "x=1".to_string(),
            attr: classes(&["python"]),
        };
        assert_eq!(w.render(node), "{code}\nx=1\n{code}");
    }

    #[test]
    fn test_code_block_content_not_escaped() {
        let node = Node::CodeBlock {
            text: "fn f() {}".to_string(),
            attr: empty_attr(),
        };
        assert_eq!(render(node), "{code}\nfn f() {}\n{code}");
    }

    #[test]
    fn test_lists() {
        let items = || vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            render(Node::BulletList {
                items: items(),
                nesting: String::new(),
            }),
            "* a\n* b"
        );
        assert_eq!(
            render(Node::OrderedList {
                items: items(),
                nesting: String::new(),
            }),
            "# a\n# b"
        );
        assert_eq!(
            render(Node::DefinitionList {
                items: vec![DefinitionItem {
                    term: "a".to_string(),
                    definitions: vec![],
                }],
                nesting: String::new(),
            }),
            "* a"
        );
    }

    #[test]
    fn test_nested_list_uses_enclosing_markers() {
        let node = Node::BulletList {
            items: vec!["x".to_string(), "y".to_string()],
            nesting: "#".to_string(),
        };
        assert_eq!(render(node), "#* x\n#* y");
    }

    #[test]
    fn test_list_item_continuation_lines_untouched() {
        let node = Node::BulletList {
            items: vec!["a\n* literal".to_string()],
            nesting: String::new(),
        };
        assert_eq!(render(node), "* a\n* literal");
    }

    #[test]
    fn test_captioned_image_uses_caption_as_alt() {
        let node = Node::CaptionedImage {
            src: "arch.png".to_string(),
            title: "fig:".to_string(),
            caption: "Architecture".to_string(),
            attr: empty_attr(),
        };
        assert_eq!(render(node), "!Architecture|arch.png!");
    }

    #[test]
    fn test_table() {
        let node = Node::Table(TableNode {
            headers: vec!["k".to_string(), "v".to_string()],
            rows: vec![vec!["a".to_string(), "1".to_string()]],
            ..Default::default()
        });
        assert_eq!(render(node), "||k||v||\n|a|1|");
    }

    #[test]
    fn test_unknown_node_renders_empty_and_warns() {
        let mut w = writer();
        assert_eq!(w.render(Node::other("Underline")), "");
        assert_eq!(
            w.sink().to_text(),
            vec!["WARNING: Undefined function 'Underline'".to_string()]
        );
    }

    #[test]
    fn test_known_nodes_do_not_warn() {
        let mut w = writer();
        w.render(Node::Str("x".to_string()));
        w.render(Node::HorizontalRule);
        assert!(w.into_sink().is_empty());
    }
}
