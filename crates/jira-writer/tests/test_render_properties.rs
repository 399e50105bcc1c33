/*
 * test_render_properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property-based tests for single-node rendering.
 */

use jira_pandoc_types::empty_attr;
use jira_writer::escape::escape_braces;
use jira_writer::{DiagnosticCollector, JiraWriter, Node, TableNode, WriterOptions};
use proptest::prelude::*;

fn writer() -> JiraWriter<DiagnosticCollector> {
    JiraWriter::with_sink(WriterOptions::default(), DiagnosticCollector::new())
}

/// Every `{` in `text` directly follows a backslash.
fn all_braces_escaped(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .all(|(i, c)| *c != '{' || (i > 0 && chars[i - 1] == '\\'))
}

fn cell_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{1,8}"
}

proptest! {
    #[test]
    fn escaping_is_idempotent(text in "[a-z{}\\\\ ]{0,24}") {
        let once = escape_braces(&text).into_owned();
        prop_assert_eq!(escape_braces(&once), once.clone());
    }

    #[test]
    fn escaped_text_has_no_bare_brace(text in "[a-z{}\\\\ ]{0,24}") {
        prop_assert!(all_braces_escaped(&escape_braces(&text)));
    }

    #[test]
    fn str_rendering_matches_escape(text in "\\PC{0,24}") {
        let rendered = writer().render(Node::Str(text.clone()));
        prop_assert_eq!(rendered, escape_braces(&text).into_owned());
    }

    #[test]
    fn heading_form(level in 1usize..=6, content in "[A-Za-z ]{0,16}") {
        let rendered = writer().render(Node::Header {
            level,
            content: content.clone(),
            attr: empty_attr(),
        });
        prop_assert_eq!(rendered, format!("h{}. {}", level, content));
    }

    #[test]
    fn table_header_present_iff_any_cell_nonempty(
        headers in prop::collection::vec(prop_oneof![Just(String::new()), cell_text()], 1..5),
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 1..5), 0..4),
    ) {
        let node = TableNode {
            headers: headers.clone(),
            rows: rows.clone(),
            ..Default::default()
        };
        let rendered = writer().render(Node::Table(node));
        let has_header = headers.iter().any(|h| !h.is_empty());

        let mut expected: Vec<String> = Vec::new();
        if has_header {
            expected.push(format!("||{}||", headers.join("||")));
        }
        expected.extend(rows.iter().map(|row| format!("|{}|", row.join("|"))));
        prop_assert_eq!(rendered, expected.join("\n"));
    }

    #[test]
    fn raw_content_only_passes_for_jira(
        format in "[a-z]{1,8}",
        text in "[a-z{}|*_ ]{0,16}",
    ) {
        let mut w = writer();
        let inline = w.render(Node::RawInline { format: format.clone(), text: text.clone() });
        let block = w.render(Node::RawBlock { format: format.clone(), text: text.clone() });
        let expected = if format == "jira" { text.clone() } else { String::new() };
        prop_assert_eq!(inline, expected.clone());
        prop_assert_eq!(block, expected);
        prop_assert!(w.sink().is_empty());
    }

    #[test]
    fn link_form(text in "[A-Za-z ]{0,12}", target in "https://[a-z]{1,10}\\.com/[a-z]{0,6}") {
        let rendered = writer().render(Node::Link {
            text: text.clone(),
            target: target.clone(),
            title: "ignored".to_string(),
            attr: empty_attr(),
        });
        prop_assert_eq!(rendered, format!("[{}|{}]", text, target));
    }

    #[test]
    fn one_diagnostic_per_unknown_node(names in prop::collection::vec("[A-Z][a-zA-Z]{0,10}", 0..8)) {
        let mut w = writer();
        for name in &names {
            prop_assert_eq!(w.render(Node::other(name.clone())), "");
        }
        let expected: Vec<String> = names
            .iter()
            .map(|name| format!("WARNING: Undefined function '{}'", name))
            .collect();
        prop_assert_eq!(w.sink().to_text(), expected);
    }
}
