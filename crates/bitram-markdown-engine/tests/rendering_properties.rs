use bitram_markdown_engine::{BlockNode, InlineNode, render};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}

fn line(s: &str) -> Vec<InlineNode> {
    vec![text(s)]
}

#[rstest]
#[case("")]
#[case("   \n\t\n  ")]
#[case("***")]
#[case("```")]
#[case("****")]
#[case("![](")]
#[case("[](")]
#[case("#")]
#[case(">")]
#[case("🚀")]
fn render_is_total(#[case] input: &str) {
    // Must not panic; result shape is secondary here.
    let _ = render(input);
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert_eq!(render(""), vec![]);
}

#[test]
fn plain_text_is_one_paragraph() {
    assert_eq!(
        render("just some words"),
        vec![BlockNode::Paragraph {
            lines: vec![line("just some words")]
        }]
    );
}

#[test]
fn heading_boundary() {
    assert_eq!(
        render("# Title\nBody text"),
        vec![
            BlockNode::Heading {
                level: 1,
                inline: vec![text("Title")]
            },
            BlockNode::Paragraph {
                lines: vec![line("Body text")]
            },
        ]
    );
}

#[rstest]
#[case("# One", 1, "One")]
#[case("## Two", 2, "Two")]
#[case("### Three", 3, "Three")]
fn heading_levels(#[case] input: &str, #[case] level: u8, #[case] content: &str) {
    assert_eq!(
        render(input),
        vec![BlockNode::Heading {
            level,
            inline: vec![text(content)]
        }]
    );
}

#[test]
fn four_hashes_is_a_paragraph() {
    assert_eq!(
        render("#### deep"),
        vec![BlockNode::Paragraph {
            lines: vec![line("#### deep")]
        }]
    );
}

#[test]
fn fenced_code_is_verbatim() {
    assert_eq!(
        render("```\nlet x = 1;\n```"),
        vec![BlockNode::CodeFence {
            language: None,
            lines: vec!["let x = 1;".to_string()]
        }]
    );
}

#[test]
fn no_inline_parsing_inside_fences() {
    assert_eq!(
        render("```\n**not bold**\n```"),
        vec![BlockNode::CodeFence {
            language: None,
            lines: vec!["**not bold**".to_string()]
        }]
    );
}

#[test]
fn unterminated_fence_consumes_to_eof() {
    assert_eq!(
        render("```\nline1\nline2"),
        vec![BlockNode::CodeFence {
            language: None,
            lines: vec!["line1".to_string(), "line2".to_string()]
        }]
    );
}

#[test]
fn fence_language_is_captured() {
    assert_eq!(
        render("```python\npass\n```"),
        vec![BlockNode::CodeFence {
            language: Some("python".to_string()),
            lines: vec!["pass".to_string()]
        }]
    );
}

#[test]
fn consecutive_bullets_group_into_one_list() {
    assert_eq!(
        render("- a\n- b\n- c"),
        vec![BlockNode::BulletList {
            items: vec![line("a"), line("b"), line("c")]
        }]
    );
}

#[test]
fn mixed_bullet_markers_share_a_list() {
    assert_eq!(
        render("- a\n* b\n+ c"),
        vec![BlockNode::BulletList {
            items: vec![line("a"), line("b"), line("c")]
        }]
    );
}

#[test]
fn numbered_list_groups_and_ignores_indices() {
    assert_eq!(
        render("1. first\n7. second"),
        vec![BlockNode::NumberedList {
            items: vec![line("first"), line("second")]
        }]
    );
}

#[test]
fn mixed_inline_order_is_preserved() {
    let blocks = render(
        "Hello **world** and *italic* and `code` and [link](http://x) and ![alt](http://y)",
    );
    assert_eq!(
        blocks,
        vec![BlockNode::Paragraph {
            lines: vec![vec![
                text("Hello "),
                InlineNode::Strong {
                    children: vec![text("world")]
                },
                text(" and "),
                InlineNode::Emphasis {
                    text: "italic".to_string()
                },
                text(" and "),
                InlineNode::CodeSpan {
                    text: "code".to_string()
                },
                text(" and "),
                InlineNode::Link {
                    label: "link".to_string(),
                    href: "http://x".to_string()
                },
                text(" and "),
                InlineNode::Image {
                    alt: "alt".to_string(),
                    src: "http://y".to_string()
                },
            ]]
        }]
    );
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(
        render("Para one\n\nPara two"),
        vec![
            BlockNode::Paragraph {
                lines: vec![line("Para one")]
            },
            BlockNode::Paragraph {
                lines: vec![line("Para two")]
            },
        ]
    );
}

#[test]
fn paragraph_keeps_adjacent_lines_together() {
    assert_eq!(
        render("first line\nsecond line"),
        vec![BlockNode::Paragraph {
            lines: vec![line("first line"), line("second line")]
        }]
    );
}

#[rstest]
#[case("---")]
#[case("-----")]
#[case("  ---  ")]
fn horizontal_rule(#[case] input: &str) {
    assert_eq!(render(input), vec![BlockNode::ThematicBreak]);
}

#[test]
fn blockquote_strips_prefix_and_groups() {
    assert_eq!(
        render("> first\n> second"),
        vec![BlockNode::BlockQuote {
            lines: vec![line("first"), line("second")]
        }]
    );
}

#[test]
fn quote_inline_markup_is_parsed() {
    assert_eq!(
        render("> **loud** quote"),
        vec![BlockNode::BlockQuote {
            lines: vec![vec![
                InlineNode::Strong {
                    children: vec![text("loud")]
                },
                text(" quote"),
            ]]
        }]
    );
}

#[test]
fn crlf_input_renders_like_lf() {
    assert_eq!(render("# T\r\nbody\r\n"), render("# T\nbody\n"));
}

#[test]
fn block_precedence_is_per_line() {
    // A list line ends a paragraph; a rule ends a list; a heading stands alone.
    assert_eq!(
        render("intro\n- a\n---\n# done"),
        vec![
            BlockNode::Paragraph {
                lines: vec![line("intro")]
            },
            BlockNode::BulletList {
                items: vec![line("a")]
            },
            BlockNode::ThematicBreak,
            BlockNode::Heading {
                level: 1,
                inline: vec![text("done")]
            },
        ]
    );
}

#[test]
fn closing_fence_with_info_still_closes() {
    assert_eq!(
        render("```\ncode\n```rust\nafter"),
        vec![
            BlockNode::CodeFence {
                language: None,
                lines: vec!["code".to_string()]
            },
            BlockNode::Paragraph {
                lines: vec![line("after")]
            },
        ]
    );
}
