//! # HTML Emission
//!
//! Maps rendered block trees to HTML fragments. Post bodies are untrusted
//! user input, so every text payload goes through `html_escape` and every
//! attribute through its double-quoted-attribute encoder.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::blocks::BlockNode;
use crate::parsing::inline::InlineNode;

/// Emits an HTML fragment for a rendered post body.
pub fn to_html(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for block in blocks {
        push_block(&mut out, block);
    }
    out
}

/// Wraps the fragment in a minimal standalone page.
pub fn to_document(blocks: &[BlockNode], title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(title)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&to_html(blocks));
    out.push_str("</body>\n</html>\n");
    out
}

fn push_block(out: &mut String, block: &BlockNode) {
    match block {
        BlockNode::Heading { level, inline } => {
            out.push_str(&format!("<h{level}>"));
            push_inline_seq(out, inline);
            out.push_str(&format!("</h{level}>\n"));
        }
        BlockNode::Paragraph { lines } => {
            out.push_str("<p>");
            push_broken_lines(out, lines);
            out.push_str("</p>\n");
        }
        BlockNode::CodeFence { language, lines } => {
            match language {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    encode_double_quoted_attribute(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            for line in lines {
                out.push_str(&encode_text(line));
                out.push('\n');
            }
            out.push_str("</code></pre>\n");
        }
        BlockNode::BlockQuote { lines } => {
            out.push_str("<blockquote><p>");
            push_broken_lines(out, lines);
            out.push_str("</p></blockquote>\n");
        }
        BlockNode::BulletList { items } => push_list(out, "ul", items),
        BlockNode::NumberedList { items } => push_list(out, "ol", items),
        BlockNode::ThematicBreak => out.push_str("<hr>\n"),
    }
}

fn push_list(out: &mut String, tag: &str, items: &[Vec<InlineNode>]) {
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        out.push_str("<li>");
        push_inline_seq(out, item);
        out.push_str("</li>\n");
    }
    out.push_str(&format!("</{tag}>\n"));
}

/// Joins per-block lines with `<br>`, none after the last.
fn push_broken_lines(out: &mut String, lines: &[Vec<InlineNode>]) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        push_inline_seq(out, line);
    }
}

fn push_inline_seq(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        push_inline(out, node);
    }
}

fn push_inline(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(t) => out.push_str(&encode_text(t)),
        InlineNode::Strong { children } => {
            out.push_str("<strong>");
            push_inline_seq(out, children);
            out.push_str("</strong>");
        }
        InlineNode::Emphasis { text } => {
            out.push_str("<em>");
            out.push_str(&encode_text(text));
            out.push_str("</em>");
        }
        InlineNode::CodeSpan { text } => {
            out.push_str("<code>");
            out.push_str(&encode_text(text));
            out.push_str("</code>");
        }
        InlineNode::Link { label, href } => {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(href),
                encode_text(label)
            ));
        }
        InlineNode::Image { alt, src } => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(alt)
            ));
        }
    }
}
