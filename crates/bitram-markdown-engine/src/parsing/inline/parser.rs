use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link, Strong},
    types::InlineNode,
};

/// Parses one block line into a sequence of [`InlineNode`]s.
///
/// Scans left to right; at each position the kinds are tried in priority
/// order (image, strong, emphasis, code span, link) and the first match
/// wins. Strong is tried before emphasis so `**` never half-matches as an
/// italic opener. Unmatched delimiters fall through as plain text, so the
/// function is total over any input.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let at = cur.pos();
        if let Some(node) = scan_at(&mut cur) {
            flush_text(&mut out, s, text_start, at);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Tries each inline kind at the current position in priority order.
fn scan_at(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if let Some(node) = Image::scan(cur) {
        return Some(node);
    }
    if let Some(node) = Strong::scan(cur) {
        return Some(node);
    }
    if let Some(node) = Emphasis::scan(cur) {
        return Some(node);
    }
    if let Some(node) = CodeSpan::scan(cur) {
        return Some(node);
    }
    Link::scan(cur)
}

/// Emits accumulated plain text as a `Text` node.
fn flush_text(out: &mut Vec<InlineNode>, s: &str, start: usize, end: usize) {
    if end > start {
        out.push(InlineNode::Text(s[start..end].to_string()));
    }
}
