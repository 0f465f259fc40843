use crate::parsing::inline::{cursor::Cursor, types::InlineNode};

/// Inline code type with owned delimiter constant.
///
/// Code spans are raw zones: the capture is verbatim and other inline
/// markup inside it is never parsed.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Scans a code span at the cursor position.
    ///
    /// Requires at least one byte of content and a closing backtick; the
    /// cursor is untouched on failure.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if cur.peek() != Some(Self::TICK) {
            return None;
        }
        let content_start = cur.pos() + 1;
        let close = cur.find(&[Self::TICK], content_start + 1)?;
        let text = cur.slice(content_start, close).to_string();
        cur.seek(close + 1);
        Some(InlineNode::CodeSpan { text })
    }
}
