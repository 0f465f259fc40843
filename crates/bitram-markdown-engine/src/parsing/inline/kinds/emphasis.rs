use crate::parsing::inline::{cursor::Cursor, types::InlineNode};

/// Bold inline type (`**text**`).
pub struct Strong;

impl Strong {
    /// The two-character bold delimiter.
    pub const DELIM: &'static [u8; 2] = b"**";

    /// Scans a bold span at the cursor position.
    ///
    /// Non-greedy: closes at the first `**` after at least one byte of
    /// content. The capture is kept as a single raw text child, not
    /// re-scanned for nested markup. The cursor is untouched on failure.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if !cur.starts_with(Self::DELIM) {
            return None;
        }
        let content_start = cur.pos() + Self::DELIM.len();
        let close = cur.find(Self::DELIM, content_start + 1)?;
        let text = cur.slice(content_start, close).to_string();
        cur.seek(close + Self::DELIM.len());
        Some(InlineNode::Strong {
            children: vec![InlineNode::Text(text)],
        })
    }
}

/// Italic inline type (`*text*`).
pub struct Emphasis;

impl Emphasis {
    /// The italic delimiter.
    pub const DELIM: u8 = b'*';

    /// Scans an italic span at the cursor position.
    ///
    /// Tried after [`Strong`], so a well-formed `**bold**` never
    /// half-matches here. Non-greedy with at least one byte of content;
    /// the cursor is untouched on failure.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if cur.peek() != Some(Self::DELIM) {
            return None;
        }
        let content_start = cur.pos() + 1;
        let close = cur.find(&[Self::DELIM], content_start + 1)?;
        let text = cur.slice(content_start, close).to_string();
        cur.seek(close + 1);
        Some(InlineNode::Emphasis { text })
    }
}
