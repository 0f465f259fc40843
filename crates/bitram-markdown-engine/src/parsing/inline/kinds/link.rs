use crate::parsing::inline::{cursor::Cursor, types::InlineNode};

/// `[label](href)` link type with owned delimiter constants.
pub struct Link;

impl Link {
    /// Separator between the label bracket and the href parenthesis.
    pub const LABEL_END: &'static [u8; 2] = b"](";
    /// Opening bracket of the label.
    pub const OPEN: u8 = b'[';
    /// Closing parenthesis of the href.
    pub const CLOSE: u8 = b')';

    /// Scans a link at the cursor position.
    ///
    /// Label and href are both non-greedy raw captures and both must be
    /// non-empty; the cursor is untouched on failure.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }
        let label_start = cur.pos() + 1;
        let label_end = cur.find(Self::LABEL_END, label_start)?;
        let href_start = label_end + Self::LABEL_END.len();
        let href_end = cur.find(&[Self::CLOSE], href_start)?;
        if label_end == label_start || href_end == href_start {
            return None;
        }

        let label = cur.slice(label_start, label_end).to_string();
        let href = cur.slice(href_start, href_end).to_string();
        cur.seek(href_end + 1);
        Some(InlineNode::Link { label, href })
    }
}

/// `![alt](src)` image type with owned delimiter constants.
pub struct Image;

impl Image {
    /// The two-character image opener.
    pub const OPEN: &'static [u8; 2] = b"![";

    /// Scans an image at the cursor position.
    ///
    /// Alt text may be empty; the source must not be. The cursor is
    /// untouched on failure.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if !cur.starts_with(Self::OPEN) {
            return None;
        }
        let alt_start = cur.pos() + Self::OPEN.len();
        let alt_end = cur.find(Link::LABEL_END, alt_start)?;
        let src_start = alt_end + Link::LABEL_END.len();
        let src_end = cur.find(&[Link::CLOSE], src_start)?;
        if src_end == src_start {
            return None;
        }

        let alt = cur.slice(alt_start, alt_end).to_string();
        let src = cur.slice(src_start, src_end).to_string();
        cur.seek(src_end + 1);
        Some(InlineNode::Image { alt, src })
    }
}
