use serde::Serialize;

/// A typed fragment of text within a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// Bold (`**text**`). Holds children so a display layer can recurse,
    /// but the scanner does not re-parse the capture: there is always
    /// exactly one `Text` child.
    Strong { children: Vec<InlineNode> },
    /// Italic (`*text*`).
    Emphasis { text: String },
    /// Inline code (backtick-delimited). Raw zone; content is verbatim.
    CodeSpan { text: String },
    /// `[label](href)` link.
    Link { label: String, href: String },
    /// `![alt](src)` image.
    Image { alt: String, src: String },
}
