use crate::parsing::inline::{self, InlineNode};

use super::{
    classify::{LineClass, LineSig},
    types::BlockNode,
};

/// The currently open multi-line leaf, if any.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Fence { language: Option<String>, lines: Vec<String> },
    Quote { lines: Vec<String> },
    Bullets { items: Vec<String> },
    Numbered { items: Vec<String> },
}

/// Builds blocks from classified lines.
///
/// Single forward pass, no backtracking: once a leaf is open it either
/// extends on a compatible line or is flushed and the new line opens its
/// own block. Open fences swallow every line until a fence delimiter or EOF.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match c.sig {
            LineSig::Heading { level, rest } => {
                self.flush();
                self.out.push(BlockNode::Heading {
                    level,
                    inline: inline::parse_inline(&rest),
                });
            }
            LineSig::Fence { info } => {
                self.flush();
                self.leaf = LeafState::Fence {
                    language: info,
                    lines: vec![],
                };
            }
            LineSig::Quote { rest } => self.extend_quote(rest),
            LineSig::Rule => {
                self.flush();
                self.out.push(BlockNode::ThematicBreak);
            }
            LineSig::Bullet { rest } => self.extend_bullets(rest),
            LineSig::Numbered { rest } => self.extend_numbered(rest),
            LineSig::Blank => self.flush(),
            LineSig::Text => self.extend_paragraph(c.text),
        }
    }

    /// Flushes the open leaf at end of input. An unterminated fence is
    /// emitted as a code block covering the rest of the document.
    pub fn finish(mut self) -> Vec<BlockNode> {
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: LineClass) {
        if matches!(c.sig, LineSig::Fence { .. }) {
            // Closing fence; its own info string is discarded.
            self.flush();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text);
        }
    }

    fn extend_paragraph(&mut self, line: String) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line);
        } else {
            self.flush();
            self.leaf = LeafState::Paragraph { lines: vec![line] };
        }
    }

    fn extend_quote(&mut self, rest: String) {
        if let LeafState::Quote { lines } = &mut self.leaf {
            lines.push(rest);
        } else {
            self.flush();
            self.leaf = LeafState::Quote { lines: vec![rest] };
        }
    }

    fn extend_bullets(&mut self, rest: String) {
        if let LeafState::Bullets { items } = &mut self.leaf {
            items.push(rest);
        } else {
            self.flush();
            self.leaf = LeafState::Bullets { items: vec![rest] };
        }
    }

    fn extend_numbered(&mut self, rest: String) {
        if let LeafState::Numbered { items } = &mut self.leaf {
            items.push(rest);
        } else {
            self.flush();
            self.leaf = LeafState::Numbered { items: vec![rest] };
        }
    }

    fn flush(&mut self) {
        let leaf = std::mem::replace(&mut self.leaf, LeafState::None);
        let node = match leaf {
            LeafState::None => return,
            LeafState::Paragraph { lines } => BlockNode::Paragraph {
                lines: parse_lines(&lines),
            },
            LeafState::Fence { language, lines } => BlockNode::CodeFence { language, lines },
            LeafState::Quote { lines } => BlockNode::BlockQuote {
                lines: parse_lines(&lines),
            },
            LeafState::Bullets { items } => BlockNode::BulletList {
                items: parse_lines(&items),
            },
            LeafState::Numbered { items } => BlockNode::NumberedList {
                items: parse_lines(&items),
            },
        };
        self.out.push(node);
    }
}

fn parse_lines(lines: &[String]) -> Vec<Vec<InlineNode>> {
    lines.iter().map(|l| inline::parse_inline(l)).collect()
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
