use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// What a line looks like on its own, before any block context is applied.
///
/// Openers are tested in a fixed precedence order and the first match wins;
/// `Text` is the fallback. The builder decides what the signature means in
/// context (e.g. any line inside an open fence is raw content).
#[derive(Debug, Clone, PartialEq)]
pub enum LineSig {
    /// Heading marker with its level and remaining content.
    Heading { level: u8, rest: String },
    /// Fence delimiter line, with the info-string language when present.
    Fence { info: Option<String> },
    /// Quote line with the `> ` prefix stripped.
    Quote { rest: String },
    /// Horizontal rule line.
    Rule,
    /// Bullet list item with the marker stripped.
    Bullet { rest: String },
    /// Numbered list item with the marker stripped.
    Numbered { rest: String },
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else; paragraph content.
    Text,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq)]
pub struct LineClass {
    /// The line verbatim (trailing carriage return already removed).
    pub text: String,
    /// The matched opener signature.
    pub sig: LineSig,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: heading, fence, quote, rule, bullet, numbered, blank;
    /// everything else is paragraph text.
    pub fn classify(&self, line: &str) -> LineClass {
        let sig = if let Some((level, rest)) = Heading::parse_marker(line) {
            LineSig::Heading {
                level,
                rest: rest.to_string(),
            }
        } else if CodeFence::is_fence(line) {
            LineSig::Fence {
                info: CodeFence::info(line),
            }
        } else if let Some(rest) = BlockQuote::strip_prefix(line) {
            LineSig::Quote {
                rest: rest.to_string(),
            }
        } else if ThematicBreak::matches(line) {
            LineSig::Rule
        } else if let Some(rest) = ListMarker::bullet(line) {
            LineSig::Bullet {
                rest: rest.to_string(),
            }
        } else if let Some(rest) = ListMarker::numbered(line) {
            LineSig::Numbered {
                rest: rest.to_string(),
            }
        } else if line.trim().is_empty() {
            LineSig::Blank
        } else {
            LineSig::Text
        };

        LineClass {
            text: line.to_string(),
            sig,
        }
    }
}
