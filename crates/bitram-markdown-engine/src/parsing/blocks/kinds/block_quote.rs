/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The two-character quote prefix stripped from each quoted line.
    pub const PREFIX: &'static str = "> ";

    /// Strips the quote prefix from a line.
    ///
    /// Returns the quoted content, or `None` when the line is not quoted.
    /// A bare `>` with no trailing space is not a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
