/// Fenced code block type with owned delimiter constant.
///
/// Code fences are "raw zones": content lines are kept verbatim and no
/// block or inline parsing happens inside them.
pub struct CodeFence;

impl CodeFence {
    /// The fence delimiter that opens and closes a code block.
    pub const FENCE: &'static str = "```";

    /// Whether this line is a fence delimiter (opening or closing).
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::FENCE)
    }

    /// Extracts the language from a fence line's info string.
    ///
    /// Only the first whitespace-delimited token is kept; a bare fence
    /// yields `None`.
    pub fn info(line: &str) -> Option<String> {
        let rest = line.strip_prefix(Self::FENCE)?;
        rest.split_whitespace().next().map(str::to_string)
    }
}
