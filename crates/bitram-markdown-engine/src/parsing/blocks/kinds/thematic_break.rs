/// Horizontal rule block type.
pub struct ThematicBreak;

impl ThematicBreak {
    /// The rule character.
    pub const DASH: char = '-';
    /// Minimum run length for a rule.
    pub const MIN_LEN: usize = 3;

    /// Whether the line, after trimming surrounding whitespace, is a run of
    /// three or more hyphens and nothing else.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && t.chars().all(|c| c == Self::DASH)
    }
}
