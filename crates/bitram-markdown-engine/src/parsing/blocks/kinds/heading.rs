/// ATX heading block type with owned delimiter knowledge.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest supported heading level. `####` and beyond is paragraph text.
    pub const MAX_LEVEL: u8 = 3;

    /// Parses a heading marker at the start of a line.
    ///
    /// Matches one to three `#` characters followed by at least one
    /// whitespace character; the whitespace run is consumed and the rest of
    /// the line is the heading content.
    ///
    /// # Returns
    /// `(level, content)` on a match, `None` otherwise (including four or
    /// more hashes, or a hash run with no trailing whitespace).
    pub fn parse_marker(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }

        let rest = &line[hashes..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            // No whitespace after the marker run
            return None;
        }

        Some((hashes as u8, trimmed))
    }
}
