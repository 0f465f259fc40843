//! # Post Body Parsing
//!
//! Two-phase parsing of community post bodies into display nodes.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`blocks::classify`): Each line is classified
//!    independently into a `LineClass` containing local facts (heading marker,
//!    fence delimiter, quote prefix, list marker, blank status)
//!
//! 2. **Block Construction** (`blocks::builder`): A `BlockBuilder` consumes
//!    classified lines in order and emits `BlockNode`s as blocks open and close
//!
//! Inline content (emphasis, code spans, links, images) is parsed separately
//! per line by the `inline` module once a block's lines are known.
//!
//! ## Key Invariants
//!
//! - Parsing is total: any input string yields a node sequence, never an error
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Blank lines separate blocks and produce no node of their own
//! - Output is a pure function of the input; no state survives between calls

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode, LineClassifier};

/// Renders a raw post body into an ordered sequence of display blocks.
///
/// Total function: malformed markup degrades to plain paragraph text rather
/// than failing. The empty string yields an empty sequence.
///
/// Lines are split on `\n`; a trailing `\r` per line is dropped so CRLF
/// bodies classify the same as LF bodies.
pub fn render(raw_text: &str) -> Vec<BlockNode> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in raw_text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        builder.push(classifier.classify(line));
    }

    builder.finish()
}
