//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters.
//!
//! All delimiter constants and marker-matching logic live here, not in the
//! classifier. The classifier calls these helpers; it never hardcodes `#`,
//! `` ``` `` or `> ` itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
pub use thematic_break::ThematicBreak;
