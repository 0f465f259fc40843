//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters and scanners.
//!
//! Each kind exposes a `scan` function that either consumes a complete
//! construct at the cursor position or leaves the cursor untouched. The
//! parser tries kinds in priority order and never hardcodes a delimiter.
//!
//! Captures are not re-scanned for nested markup; every `scan` returns a
//! node whose content is the raw captured substring.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link};
