//! # ttsnorm
//!
//! Rule-based text normalisation for speech-synthesis input.
//!
//! ## Quick start
//!
//! ```
//! let out = ttsnorm::normalize("\u{201C}Mr. O\u{2019}Neill\u{201D} lives at 123 St. Catherine Rd.").unwrap();
//! assert_eq!(out, "\"mister O'Neill\" lives at 123 street Catherine road");
//! ```
//!
//! Individual passes can be switched off, and the two-digit-year pivot moved,
//! through [`NormalizerConfig`]:
//!
//! ```
//! use ttsnorm::{NormalizerConfig, TextNormalizer};
//!
//! let config = NormalizerConfig { century_pivot: 20, ..Default::default() };
//! let pp = TextNormalizer::with_config(config);
//! assert_eq!(pp.process("on 12/06/25").unwrap(), "on December 06, 1925");
//! ```
//!
//! ## Pipeline
//! 1. **ASCII folding**: accented letters transliterated, emoji dropped.
//! 2. **Abbreviations**: `Dr.` → `doctor`, `St.` → `street`, … (whole words only).
//! 3. **Digit groups**: `3,475` → `3475`.
//! 4. **Currency**: `$1,299.50` → `$1299.50`.
//! 5. **Dates**: `12/06/25` → `December 06, 2025`; invalid dates are an error.
//! 6. **Quotes**: typographic quotes straightened.
//! 7. **Whitespace**: runs collapsed to one space.
//! 8. **Trim**.

pub mod abbrev;
pub mod config;
pub mod dates;
pub mod error;
pub mod eval;
pub mod normalize;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use abbrev::AbbreviationTable;
pub use config::NormalizerConfig;
pub use error::{NormalizeError, Result};
pub use normalize::{normalize, TextNormalizer};
