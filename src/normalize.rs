//! Text normalisation pipeline.
//!
//! Rewrites raw input text into a plain-ASCII, single-spaced form before it is
//! handed to a speech-synthesis front end. The passes always run in this order:
//!
//! 1. ASCII folding
//! 2. Abbreviation expansion
//! 3. Digit-group separator removal
//! 4. Currency normalisation
//! 5. Date normalisation (the only pass that can fail)
//! 6. Quote normalisation
//! 7. Whitespace collapsing
//! 8. Trim
//!
//! With the default config the output is a fixed point:
//! `normalize(normalize(x)) == normalize(x)`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace, warn};

use crate::{
    abbrev::AbbreviationTable,
    config::NormalizerConfig,
    dates::{format_spoken, parse_date_token},
    error::Result,
};

// ─────────────────────────────────────────────────────────────────────────────
// Compiled regexes (lazily initialised once)
// ─────────────────────────────────────────────────────────────────────────────

static RE_DIGIT_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d),(\d)").unwrap());
static RE_CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d{1,3}(?:,\d{3})*(?:\.\d+)?)").unwrap());
static RE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{2}[-/][0-9]{2}[-/][0-9]{2}\b").unwrap());
static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static DEFAULT_NORMALIZER: Lazy<TextNormalizer> = Lazy::new(TextNormalizer::new);

// ─────────────────────────────────────────────────────────────────────────────
// Passes
// ─────────────────────────────────────────────────────────────────────────────

/// Emoji, pictographs and their modifiers. These are spoken as nothing.
///
/// Covers the Extended_Pictographic code points plus keycap, variation
/// selector, joiner and tag characters. Text-style symbols (`©`, `®`, `™`,
/// plain arrows) are left for transliteration.
fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF
            | 0x2600..=0x27BF
            | 0x231A..=0x231B
            | 0x2328
            | 0x2388
            | 0x23CF
            | 0x23E9..=0x23F3
            | 0x23F8..=0x23FA
            | 0x24C2
            | 0x25AA..=0x25AB
            | 0x25B6
            | 0x25C0
            | 0x25FB..=0x25FE
            | 0x2934..=0x2935
            | 0x2B05..=0x2B07
            | 0x2B1B..=0x2B1C
            | 0x2B50
            | 0x2B55
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
            | 0x20E3
            | 0xFE00..=0xFE0F
            | 0x200D
            | 0xE0020..=0xE007F
    )
}

fn is_speakable(c: &char) -> bool {
    !c.is_control() || c.is_whitespace()
}

/// Transliterate to ASCII. Emoji and characters with no ASCII reading are
/// dropped, as are control characters other than whitespace.
pub fn convert_to_ascii(text: &str) -> String {
    if text.is_ascii() {
        return text.chars().filter(is_speakable).collect();
    }
    let stripped: String = text.chars().filter(|&c| !is_emoji(c)).collect();
    deunicode::deunicode_with_tofu(&stripped, "")
        .chars()
        .filter(is_speakable)
        .collect()
}

/// Expand honorifics and street types using the built-in table.
pub fn expand_abbreviations(text: &str) -> String {
    AbbreviationTable::builtin().expand(text)
}

/// Drop every comma that sits directly between two digits (`3,475` → `3475`).
///
/// Matches do not overlap, so `1,2,3` needs a second sweep; sweeps repeat
/// until nothing changes.
pub fn remove_digit_separators(text: &str) -> Cow<'_, str> {
    let mut out = match RE_DIGIT_SEPARATOR.replace_all(text, "${1}${2}") {
        Cow::Borrowed(_) => return Cow::Borrowed(text),
        Cow::Owned(s) => s,
    };
    loop {
        let next = match RE_DIGIT_SEPARATOR.replace_all(&out, "${1}${2}") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        out = next;
    }
    Cow::Owned(out)
}

/// Strip thousands separators from `$` amounts, keeping the symbol.
pub fn normalize_currency(text: &str) -> Cow<'_, str> {
    RE_CURRENCY.replace_all(text, |caps: &Captures| format!("${}", caps[1].replace(',', "")))
}

/// Rewrite `MM/DD/YY` and `MM-DD-YY` tokens as `Month DD, YYYY`.
///
/// Fails on the first token that is not a real calendar date; no partial
/// result is returned.
pub fn normalize_dates(text: &str, century_pivot: u8) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in RE_DATE.find_iter(text) {
        let date = match parse_date_token(m.as_str(), century_pivot) {
            Ok(date) => date,
            Err(e) => {
                warn!(token = m.as_str(), "rejecting invalid date");
                return Err(e);
            }
        };
        let spoken = format_spoken(date);
        debug!(token = m.as_str(), spoken = %spoken, "date rewritten");
        out.push_str(&text[last..m.start()]);
        out.push_str(&spoken);
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Straighten typographic quotes.
pub fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "\"").replace(['\u{2018}', '\u{2019}'], "'")
}

/// Replace every run of whitespace with a single space.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    RE_SPACES.replace_all(text, " ")
}

/// Normalise `text` with the default configuration.
///
/// ```
/// let out = ttsnorm::normalize("Dr. Smith paid $1,299.50 on 12/06/25.").unwrap();
/// assert_eq!(out, "doctor Smith paid $1299.50 on December 06, 2025.");
/// ```
pub fn normalize(text: &str) -> Result<String> {
    DEFAULT_NORMALIZER.process(text)
}

// ─────────────────────────────────────────────────────────────────────────────
// TextNormalizer: full pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// The configurable normalisation pipeline.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    pub config: NormalizerConfig,
    abbreviations: Cow<'static, AbbreviationTable>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::with_config(NormalizerConfig::default())
    }
}

impl TextNormalizer {
    /// Pipeline with every pass enabled and the built-in abbreviations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with the given config and the built-in abbreviations.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config, abbreviations: Cow::Borrowed(AbbreviationTable::builtin()) }
    }

    /// Use a caller-supplied abbreviation table instead of the built-in one.
    pub fn with_abbreviations(config: NormalizerConfig, table: AbbreviationTable) -> Self {
        Self { config, abbreviations: Cow::Owned(table) }
    }

    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    pub fn process(&self, text: &str) -> Result<String> {
        let cfg = &self.config;
        let mut text = text.to_string();

        if cfg.convert_to_ascii {
            text = convert_to_ascii(&text);
            trace!(pass = "convert_to_ascii", text = %text);
        }
        if cfg.expand_abbreviations {
            text = self.abbreviations.expand(&text);
            trace!(pass = "expand_abbreviations", text = %text);
        }
        if cfg.remove_digit_separators {
            text = remove_digit_separators(&text).into_owned();
            trace!(pass = "remove_digit_separators", text = %text);
        }
        if cfg.normalize_currency {
            text = normalize_currency(&text).into_owned();
            trace!(pass = "normalize_currency", text = %text);
        }
        if cfg.normalize_dates {
            text = normalize_dates(&text, cfg.century_pivot)?;
            trace!(pass = "normalize_dates", text = %text);
        }
        if cfg.normalize_quotes {
            text = normalize_quotes(&text);
            trace!(pass = "normalize_quotes", text = %text);
        }
        if cfg.collapse_whitespace {
            text = collapse_whitespace(&text).into_owned();
            trace!(pass = "collapse_whitespace", text = %text);
        }
        if cfg.trim {
            text = text.trim().to_string();
        }

        Ok(text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
