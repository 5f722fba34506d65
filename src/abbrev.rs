//! Abbreviation table: honorifics, titles and street types.
//!
//! The table is ordered data, not code. Each entry compiles to a
//! case-insensitive, whole-word regex that also swallows one trailing period:
//! `Dr.` → `doctor`, `ST` → `street`, but `Drive` and `Mrsx` are untouched.
//!
//! Entries are applied top to bottom, once each. Text produced by one entry
//! is never rescanned by that same entry.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::error::Result;

/// Built-in `(abbreviation, expansion)` pairs, in application order.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misses"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "street"),
    ("rd", "road"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

static BUILTIN: Lazy<AbbreviationTable> = Lazy::new(|| {
    AbbreviationTable::new(ABBREVIATIONS.iter().copied())
        .expect("built-in abbreviation table must compile")
});

/// A compiled, ordered abbreviation table.
#[derive(Debug, Clone)]
pub struct AbbreviationTable {
    entries: Vec<(Regex, String)>,
}

impl AbbreviationTable {
    /// Compile a table from `(abbreviation, expansion)` pairs.
    ///
    /// The abbreviation is matched literally (it is regex-escaped).
    pub fn new<I, A, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, E)>,
        A: AsRef<str>,
        E: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(abbr, full)| Ok((entry_regex(abbr.as_ref())?, full.into())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// The process-wide built-in table, compiled on first use.
    pub fn builtin() -> &'static AbbreviationTable {
        &BUILTIN
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(pattern, expansion)` in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&Regex, &str)> {
        self.entries.iter().map(|(re, full)| (re, full.as_str()))
    }

    /// Apply every entry once, in table order.
    pub fn expand(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (re, full) in &self.entries {
            text = re.replace_all(&text, NoExpand(full)).into_owned();
        }
        text
    }
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

fn entry_regex(abbr: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?i)\b{}\b\.?", regex::escape(abbr)))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> String {
        AbbreviationTable::builtin().expand(text)
    }

    #[test]
    fn test_builtin_order_matches_table() {
        let table = AbbreviationTable::builtin();
        assert_eq!(table.len(), ABBREVIATIONS.len());
        let expansions: Vec<&str> = table.iter().map(|(_, full)| full).collect();
        let expected: Vec<&str> = ABBREVIATIONS.iter().map(|(_, full)| *full).collect();
        assert_eq!(expansions, expected);
    }

    #[test]
    fn test_titles_and_streets() {
        assert_eq!(expand("Dr. Smith"), "doctor Smith");
        assert_eq!(expand("MR. and MRS. Jones"), "mister and misses Jones");
        assert_eq!(expand("123 St. Catherine Rd."), "123 street Catherine road");
        assert_eq!(expand("Drs. Who"), "doctors Who");
        assert_eq!(expand("Sgt Pepper"), "sergeant Pepper");
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(expand("Drive down Strand"), "Drive down Strand");
        assert_eq!(expand("cost of colour"), "cost of colour");
    }

    #[test]
    fn test_only_one_period_consumed() {
        assert_eq!(expand("Acme Co.."), "Acme company.");
    }

    #[test]
    fn test_expansions_are_not_rescanned() {
        // "mister" does not contain a whole-word trigger; a second run is a no-op.
        let once = expand("Mr. Dr. St. Co. Ltd.");
        assert_eq!(once, "mister doctor street company limited");
        assert_eq!(expand(&once), once);
    }

    #[test]
    fn test_custom_table_is_escaped() {
        let table = AbbreviationTable::new([("approx", "approximately"), ("a+b", "ab")]).unwrap();
        assert_eq!(table.expand("approx. ten"), "approximately ten");
        assert_eq!(table.expand("aab"), "aab");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = AbbreviationTable::new(Vec::<(&str, &str)>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.expand("Dr. Who"), "Dr. Who");
    }
}
