//! Evaluation harness. Runs a fixed corpus through a [`TextNormalizer`] and
//! reports correctness, runtime and length change per sample.
//!
//! The report renders as a GitHub-markdown table followed by three summary
//! lines; rows and summary also serialise to JSON.

use std::fmt::Write as _;
use std::time::Instant;

use serde::Serialize;

use crate::normalize::TextNormalizer;

/// An input and the output the default pipeline must produce for it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EvalSample {
    pub original: &'static str,
    pub expected: &'static str,
}

/// Built-in corpus: honorifics, street types, grouped digits, currency,
/// dates, typographic quotes and emoji.
pub const BUILTIN_SAMPLES: &[EvalSample] = &[
    EvalSample {
        original: "Dr. José bought 3,475 shares of Ångström-Tech for $1,299.50 each on 12/06/25. 🚀",
        expected: "doctor Jose bought 3475 shares of Angstrom-Tech for $1299.50 each on December 06, 2025.",
    },
    EvalSample {
        original: "\u{201C}Mr. O\u{2019}Neill\u{201D} lives at 123 St. Catherine Rd.",
        expected: "\"mister O'Neill\" lives at 123 street Catherine road",
    },
    EvalSample {
        original: "He said, \u{201C}That\u{2019}s $3,003, okay?\u{201D}",
        expected: "He said, \"That's $3003, okay?\"",
    },
    EvalSample {
        original: "On 01/02/23, Dr. Smith and Dr. Jones arrived.",
        expected: "On January 02, 2023, doctor Smith and doctor Jones arrived.",
    },
    EvalSample {
        original: "The total is $12,000 and the date is 07/04/22.",
        expected: "The total is $12000 and the date is July 04, 2022.",
    },
];

/// Result of running one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalRow {
    pub id: usize,
    pub correct: bool,
    pub runtime_ms: f64,
    pub len_before: usize,
    pub len_after: usize,
    /// `len_before - len_after`: positive means the text got shorter.
    pub reduction: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalSummary {
    pub samples: usize,
    pub accuracy_pct: f64,
    pub mean_runtime_ms: f64,
    pub mean_reduction: f64,
}

/// Run every sample through `normalizer`. Ids start at 1.
pub fn evaluate(normalizer: &TextNormalizer, samples: &[EvalSample]) -> Vec<EvalRow> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let t0 = Instant::now();
            let result = normalizer.process(sample.original);
            let runtime_ms = t0.elapsed().as_secs_f64() * 1_000.0;

            let len_before = sample.original.chars().count();
            let (correct, len_after, error) = match result {
                Ok(out) => (out == sample.expected, out.chars().count(), None),
                Err(e) => (false, 0, Some(e.to_string())),
            };
            EvalRow {
                id: i + 1,
                correct,
                runtime_ms: (runtime_ms * 1_000.0).round() / 1_000.0,
                len_before,
                len_after,
                reduction: len_before as i64 - len_after as i64,
                error,
            }
        })
        .collect()
}

pub fn summarize(rows: &[EvalRow]) -> EvalSummary {
    if rows.is_empty() {
        return EvalSummary { samples: 0, accuracy_pct: 0.0, mean_runtime_ms: 0.0, mean_reduction: 0.0 };
    }
    let n = rows.len() as f64;
    let correct = rows.iter().filter(|r| r.correct).count() as f64;
    EvalSummary {
        samples: rows.len(),
        accuracy_pct: correct / n * 100.0,
        mean_runtime_ms: rows.iter().map(|r| r.runtime_ms).sum::<f64>() / n,
        mean_reduction: rows.iter().map(|r| r.reduction as f64).sum::<f64>() / n,
    }
}

/// GitHub-markdown table of `rows` followed by the summary lines.
pub fn render_markdown(rows: &[EvalRow], summary: &EvalSummary) -> String {
    let mut out = String::new();
    out.push_str("| id | correct | runtime_ms | len_before | len_after | reduction |\n");
    out.push_str("|----|---------|------------|------------|-----------|-----------|\n");
    for r in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {:.3} | {} | {} | {} |",
            r.id, r.correct, r.runtime_ms, r.len_before, r.len_after, r.reduction
        );
    }
    out.push('\n');
    let _ = writeln!(out, "Overall accuracy  : {:.1}%", summary.accuracy_pct);
    let _ = writeln!(out, "Mean runtime      : {:.3} ms", summary.mean_runtime_ms);
    let _ = writeln!(out, "Mean length delta : {:.1} chars", summary.mean_reduction);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: usize, correct: bool, runtime_ms: f64, reduction: i64) -> EvalRow {
        EvalRow { id, correct, runtime_ms, len_before: 10, len_after: (10 - reduction) as usize, reduction, error: None }
    }

    #[test]
    fn test_builtin_corpus_passes() {
        let rows = evaluate(&TextNormalizer::new(), BUILTIN_SAMPLES);
        assert_eq!(rows.len(), BUILTIN_SAMPLES.len());
        for r in &rows {
            assert!(r.correct, "sample {} failed: {:?}", r.id, r);
            assert!(r.error.is_none());
        }
        assert_eq!(summarize(&rows).accuracy_pct, 100.0);
    }

    #[test]
    fn test_lengths_count_chars() {
        let samples = [EvalSample { original: "Dr.  é", expected: "doctor e" }];
        let rows = evaluate(&TextNormalizer::new(), &samples);
        assert!(rows[0].correct);
        assert_eq!(rows[0].len_before, 6);
        assert_eq!(rows[0].len_after, 8);
        assert_eq!(rows[0].reduction, -2);
    }

    #[test]
    fn test_failure_is_recorded() {
        let samples = [EvalSample { original: "due 13/40/99", expected: "" }];
        let rows = evaluate(&TextNormalizer::new(), &samples);
        assert!(!rows[0].correct);
        assert!(rows[0].error.as_deref().unwrap_or("").contains("13/40/99"));
    }

    #[test]
    fn test_summary_math() {
        let rows = [row(1, true, 1.0, 4), row(2, false, 3.0, -2)];
        let s = summarize(&rows);
        assert_eq!(s.samples, 2);
        assert_eq!(s.accuracy_pct, 50.0);
        assert_eq!(s.mean_runtime_ms, 2.0);
        assert_eq!(s.mean_reduction, 1.0);
    }

    #[test]
    fn test_summary_empty() {
        let s = summarize(&[]);
        assert_eq!(s.samples, 0);
        assert_eq!(s.accuracy_pct, 0.0);
    }

    #[test]
    fn test_render_markdown() {
        let rows = [row(1, true, 0.0126, 3)];
        let md = render_markdown(&rows, &summarize(&rows));
        assert!(md.starts_with("| id | correct |"), "got: {}", md);
        assert!(md.contains("| 1 | true | 0.013 | 10 | 7 | 3 |"), "got: {}", md);
        assert!(md.contains("Overall accuracy  : 100.0%"), "got: {}", md);
    }
}
