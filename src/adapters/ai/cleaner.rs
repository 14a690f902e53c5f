//! Cleanup for model-generated summaries.
//!
//! Small summarization models stutter ("Patient Patient has no no issues..")
//! and often stop mid-sentence. This pass removes those artifacts. It is only
//! applied to external summarizer output, never to the rule-based report.

use regex::Regex;
use std::sync::LazyLock;

/// Trailing text after the final period shorter than this is dropped.
const MIN_TRAILING_FRAGMENT_CHARS: usize = 10;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static COLON_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(?:\s*:)+").expect("valid colon regex"));

static PERIOD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid period regex"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Normalize a model summary. Idempotent: `clean_summary(&clean_summary(s)) == clean_summary(s)`.
pub fn clean_summary(summary: &str) -> String {
    let text = WHITESPACE_RUN.replace_all(summary, " ");
    let text = COLON_RUN.replace_all(&text, ":");
    let text = PERIOD_RUN.replace_all(&text, ".");
    let text = collapse_repeated_words(&text);
    let text = drop_trailing_fragment(text.trim());
    capitalize_first(text.trim())
}

/// "no No no issues" -> "no issues". Only words separated by whitespace alone
/// count as repeated; the first spelling is kept.
fn collapse_repeated_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut previous: Option<&str> = None;

    for word in WORD.find_iter(text) {
        let gap = &text[last_end..word.start()];
        let repeated = previous.is_some_and(|prev| {
            !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && fold_case(prev) == fold_case(word.as_str())
        });
        if !repeated {
            out.push_str(gap);
            out.push_str(word.as_str());
            previous = Some(word.as_str());
        }
        last_end = word.end();
    }
    out.push_str(&text[last_end..]);
    out
}

/// Case-insensitive key. Goes through uppercase first so that a word and its
/// capitalized form ("ß" / "SS") compare equal.
fn fold_case(word: &str) -> String {
    word.to_uppercase().to_lowercase()
}

fn drop_trailing_fragment(text: &str) -> String {
    match text.rfind('.') {
        Some(last_period)
            if text[last_period + 1..].trim().chars().count() < MIN_TRAILING_FRAGMENT_CHARS =>
        {
            text[..=last_period].to_string()
        }
        _ => text.to_string(),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
