// src/extractors/term.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

// --- Constants ---
/// How far back (in characters) from a match we look for a chapter anchor.
pub const LOOKBACK_CHARS: usize = 500;

/// Chapter identifier used when no anchor is found in the lookback window.
pub const UNKNOWN_CHAPTER: &str = "unknown";

// --- Regex Patterns (Lazy Static) ---
// <strong>Term</strong>: definition text.   or   <b>Term</b>: definition text.
// The term may not contain markup, the definition runs to the first period.
static BOLD_TERM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(?:strong|b)>([^<]+)</(?:strong|b)>:\s*([^<.]+[.])")
        .expect("Failed to compile BOLD_TERM_RE")
});

// Any id attribute whose value contains "ch" (ch3, chapter-2, ch3-intro, ...)
static CHAPTER_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"id="([^"]*ch[^"]*)""#).expect("Failed to compile CHAPTER_ID_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub chapter_id: String, // e.g., "ch3-intro" or "unknown"
    pub definition: String, // Trimmed, ends with the terminating period
}

/// Term -> occurrences in document order. Ordered by term for reporting.
pub type TermIndex = BTreeMap<String, Vec<Occurrence>>;

/// Scans raw HTML for bolded terms followed by a colon and a one-sentence definition.
///
/// Never fails: input without matches produces an empty index.
pub fn extract_terms(html_content: &str) -> TermIndex {
    let mut terms = TermIndex::new();

    for caps in BOLD_TERM_RE.captures_iter(html_content) {
        let (Some(whole), Some(term), Some(definition)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        let chapter_id = find_chapter_id(html_content, whole.start());
        let term = term.as_str().trim().to_string();
        let definition = definition.as_str().trim().to_string();

        tracing::debug!(
            "Found term '{}' at byte {} (chapter: {})",
            term,
            whole.start(),
            chapter_id
        );

        terms.entry(term).or_default().push(Occurrence {
            chapter_id,
            definition,
        });
    }

    tracing::info!(
        "Extraction finished: {} unique terms, {} occurrences",
        terms.len(),
        terms.values().map(Vec::len).sum::<usize>()
    );

    terms
}

/// Returns the id of the nearest chapter anchor within `LOOKBACK_CHARS` before `match_start`.
fn find_chapter_id(html_content: &str, match_start: usize) -> String {
    let window = lookback_window(html_content, match_start);

    match CHAPTER_ID_RE.captures_iter(window).last().and_then(|c| c.get(1)) {
        Some(id) => {
            tracing::trace!("Chapter anchor '{}' found before byte {}", id.as_str(), match_start);
            id.as_str().to_string()
        }
        None => {
            tracing::trace!("No chapter anchor within {} chars before byte {}", LOOKBACK_CHARS, match_start);
            UNKNOWN_CHAPTER.to_string()
        }
    }
}

/// The last `LOOKBACK_CHARS` characters before `end`, sliced on a char boundary.
fn lookback_window(html_content: &str, end: usize) -> &str {
    let before = &html_content[..end];
    let start = before
        .char_indices()
        .rev()
        .nth(LOOKBACK_CHARS - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &before[start..]
}
