// src/report/mod.rs
use crate::extractors::TermIndex;
use std::io::{self, Write};

/// Number of definition characters shown per occurrence.
pub const DEFINITION_PREVIEW_CHARS: usize = 100;

const HEADER: &str = "=== Term Extraction ===";

/// Renders the grouped term report. Terms come out in the index's (sorted) order,
/// occurrences in the order they were found.
pub fn write_report<W: Write>(out: &mut W, terms: &TermIndex) -> io::Result<()> {
    writeln!(out, "{}\n", HEADER)?;
    writeln!(out, "Found {} unique terms:\n", terms.len())?;

    for (term, occurrences) in terms {
        writeln!(out, "**{}**", term)?;
        for occurrence in occurrences {
            writeln!(out, "  - Chapter: {}", occurrence.chapter_id)?;
            writeln!(
                out,
                "    Definition: {}...",
                preview(&occurrence.definition)
            )?;
        }
        writeln!(out)?;
    }

    out.flush()
}

// Always cut by chars; the "..." marker is added unconditionally by the caller.
fn preview(definition: &str) -> &str {
    match definition.char_indices().nth(DEFINITION_PREVIEW_CHARS) {
        Some((idx, _)) => &definition[..idx],
        None => definition,
    }
}
