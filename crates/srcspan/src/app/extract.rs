//! Reconstruction of the source text behind a node span.
//!
//! The reconstructed text keeps leading whitespace exactly as written, which
//! report renderers rely on for indentation. Lines are rejoined with a single
//! `\n`; the original terminators are not preserved.

use tracing::debug;

use crate::domain::errors::ExtractError;
use crate::domain::model::Span;
use crate::infra::source::LineSource;

/// Reconstruct the text covered by `span`, or `None` when the source cannot
/// satisfy it.
///
/// A missing line and an end column past the final line both collapse to
/// `None`: node positions from the front end can be inaccurate, and callers
/// render a placeholder instead of failing their larger operation. An empty
/// string is a valid present result and is distinct from `None`.
pub fn extract(span: Span, source: &impl LineSource) -> Option<String> {
    match try_extract(span, source) {
        Ok(text) => Some(text),
        Err(err) => {
            debug!(%err, start_line = span.start_line, "source text unavailable for span");
            None
        }
    }
}

/// Fallible variant of [`extract`] reporting which condition failed.
///
/// The distinction is diagnostic only; the public contract treats both
/// failure kinds identically. No partial text is ever returned.
pub fn try_extract(span: Span, source: &impl LineSource) -> Result<String, ExtractError> {
    let mut text = String::new();
    for number in span.start_line..=span.end_line {
        let line = source
            .line(number)
            .ok_or(ExtractError::MissingLine { line: number })?;

        if number == span.end_line {
            let kept = span
                .end_column
                .checked_sub(1)
                .and_then(|chars| prefix(line, chars));
            match kept {
                Some(prefix) => text.push_str(prefix),
                None => {
                    return Err(ExtractError::ColumnOutOfRange {
                        line: number,
                        column: span.end_column,
                        length: line.chars().count(),
                    });
                }
            }
        } else {
            text.push_str(line);
            text.push('\n');
        }
    }
    Ok(text)
}

/// Prefix of `line` spanning `chars` characters, or `None` when the line is
/// shorter than that. Counts characters, not bytes.
fn prefix(line: &str, chars: usize) -> Option<&str> {
    if chars == 0 {
        return Some("");
    }
    line.char_indices()
        .nth(chars - 1)
        .map(|(index, ch)| &line[..index + ch.len_utf8()])
}

/// Per-node lookup bound to one source, the calling shape a report generator
/// uses while walking a syntax tree.
#[derive(Debug)]
pub struct SourceLookup<'a, S: LineSource> {
    source: &'a S,
}

impl<'a, S: LineSource> SourceLookup<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Same contract as [`extract`].
    pub fn lookup(&self, span: Span) -> Option<String> {
        extract(span, self.source)
    }
}
