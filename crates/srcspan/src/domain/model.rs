//! Domain models for node spans.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Line/column region of a syntax-tree node.
///
/// Lines are 1-based and the range is inclusive. `end_column` is 1-based and
/// exclusive: extracted text on the final line stops just before the
/// character at that column, so `end_column == length + 1` keeps the whole
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    /// Build a span, validating the positional invariants.
    pub fn new(
        start_line: usize,
        end_line: usize,
        end_column: usize,
    ) -> Result<Self, DomainError> {
        if start_line == 0 || end_column == 0 || end_line < start_line {
            return Err(DomainError::InvalidSpan {
                start_line,
                end_line,
                end_column,
            });
        }
        Ok(Self {
            start_line,
            end_line,
            end_column,
        })
    }

    /// Span covering part of a single line.
    pub fn single_line(line: usize, end_column: usize) -> Result<Self, DomainError> {
        Self::new(line, line, end_column)
    }

    /// Number of lines the span touches.
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_spans() {
        let span = Span::new(2, 5, 3).unwrap();
        assert_eq!(span.start_line, 2);
        assert_eq!(span.end_line, 5);
        assert_eq!(span.end_column, 3);
        assert_eq!(span.line_count(), 4);
    }

    #[test]
    fn single_line_covers_one_line() {
        let span = Span::single_line(7, 12).unwrap();
        assert_eq!(span.start_line, span.end_line);
        assert_eq!(span.line_count(), 1);
    }

    #[test]
    fn rejects_zero_positions_and_inverted_ranges() {
        assert!(matches!(
            Span::new(0, 1, 1),
            Err(DomainError::InvalidSpan { .. })
        ));
        assert!(matches!(
            Span::new(1, 1, 0),
            Err(DomainError::InvalidSpan { .. })
        ));
        assert!(matches!(
            Span::new(4, 2, 1),
            Err(DomainError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn spans_round_trip_through_json() {
        let span = Span::new(1, 3, 9).unwrap();
        let data = serde_json::to_string(&span).unwrap();
        let parsed: Span = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed, span);
    }
}
