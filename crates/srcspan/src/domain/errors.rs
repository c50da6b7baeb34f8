//! Domain-specific errors.

use thiserror::Error;

/// Validation failure when constructing a [`Span`](crate::domain::model::Span).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "invalid span: start line {start_line}, end line {end_line}, end column {end_column}"
    )]
    InvalidSpan {
        start_line: usize,
        end_line: usize,
        end_column: usize,
    },
}

/// Why a span could not be resolved to source text.
///
/// Both variants are expected under positions produced by buggy front ends
/// and are absorbed into an absent result at the extraction boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no source line {line} is available")]
    MissingLine { line: usize },
    #[error("column {column} is past the end of line {line} ({length} characters)")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        length: usize,
    },
}
