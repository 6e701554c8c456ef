use std::{io, path::PathBuf};

use thiserror::Error;

use crate::parser::Rule;

/// The result of a dump operation.
pub type DumpResult<T> = Result<T, DumpError>;

/// An error that occurred while turning a dump into a tree.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Tokenizer failure.
    #[error("failed to tokenize dump: {0}")]
    Lex(#[from] Box<pest::error::Error<Rule>>),

    /// A `(` with no matching `)` before the end of input.
    #[error("unbalanced parentheses: `(` at token {position} is never closed")]
    UnclosedParen { position: usize },

    /// A `)` with no matching `(`.
    #[error("unbalanced parentheses: `)` at token {position} has no matching `(`")]
    UnmatchedClose { position: usize },

    /// Nothing but structural markers (or nothing at all).
    #[error("dump is empty")]
    EmptyRoot,

    /// The outermost level opens with a nested group instead of a label.
    #[error("dump does not begin with a label")]
    NonLabelRoot,

    /// Nesting deeper than the processor allows.
    #[error("dump nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    /// Failed to read a dump file.
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Failed to write an export file.
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl DumpError {
    /// Whether the error is caused by the shape of the dump text itself.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DumpError::UnclosedParen { .. }
                | DumpError::UnmatchedClose { .. }
                | DumpError::EmptyRoot
                | DumpError::NonLabelRoot
                | DumpError::NestingTooDeep { .. }
        )
    }
}
