//! Error types for parsing and importing VMF files

use crate::float_types::Real;
use std::path::PathBuf;
use thiserror::Error;

/// The syntax faults the block parser can run into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A quoted string was expected but the next character is not `"`
    #[error("expected to find opening double-quote character when parsing string")]
    ExpectedQuote,
    /// End of input reached before the closing `"`
    #[error("encountered EOF while reading string '{0}'")]
    UnterminatedString(String),
    /// A property key is not followed by a quoted value
    #[error("expected value to follow key '{0}'")]
    MissingValue(String),
    /// A block name is not followed by `{`
    #[error("expected '{{' after block name '{0}'")]
    ExpectedOpenBrace(String),
    /// End of input reached before the block's closing `}`
    #[error("missing '}}' to close block '{0}'")]
    UnterminatedBlock(String),
    /// A `{` appeared where a block name was expected
    #[error("expected block name before '{{'")]
    MissingBlockName,
    /// Blocks nested deeper than the parser accepts
    #[error("blocks nested too deeply inside '{0}'")]
    NestingTooDeep(String),
}

/// A syntax fault together with the line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line {line}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Line number (1-indexed).
    pub line: usize,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

/// Problems extracting a [`Plane`](crate::brush::plane::Plane) from a `side` block.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaneError {
    /// The `side` block has no `plane` property
    #[error("side has no 'plane' property")]
    Missing,
    /// The property does not hold three parenthesized points
    #[error("malformed plane '{0}'")]
    Malformed(String),
    /// A coordinate could not be parsed as a number
    #[error("invalid coordinate '{0}' in plane")]
    InvalidNumber(String),
    /// The three points are collinear or coincident
    #[error("plane points are collinear")]
    Degenerate,
}

/// Everything that can abort an import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid VMF.
    #[error("Malformed VMF file: {kind} on line {line} of '{filename}'")]
    Syntax {
        kind: ParseErrorKind,
        line: usize,
        filename: String,
    },

    /// Scale must be finite and positive.
    #[error("invalid scale {0}: must be a finite number greater than zero")]
    InvalidScale(Real),
}

impl ImportError {
    /// Attach a file name to a parse fault.
    pub fn syntax(error: ParseError, filename: impl Into<String>) -> Self {
        Self::Syntax {
            kind: error.kind,
            line: error.line,
            filename: filename.into(),
        }
    }

    /// Line the fault was found on, if it is a syntax fault.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}
