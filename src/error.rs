//! Error types for board setup
//!
//! Move generation and search are infallible by construction; the only
//! fallible entry point is FEN parsing, which reports exactly what was
//! wrong with the input. A failed load leaves the board empty rather than
//! half-populated.

use crate::types::PieceColor;
use thiserror::Error;

/// Errors produced while parsing a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// One of the six space-separated fields is absent.
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),

    /// The placement field does not describe exactly 8 ranks.
    #[error("placement field must contain 8 ranks separated by '/'")]
    BadRankCount,

    /// A rank does not add up to exactly 8 files.
    #[error("rank {0} of the placement field does not describe 8 files")]
    BadRankWidth(usize),

    /// A character in the placement field is neither a piece nor a digit.
    #[error("invalid piece character '{0}' in placement field")]
    InvalidPiece(char),

    /// The active color field is neither `w` nor `b`.
    #[error("invalid active color '{0}'")]
    InvalidActiveColor(String),

    /// The castling field contains a character outside `KQkq-`.
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),

    /// The en-passant field is neither `-` nor a valid algebraic square.
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    /// The halfmove or fullmove field is not a number.
    #[error("invalid {field} counter '{value}'")]
    InvalidCounter {
        field: &'static str,
        value: String,
    },

    /// The position does not contain exactly one king of this color.
    #[error("position must contain exactly one {0:?} king")]
    KingCount(PieceColor),
}
