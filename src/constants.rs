//! Engine constants: piece values, board geometry, and search tuning
//!
//! Material values follow the scheme the evaluation and move ordering share:
//! a pawn is worth 100 and the king value is large enough that no material
//! swing can ever compete with it. Checkmate and draw scores sit far outside
//! the material range so the search can recognize them unambiguously.

use crate::types::{Piece, PieceColor, PieceType, Tile};

/// Standard starting position.
pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Material value per piece kind, indexed by the kind discriminant.
pub const PIECE_VALUES: [i32; 7] = [0, 10000, 1000, 350, 350, 525, 100];

/// Evaluation of a position where the side to move is checkmated.
pub const CHECKMATE_SCORE: i32 = -500_000;

/// Iterative deepening stops once the root score reaches this bound,
/// which only mate scores can do.
pub const MATE_BOUND: i32 = 100_000;

/// Below any reachable evaluation; initial alpha / best-score seed.
pub const SCORE_MIN: i32 = -1_000_000;

/// Above any reachable evaluation; initial beta.
pub const SCORE_MAX: i32 = 1_000_000;

/// Soft time limit for one search, checked between deepening iterations.
pub const SEARCH_DEADLINE_MS: u64 = 500;

/// King and rook home squares, where castling starts from.
pub const WHITE_KING_START: Tile = 4;
pub const BLACK_KING_START: Tile = 60;
pub const WHITE_ROOK_LONG: Tile = 0;
pub const WHITE_ROOK_SHORT: Tile = 7;
pub const BLACK_ROOK_LONG: Tile = 56;
pub const BLACK_ROOK_SHORT: Tile = 63;

/// Rook and king ray directions as (row, column) steps.
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop ray directions as (row, column) steps.
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps as (row, column) offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight king steps as (row, column) offsets.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Pieces a pawn may promote to, in the order the generator emits them.
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

const WK: Piece = Piece::new(PieceColor::White, PieceType::King);
const WQ: Piece = Piece::new(PieceColor::White, PieceType::Queen);
const WB: Piece = Piece::new(PieceColor::White, PieceType::Bishop);
const WN: Piece = Piece::new(PieceColor::White, PieceType::Knight);
const WR: Piece = Piece::new(PieceColor::White, PieceType::Rook);
const WP: Piece = Piece::new(PieceColor::White, PieceType::Pawn);
const BK: Piece = Piece::new(PieceColor::Black, PieceType::King);
const BQ: Piece = Piece::new(PieceColor::Black, PieceType::Queen);
const BB: Piece = Piece::new(PieceColor::Black, PieceType::Bishop);
const BN: Piece = Piece::new(PieceColor::Black, PieceType::Knight);
const BR: Piece = Piece::new(PieceColor::Black, PieceType::Rook);
const BP: Piece = Piece::new(PieceColor::Black, PieceType::Pawn);
const NO: Piece = Piece::NONE;

/// The starting position, row 0 (White's back rank) first.
#[rustfmt::skip]
pub const SETUP: [Piece; 64] = [
    WR, WN, WB, WQ, WK, WB, WN, WR,
    WP, WP, WP, WP, WP, WP, WP, WP,
    NO, NO, NO, NO, NO, NO, NO, NO,
    NO, NO, NO, NO, NO, NO, NO, NO,
    NO, NO, NO, NO, NO, NO, NO, NO,
    NO, NO, NO, NO, NO, NO, NO, NO,
    BP, BP, BP, BP, BP, BP, BP, BP,
    BR, BN, BB, BQ, BK, BB, BN, BR,
];
