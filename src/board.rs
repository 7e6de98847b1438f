//! Board state and the make/undo protocol
//!
//! The board owns the 64 tiles, the side to move, per-color castling
//! rights, the en-passant target, cached king locations, the three status
//! flags, and the record stack that makes every move exactly reversible.
//!
//! Mutation happens through two layers:
//! - `apply_move` / `revert_move` perform the raw state transition,
//!   including castling rook hops, en-passant removal, and promotion.
//! - [`Board::make_move`] / [`Board::undo`] wrap them and keep the
//!   check/checkmate/draw flags current.
//!
//! The legality filter, [`Board::perft`], and `has_legal_moves` run on the
//! raw layer: they only need threat information, and routing them through
//! the flag recomputation would recurse.

use std::fmt;

use crate::constants::{
    BLACK_KING_START, BLACK_ROOK_LONG, BLACK_ROOK_SHORT, SETUP, WHITE_KING_START, WHITE_ROOK_LONG,
    WHITE_ROOK_SHORT,
};
use crate::error::FenError;
use crate::fen;
use crate::move_gen::{self, attack};
use crate::types::{
    CastlingRights, Move, MoveList, MoveRecord, Piece, PieceColor, PieceType, Tile, NO_TILE,
};

/// Row of a tile, 0 (White's back rank) through 7.
#[inline]
pub fn tile_row(tile: Tile) -> i8 {
    tile >> 3
}

/// Column of a tile, 0 (the a-file) through 7.
#[inline]
pub fn tile_column(tile: Tile) -> i8 {
    tile & 7
}

/// Tile index for a (row, column) pair.
#[inline]
pub fn tile_at(row: i8, column: i8) -> Tile {
    row * 8 + column
}

/// True if the (row, column) pair lies on the board.
#[inline]
pub fn on_board(row: i8, column: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&column)
}

/// Complete game state, exactly reversible through [`Board::undo`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: [Piece; 64],
    turn: PieceColor,
    castling_rights: [CastlingRights; 2],
    enpassant_tile: Tile,
    king_tiles: [Tile; 2],
    in_check: bool,
    in_checkmate: bool,
    in_draw: bool,
    records: Vec<MoveRecord>,
}

impl Board {
    /// A board in the standard starting position.
    pub fn new() -> Board {
        Board {
            tiles: SETUP,
            turn: PieceColor::White,
            castling_rights: [CastlingRights::ALL; 2],
            enpassant_tile: NO_TILE,
            king_tiles: [BLACK_KING_START, WHITE_KING_START],
            in_check: false,
            in_checkmate: false,
            in_draw: false,
            records: Vec::new(),
        }
    }

    fn cleared() -> Board {
        Board {
            tiles: [Piece::NONE; 64],
            turn: PieceColor::White,
            castling_rights: [CastlingRights::NONE; 2],
            enpassant_tile: NO_TILE,
            king_tiles: [NO_TILE; 2],
            in_check: false,
            in_checkmate: false,
            in_draw: false,
            records: Vec::new(),
        }
    }

    /// Reset the board from a FEN string.
    ///
    /// All previous state, including the move history, is discarded. On a
    /// parse error the board is left empty, never half-populated.
    /// [`crate::constants::DEFAULT_FEN`] restores the starting position.
    ///
    /// # Errors
    ///
    /// Returns a [`FenError`] describing the first malformed field, or
    /// [`FenError::KingCount`] when either side does not have exactly one
    /// king.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::cleared();

        let state = fen::parse_fen(fen)?;

        let mut kings = [NO_TILE; 2];
        for color in [PieceColor::Black, PieceColor::White] {
            let mut count = 0;
            for tile in 0..64 {
                if state.tiles[tile as usize].is(color, PieceType::King) {
                    kings[color.index()] = tile;
                    count += 1;
                }
            }
            if count != 1 {
                return Err(FenError::KingCount(color));
            }
        }

        self.tiles = state.tiles;
        self.turn = state.turn;
        self.castling_rights = state.castling_rights;
        self.enpassant_tile = state.enpassant_tile;
        self.king_tiles = kings;
        self.refresh_status();
        Ok(())
    }

    /// The piece on a tile.
    #[inline]
    pub fn get_tile(&self, tile: Tile) -> Piece {
        self.tiles[tile as usize]
    }

    /// Color of the piece on a tile, `None` for an empty tile.
    #[inline]
    pub fn color(&self, tile: Tile) -> PieceColor {
        self.get_tile(tile).color()
    }

    /// Kind of the piece on a tile, `None` for an empty tile.
    #[inline]
    pub fn piece_type(&self, tile: Tile) -> PieceType {
        self.get_tile(tile).kind()
    }

    /// True if the tile holds no piece.
    #[inline]
    pub fn is_empty(&self, tile: Tile) -> bool {
        self.get_tile(tile).is_none()
    }

    /// True if the tile holds exactly this piece.
    #[inline]
    pub fn is_piece(&self, tile: Tile, color: PieceColor, kind: PieceType) -> bool {
        self.get_tile(tile).is(color, kind)
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// Castling rights still held by a color.
    #[inline]
    pub fn castling_rights(&self, color: PieceColor) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    /// Current en-passant target, or [`NO_TILE`].
    #[inline]
    pub fn enpassant_tile(&self) -> Tile {
        self.enpassant_tile
    }

    /// Location of a color's king.
    #[inline]
    pub fn king_tile(&self, color: PieceColor) -> Tile {
        self.king_tiles[color.index()]
    }

    /// The move record stack, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// True if the side to move is in check.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// True if the side to move is checkmated.
    #[inline]
    pub fn is_in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    /// True if the side to move is stalemated.
    #[inline]
    pub fn is_in_draw(&self) -> bool {
        self.in_draw
    }

    /// Apply a legal move and bring the status flags up to date.
    ///
    /// The move must come from [`Board::generate_legal_moves`] or
    /// [`Board::generate_all_legal_moves`]; applying anything else leaves
    /// the board in an unspecified state.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.color(mv.tile) == self.turn);
        self.apply_move(mv);
        self.refresh_status();
    }

    /// Take back the most recent move, restoring every state bit exactly.
    /// A no-op when the history is empty.
    pub fn undo(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.revert_move();
    }

    /// Append all legal moves for the piece on `tile` into `out`.
    ///
    /// The piece must belong to the side to move; otherwise nothing is
    /// appended. With `only_captures` set, only capturing moves (including
    /// en passant) are kept.
    pub fn generate_legal_moves(&mut self, out: &mut MoveList, tile: Tile, only_captures: bool) {
        if self.color(tile) != self.turn {
            return;
        }
        let start = out.len();
        move_gen::generate_moves(self, tile, out);
        self.filter_legal(out, start, only_captures);
    }

    /// Append all legal moves for the side to move into `out`.
    pub fn generate_all_legal_moves(&mut self, out: &mut MoveList, only_captures: bool) {
        for tile in 0..64 {
            if self.color(tile) == self.turn {
                self.generate_legal_moves(out, tile, only_captures);
            }
        }
    }

    /// Count leaf positions reachable in exactly `depth` plies.
    ///
    /// This exercises nothing but move generation and the raw make/undo
    /// layer, which makes the known reference counts a sharp correctness
    /// check for castling, en passant, promotion, and pin handling.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.generate_all_legal_moves(&mut moves, false);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for i in 0..moves.len() {
            self.apply_move(moves.get(i));
            nodes += self.perft(depth - 1);
            self.revert_move();
        }
        nodes
    }

    /// Drop pseudo-legal moves that leave the mover's own king attacked,
    /// compacting `out` in place from `start`.
    fn filter_legal(&mut self, out: &mut MoveList, start: usize, only_captures: bool) {
        let mover = self.turn;
        let mut keep = start;

        for i in start..out.len() {
            let mv = out.get(i);

            // Capture test happens before the move: an en-passant target
            // tile is empty until the move lands.
            let is_capture = !self.is_empty(mv.target)
                || (self.piece_type(mv.tile) == PieceType::Pawn
                    && mv.target == self.enpassant_tile);
            if only_captures && !is_capture {
                continue;
            }

            self.apply_move(mv);
            let safe =
                !attack::is_tile_threatened(self, self.king_tiles[mover.index()], self.turn);
            self.revert_move();

            if safe {
                out.set(keep, mv);
                keep += 1;
            }
        }

        out.truncate(keep);
    }

    /// True if the side to move has at least one legal move.
    fn has_legal_moves(&mut self) -> bool {
        let mover = self.turn;
        let mut moves = MoveList::new();

        for tile in 0..64 {
            if self.color(tile) != mover {
                continue;
            }
            moves.clear();
            move_gen::generate_moves(self, tile, &mut moves);

            for i in 0..moves.len() {
                self.apply_move(moves.get(i));
                let safe =
                    !attack::is_tile_threatened(self, self.king_tiles[mover.index()], self.turn);
                self.revert_move();
                if safe {
                    return true;
                }
            }
        }
        false
    }

    /// Recompute check, checkmate, and draw for the side to move.
    fn refresh_status(&mut self) {
        let us = self.turn;
        self.in_check =
            attack::is_tile_threatened(self, self.king_tiles[us.index()], us.opposite());
        let any_moves = self.has_legal_moves();
        self.in_checkmate = self.in_check && !any_moves;
        self.in_draw = !self.in_check && !any_moves;
    }

    /// Raw state transition: move the piece, handle castling, en passant,
    /// and promotion, update rights and the en-passant target, and push a
    /// record capturing everything needed to revert.
    fn apply_move(&mut self, mv: Move) {
        let piece = self.tiles[mv.tile as usize];
        let color = piece.color();

        let mut record = MoveRecord {
            mv,
            promotion: mv.promotion,
            captured: self.tiles[mv.target as usize],
            castling_rights: self.castling_rights,
            enpassant_tile: self.enpassant_tile,
            was_in_check: self.in_check,
            was_in_checkmate: self.in_checkmate,
            was_in_draw: self.in_draw,
        };

        self.tiles[mv.target as usize] = piece;
        self.tiles[mv.tile as usize] = Piece::NONE;
        self.turn = self.turn.opposite();

        let previous_enpassant = record.enpassant_tile;
        self.enpassant_tile = NO_TILE;

        // A rook captured on its home corner forfeits that corner's right.
        if record.captured.kind() == PieceType::Rook {
            match mv.target {
                WHITE_ROOK_LONG => self.castling_rights[PieceColor::White.index()].clear_long(),
                WHITE_ROOK_SHORT => self.castling_rights[PieceColor::White.index()].clear_short(),
                BLACK_ROOK_LONG => self.castling_rights[PieceColor::Black.index()].clear_long(),
                BLACK_ROOK_SHORT => self.castling_rights[PieceColor::Black.index()].clear_short(),
                _ => {}
            }
        }

        match piece.kind() {
            PieceType::King => {
                // A two-tile king move is castling; the rook hops to the
                // square between the king and its corner.
                if (mv.target - mv.tile).abs() == 2 {
                    let (corner, between) = if mv.target > mv.tile {
                        (mv.target + 1, mv.target - 1)
                    } else {
                        (mv.target - 2, mv.target + 1)
                    };
                    self.tiles[between as usize] = self.tiles[corner as usize];
                    self.tiles[corner as usize] = Piece::NONE;
                }
                self.castling_rights[color.index()].clear_all();
                self.king_tiles[color.index()] = mv.target;
            }
            PieceType::Rook => {
                if !self.castling_rights[color.index()].is_empty() {
                    match (color, mv.tile) {
                        (PieceColor::White, WHITE_ROOK_LONG)
                        | (PieceColor::Black, BLACK_ROOK_LONG) => {
                            self.castling_rights[color.index()].clear_long()
                        }
                        (PieceColor::White, WHITE_ROOK_SHORT)
                        | (PieceColor::Black, BLACK_ROOK_SHORT) => {
                            self.castling_rights[color.index()].clear_short()
                        }
                        _ => {}
                    }
                }
            }
            PieceType::Pawn => {
                if (mv.target - mv.tile).abs() == 16 {
                    self.enpassant_tile = (mv.tile + mv.target) / 2;
                } else if mv.target == previous_enpassant {
                    // En passant: the captured pawn sits behind the target.
                    let captured_tile = if color == PieceColor::White {
                        mv.target - 8
                    } else {
                        mv.target + 8
                    };
                    record.captured = self.tiles[captured_tile as usize];
                    self.tiles[captured_tile as usize] = Piece::NONE;
                } else if mv.promotion != PieceType::None {
                    self.tiles[mv.target as usize] = Piece::new(color, mv.promotion);
                }
            }
            _ => {}
        }

        self.records.push(record);
    }

    /// Exact inverse of `apply_move`, driven by the top record.
    fn revert_move(&mut self) {
        debug_assert!(!self.records.is_empty());
        let Some(record) = self.records.pop() else {
            return;
        };
        let mv = record.mv;

        let piece = self.tiles[mv.target as usize];
        let color = piece.color();
        self.tiles[mv.tile as usize] = piece;

        if piece.kind() == PieceType::Pawn && record.enpassant_tile == mv.target {
            // The en-passant victim was not on the target tile.
            let captured_tile = if color == PieceColor::White {
                mv.target - 8
            } else {
                mv.target + 8
            };
            self.tiles[mv.target as usize] = Piece::NONE;
            self.tiles[captured_tile as usize] = record.captured;
        } else {
            self.tiles[mv.target as usize] = record.captured;
        }

        if piece.kind() == PieceType::King {
            self.king_tiles[color.index()] = mv.tile;
            if (mv.target - mv.tile).abs() == 2 {
                let (corner, between) = if mv.target > mv.tile {
                    (mv.target + 1, mv.target - 1)
                } else {
                    (mv.target - 2, mv.target + 1)
                };
                self.tiles[corner as usize] = self.tiles[between as usize];
                self.tiles[between as usize] = Piece::NONE;
            }
        }

        if record.promotion != PieceType::None {
            self.tiles[mv.tile as usize] = Piece::new(color, PieceType::Pawn);
        }

        self.turn = self.turn.opposite();
        self.castling_rights = record.castling_rights;
        self.enpassant_tile = record.enpassant_tile;
        self.in_check = record.was_in_check;
        self.in_checkmate = record.was_in_checkmate;
        self.in_draw = record.was_in_draw;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..8 {
                write!(f, "{} ", self.get_tile(tile_at(row, column)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FEN;

    #[test]
    fn starting_position_layout() {
        let board = Board::new();
        assert!(board.is_piece(4, PieceColor::White, PieceType::King));
        assert!(board.is_piece(60, PieceColor::Black, PieceType::King));
        assert!(board.is_piece(0, PieceColor::White, PieceType::Rook));
        assert!(board.is_piece(63, PieceColor::Black, PieceType::Rook));
        for tile in 8..16 {
            assert!(board.is_piece(tile, PieceColor::White, PieceType::Pawn));
        }
        for tile in 16..48 {
            assert!(board.is_empty(tile));
        }
        assert_eq!(board.turn(), PieceColor::White);
        assert!(!board.is_in_check());
        assert!(!board.is_in_checkmate());
        assert!(!board.is_in_draw());
    }

    #[test]
    fn new_matches_default_fen() {
        let mut loaded = Board::cleared();
        loaded.load_fen(DEFAULT_FEN).unwrap();
        assert_eq!(loaded, Board::new());
    }

    #[test]
    fn load_fen_failure_leaves_board_empty() {
        let mut board = Board::new();
        assert!(board.load_fen("definitely not fen").is_err());
        for tile in 0..64 {
            assert!(board.is_empty(tile));
        }
        assert!(board.records().is_empty());
    }

    #[test]
    fn load_fen_requires_both_kings() {
        let mut board = Board::new();
        assert_eq!(
            board.load_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount(PieceColor::Black))
        );
        assert_eq!(
            board.load_fen("4k3/8/8/8/8/8/8/KK6 w - - 0 1"),
            Err(FenError::KingCount(PieceColor::White))
        );
    }

    #[test]
    fn double_push_sets_enpassant_target() {
        let mut board = Board::new();
        board.make_move(Move::new(12, 28)); // e2e4
        assert_eq!(board.enpassant_tile(), 20);
        assert_eq!(board.turn(), PieceColor::Black);

        board.make_move(Move::new(50, 42)); // c7c6, single push
        assert_eq!(board.enpassant_tile(), NO_TILE);
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut board = Board::new();
        board.undo();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn records_stack_is_lifo() {
        let mut board = Board::new();
        board.make_move(Move::new(12, 28));
        board.make_move(Move::new(52, 36));
        assert_eq!(board.records().len(), 2);
        assert_eq!(board.records()[1].mv, Move::new(52, 36));

        board.undo();
        assert_eq!(board.records().len(), 1);
        assert_eq!(board.records()[0].mv, Move::new(12, 28));
    }

    #[test]
    fn king_tile_follows_the_king() {
        let mut board = Board::new();
        board.make_move(Move::new(12, 28)); // e2e4
        board.make_move(Move::new(52, 36)); // e7e5
        board.make_move(Move::new(4, 12)); // Ke1e2
        assert_eq!(board.king_tile(PieceColor::White), 12);
        board.undo();
        assert_eq!(board.king_tile(PieceColor::White), 4);
    }
}
