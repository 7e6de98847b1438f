//! FEN parsing
//!
//! Builds a board snapshot from a Forsyth-Edwards Notation string: piece
//! placement, active color, castling availability, and en-passant target.
//! The halfmove and fullmove counters are validated and discarded.
//!
//! FEN writes ranks from the eighth down to the first, while tiles count
//! from White's back rank up, so the rank order inverts during parsing.

use crate::error::FenError;
use crate::types::{CastlingRights, Piece, PieceColor, PieceType, Tile, NO_TILE};

/// Parsed FEN fields, ready to install into a board.
#[derive(Debug, PartialEq)]
pub(crate) struct FenState {
    pub tiles: [Piece; 64],
    pub turn: PieceColor,
    pub castling_rights: [CastlingRights; 2],
    pub enpassant_tile: Tile,
}

/// Parse the six whitespace-separated FEN fields.
pub(crate) fn parse_fen(fen: &str) -> Result<FenState, FenError> {
    let mut fields = fen.split_whitespace();

    let placement = fields.next().ok_or(FenError::MissingField("placement"))?;
    let active = fields.next().ok_or(FenError::MissingField("active color"))?;
    let castling = fields.next().ok_or(FenError::MissingField("castling"))?;
    let enpassant = fields.next().ok_or(FenError::MissingField("en passant"))?;
    let halfmove = fields.next().ok_or(FenError::MissingField("halfmove"))?;
    let fullmove = fields.next().ok_or(FenError::MissingField("fullmove"))?;

    let tiles = parse_placement(placement)?;
    let turn = parse_active_color(active)?;
    let castling_rights = parse_castling(castling)?;
    let enpassant_tile = parse_enpassant(enpassant)?;

    // Clocks are accepted but not kept.
    halfmove
        .parse::<u32>()
        .map_err(|_| FenError::InvalidCounter {
            field: "halfmove",
            value: halfmove.to_owned(),
        })?;
    fullmove
        .parse::<u32>()
        .map_err(|_| FenError::InvalidCounter {
            field: "fullmove",
            value: fullmove.to_owned(),
        })?;

    Ok(FenState {
        tiles,
        turn,
        castling_rights,
        enpassant_tile,
    })
}

fn parse_placement(placement: &str) -> Result<[Piece; 64], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount);
    }

    let mut tiles = [Piece::NONE; 64];

    for (written_rank, rank) in ranks.iter().enumerate() {
        // The first written rank is the eighth, which is row 7.
        let row = 7 - written_rank as i8;
        let mut column = 0i8;

        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPiece(c));
                }
                column += run as i8;
                continue;
            }

            if column >= 8 {
                return Err(FenError::BadRankWidth(8 - written_rank));
            }

            let piece = piece_from_char(c).ok_or(FenError::InvalidPiece(c))?;
            tiles[(row * 8 + column) as usize] = piece;
            column += 1;
        }

        if column != 8 {
            return Err(FenError::BadRankWidth(8 - written_rank));
        }
    }

    Ok(tiles)
}

fn parse_active_color(active: &str) -> Result<PieceColor, FenError> {
    match active {
        "w" => Ok(PieceColor::White),
        "b" => Ok(PieceColor::Black),
        other => Err(FenError::InvalidActiveColor(other.to_owned())),
    }
}

fn parse_castling(castling: &str) -> Result<[CastlingRights; 2], FenError> {
    let mut rights = [CastlingRights::NONE; 2];

    if castling == "-" {
        return Ok(rights);
    }

    for c in castling.chars() {
        match c {
            'K' => rights[PieceColor::White.index()].grant_short(),
            'Q' => rights[PieceColor::White.index()].grant_long(),
            'k' => rights[PieceColor::Black.index()].grant_short(),
            'q' => rights[PieceColor::Black.index()].grant_long(),
            other => return Err(FenError::InvalidCastling(other)),
        }
    }

    Ok(rights)
}

fn parse_enpassant(enpassant: &str) -> Result<Tile, FenError> {
    if enpassant == "-" {
        return Ok(NO_TILE);
    }

    tile_from_algebraic(enpassant).ok_or_else(|| FenError::InvalidEnPassant(enpassant.to_owned()))
}

fn piece_from_char(c: char) -> Option<Piece> {
    let kind = match c.to_ascii_lowercase() {
        'k' => PieceType::King,
        'q' => PieceType::Queen,
        'b' => PieceType::Bishop,
        'n' => PieceType::Knight,
        'r' => PieceType::Rook,
        'p' => PieceType::Pawn,
        _ => return None,
    };
    let color = if c.is_ascii_uppercase() {
        PieceColor::White
    } else {
        PieceColor::Black
    };
    Some(Piece::new(color, kind))
}

/// Convert an algebraic square like `e3` to its tile index.
pub(crate) fn tile_from_algebraic(square: &str) -> Option<Tile> {
    let mut chars = square.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }

    let column = file as i8 - 'a' as i8;
    let row = rank as i8 - '1' as i8;
    Some(row * 8 + column)
}

/// Render a tile index as an algebraic square.
pub(crate) fn tile_to_algebraic(tile: Tile) -> String {
    let file = (b'a' + (tile & 7) as u8) as char;
    let rank = (b'1' + (tile >> 3) as u8) as char;
    format!("{file}{rank}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_FEN, SETUP};

    #[test]
    fn algebraic_roundtrip() {
        assert_eq!(tile_from_algebraic("a1"), Some(0));
        assert_eq!(tile_from_algebraic("h1"), Some(7));
        assert_eq!(tile_from_algebraic("a8"), Some(56));
        assert_eq!(tile_from_algebraic("e3"), Some(20));
        for tile in 0..64 {
            assert_eq!(tile_from_algebraic(&tile_to_algebraic(tile)), Some(tile));
        }
    }

    #[test]
    fn rejects_bad_squares() {
        assert_eq!(tile_from_algebraic("i1"), None);
        assert_eq!(tile_from_algebraic("a9"), None);
        assert_eq!(tile_from_algebraic("e"), None);
        assert_eq!(tile_from_algebraic("e33"), None);
    }

    #[test]
    fn parses_starting_position() {
        let state = parse_fen(DEFAULT_FEN).unwrap();
        assert_eq!(state.tiles, SETUP);
        assert_eq!(state.turn, PieceColor::White);
        assert_eq!(state.castling_rights, [CastlingRights::ALL; 2]);
        assert_eq!(state.enpassant_tile, NO_TILE);
    }

    #[test]
    fn parses_enpassant_and_partial_castling() {
        let state =
            parse_fen("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w Kq e6 0 2").unwrap();
        assert_eq!(state.enpassant_tile, tile_from_algebraic("e6").unwrap());
        assert!(state.castling_rights[PieceColor::White.index()].has_short());
        assert!(!state.castling_rights[PieceColor::White.index()].has_long());
        assert!(!state.castling_rights[PieceColor::Black.index()].has_short());
        assert!(state.castling_rights[PieceColor::Black.index()].has_long());
    }

    #[test]
    fn reports_malformed_input() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
            Err(FenError::BadRankCount)
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBXKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece('X'))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::BadRankWidth(7))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor("x".into()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
            Err(FenError::InvalidCastling('x'))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1"),
            Err(FenError::InvalidEnPassant("e9".into()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenError::InvalidCounter {
                field: "halfmove",
                value: "x".into()
            })
        );
        assert!(matches!(
            parse_fen(""),
            Err(FenError::MissingField("placement"))
        ));
    }
}
