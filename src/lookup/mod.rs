/*
  Chess Lookup, the attack-generation core of a chess engine.
  Copyright (C) 2022 The Chess Lookup Authors.

  Chess Lookup is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Chess Lookup is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Attack queries: the set of squares a piece attacks, and whether a square
//! is attacked by a side.


use super::{
    leapers::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS},
    magic::{find_magics, MagicConfig, Slider, SlidingTable},
    Bitboard, Color, Piece, Result, Square,
};

use std::ops::Index;

/// A read-only view of where each side's pieces are.
pub trait PieceSets {
    /// Get the squares occupied by pieces of type `piece` belonging to
    /// `color`.
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard;

    /// Get the squares occupied by `color`.
    fn color_occupancy(&self, color: Color) -> Bitboard {
        Piece::ALL_TYPES
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, piece| acc | self.pieces(color, piece))
    }

    /// Get the squares occupied by anything.
    fn occupancy(&self) -> Bitboard {
        self.color_occupancy(Color::White) | self.color_occupancy(Color::Black)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Piece placement stored as per-side and per-type bitboards.
pub struct Pieces {
    /// The squares occupied by White and Black, respectively.
    sides: [Bitboard; 2],
    /// The squares occupied by (in order) pawns, knights, bishops, rooks,
    /// queens, and kings.
    pieces: [Bitboard; Piece::NUM_TYPES],
}

impl Pieces {
    /// An empty board.
    pub const EMPTY: Pieces = Pieces {
        sides: [Bitboard::EMPTY; 2],
        pieces: [Bitboard::EMPTY; Piece::NUM_TYPES],
    };

    #[must_use]
    /// Get the pieces of the standard starting position.
    pub const fn start() -> Pieces {
        Pieces {
            sides: [
                Bitboard::new(0x0000_0000_0000_FFFF),
                Bitboard::new(0xFFFF_0000_0000_0000),
            ],
            pieces: [
                Bitboard::new(0x00FF_0000_0000_FF00), // pawns
                Bitboard::new(0x4200_0000_0000_0042), // knights
                Bitboard::new(0x2400_0000_0000_0024), // bishops
                Bitboard::new(0x8100_0000_0000_0081), // rooks
                Bitboard::new(0x0800_0000_0000_0008), // queens
                Bitboard::new(0x1000_0000_0000_0010), // kings
            ],
        }
    }

    /// Put a piece on `sq`, replacing whatever was there.
    pub fn insert(&mut self, sq: Square, color: Color, piece: Piece) {
        self.remove(sq);
        self.sides[color as usize].insert(sq);
        self.pieces[piece as usize].insert(sq);
    }

    /// Remove whatever piece is on `sq`.
    pub fn remove(&mut self, sq: Square) {
        for side in &mut self.sides {
            side.remove(sq);
        }
        for bb in &mut self.pieces {
            bb.remove(sq);
        }
    }
}

impl PieceSets for Pieces {
    #[inline(always)]
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self[color] & self[piece]
    }

    #[inline(always)]
    fn color_occupancy(&self, color: Color) -> Bitboard {
        self[color]
    }
}

impl Index<Piece> for Pieces {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by the given piece.
    fn index(&self, index: Piece) -> &Self::Output {
        &self.pieces[index as usize]
    }
}

impl Index<Color> for Pieces {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by the given side.
    fn index(&self, index: Color) -> &Self::Output {
        &self.sides[index as usize]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Every attack table, built once and then queried in constant time.
pub struct Lookup {
    bishops: SlidingTable,
    rooks: SlidingTable,
}

impl Lookup {
    #[must_use]
    /// Build the tables, searching for magics with the default
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if the search runs out of tries for some square. This cannot
    /// happen with the default configuration.
    pub fn new() -> Lookup {
        Lookup::with_config(&MagicConfig::new())
            .unwrap_or_else(|e| panic!("failed to build attack tables: {e}"))
    }

    /// Build the tables, searching for magics as directed by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is 0 or if the search runs out of tries.
    pub fn with_config(config: &MagicConfig) -> Result<Lookup> {
        let (bishop, rook) = find_magics(config)?;
        Lookup::from_magics(&bishop, &rook)
    }

    /// Build the tables from magics found earlier, indexed by square.
    ///
    /// # Errors
    ///
    /// Returns `Error::MagicCollision` if any of the magics is invalid.
    pub fn from_magics(bishop: &[u64; 64], rook: &[u64; 64]) -> Result<Lookup> {
        Ok(Lookup {
            bishops: SlidingTable::from_magics(Slider::Bishop, bishop)?,
            rooks: SlidingTable::from_magics(Slider::Rook, rook)?,
        })
    }

    #[must_use]
    /// Get the bishop magic of every square.
    pub fn bishop_magics(&self) -> [u64; 64] {
        self.bishops.magics()
    }

    #[must_use]
    /// Get the rook magic of every square.
    pub fn rook_magics(&self) -> [u64; 64] {
        self.rooks.magics()
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::unused_self)]
    /// Get the squares a pawn of `color` on `sq` attacks.
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        PAWN_ATTACKS[color as usize][sq as usize]
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::unused_self)]
    /// Get the squares a knight on `sq` attacks.
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        KNIGHT_ATTACKS[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::unused_self)]
    /// Get the squares a king on `sq` attacks.
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        KING_ATTACKS[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a bishop on `sq` could make when the board is
    /// occupied by `occupancy`.
    pub fn bishop_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.bishops.attacks(occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a rook on `sq` could make when the board is
    /// occupied by `occupancy`.
    pub fn rook_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.rooks.attacks(occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a queen on `sq` could make when the board is
    /// occupied by `occupancy`.
    pub fn queen_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.bishop_attacks(occupancy, sq) | self.rook_attacks(occupancy, sq)
    }

    #[must_use]
    /// Get the squares attacked by a `piece` of `color` on `sq`. The color
    /// only matters for pawns, and the occupancy only for sliders.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chess_lookup::{Bitboard, Color, Lookup, Piece, Square};
    ///
    /// let lookup = Lookup::new();
    /// let attacks = lookup.attacks(Piece::Rook, Color::White, Square::A1, Bitboard::new(0x103));
    /// assert_eq!(attacks, Bitboard::new(0x102));
    /// ```
    pub fn attacks(&self, piece: Piece, color: Color, sq: Square, occupancy: Bitboard) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawn_attacks(color, sq),
            Piece::Knight => self.knight_attacks(sq),
            Piece::Bishop => self.bishop_attacks(occupancy, sq),
            Piece::Rook => self.rook_attacks(occupancy, sq),
            Piece::Queen => self.queen_attacks(occupancy, sq),
            Piece::King => self.king_attacks(sq),
        }
    }

    #[must_use]
    /// Determine whether any piece of `by` attacks `sq`. Sliders are blocked
    /// by every piece on the board.
    pub fn is_square_attacked(&self, pieces: &impl PieceSets, sq: Square, by: Color) -> bool {
        let occupancy = pieces.occupancy();
        let hits = |vision: Bitboard, piece: Piece| !(vision & pieces.pieces(by, piece)).is_empty();

        // a pawn of `by` attacks `sq` exactly when a pawn of the other side
        // on `sq` would attack it
        hits(self.pawn_attacks(!by, sq), Piece::Pawn)
            || hits(self.knight_attacks(sq), Piece::Knight)
            || hits(self.king_attacks(sq), Piece::King)
            || hits(self.bishop_attacks(occupancy, sq), Piece::Bishop)
            || hits(self.rook_attacks(occupancy, sq), Piece::Rook)
            || hits(self.queen_attacks(occupancy, sq), Piece::Queen)
    }

    #[must_use]
    /// Get the squares of every piece of `by` which attacks `sq`.
    pub fn attackers(&self, pieces: &impl PieceSets, sq: Square, by: Color) -> Bitboard {
        let occupancy = pieces.occupancy();
        let queens = pieces.pieces(by, Piece::Queen);
        let mut attackers = self.pawn_attacks(!by, sq) & pieces.pieces(by, Piece::Pawn);
        attackers |= self.knight_attacks(sq) & pieces.pieces(by, Piece::Knight);
        attackers |= self.king_attacks(sq) & pieces.pieces(by, Piece::King);
        attackers |= self.bishop_attacks(occupancy, sq) & (pieces.pieces(by, Piece::Bishop) | queens);
        attackers |= self.rook_attacks(occupancy, sq) & (pieces.pieces(by, Piece::Rook) | queens);

        attackers
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Lookup::new()
    }
}
