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

//! Representation of player colors.

use super::Bitboard;
use std::ops::Not;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// An enum representing the possible colors that a piece or player can be.
pub enum Color {
    /// The white player, a.k.a. the first player to move in a game.
    White = 0,
    /// The black player, a.k.a. the second player to move in a game.
    Black = 1,
}

impl Color {
    /// Both colors, in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline(always)]
    #[must_use]
    /// Get the promotion rank of a given color.
    pub const fn pawn_promote_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the rank that a pawn of this color lands on after moving two
    /// squares from its start.
    pub const fn pawn_double_push_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_4,
            Color::Black => Bitboard::RANK_5,
        }
    }
}

impl Not for Color {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that the opposite color of `Color::White` is `Color::Black`, and
    /// vice versa.
    fn opposite_color() {
        assert_eq!(Color::White, !Color::Black);
        assert_eq!(Color::Black, !Color::White);
    }
}
