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

//! Squares, which are positions on a board.

use super::{Bitboard, Direction, Error, Result};

use std::{
    cmp::max,
    convert::TryFrom,
    fmt::{Display, Formatter},
    mem::transmute,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
/// A square: one of 64 spots on a board that a piece can occupy.
///
/// Squares are numbered rank by rank starting from A1, so the rank of a square
/// is its index divided by 8 and the file is the index modulo 8. "No square"
/// is expressed as `Option::<Square>::None`.
pub enum Square {
    A1 = 0,
    B1 = 1,
    C1 = 2,
    D1 = 3,
    E1 = 4,
    F1 = 5,
    G1 = 6,
    H1 = 7,
    A2 = 8,
    B2 = 9,
    C2 = 10,
    D2 = 11,
    E2 = 12,
    F2 = 13,
    G2 = 14,
    H2 = 15,
    A3 = 16,
    B3 = 17,
    C3 = 18,
    D3 = 19,
    E3 = 20,
    F3 = 21,
    G3 = 22,
    H3 = 23,
    A4 = 24,
    B4 = 25,
    C4 = 26,
    D4 = 27,
    E4 = 28,
    F4 = 29,
    G4 = 30,
    H4 = 31,
    A5 = 32,
    B5 = 33,
    C5 = 34,
    D5 = 35,
    E5 = 36,
    F5 = 37,
    G5 = 38,
    H5 = 39,
    A6 = 40,
    B6 = 41,
    C6 = 42,
    D6 = 43,
    E6 = 44,
    F6 = 45,
    G6 = 46,
    H6 = 47,
    A7 = 48,
    B7 = 49,
    C7 = 50,
    D7 = 51,
    E7 = 52,
    F7 = 53,
    G7 = 54,
    H7 = 55,
    A8 = 56,
    B8 = 57,
    C8 = 58,
    D8 = 59,
    E8 = 60,
    F8 = 61,
    G8 = 62,
    H8 = 63,
}

impl Square {
    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Create a Square from the given rank and file. The ranks run from 0 to 7
    /// (instead of 1 through 8), and the files run from A to H. Returns `None`
    /// if either coordinate is off the board.
    pub fn new(rank: usize, file: usize) -> Option<Square> {
        if rank >= 8 || file >= 8 {
            return None;
        }
        Square::try_from(((rank << 3) | file) as u8).ok()
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the rank (0 -> 1, ...) of this square.
    pub const fn rank(self) -> usize {
        (self as u8 >> 3u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the file (0 -> A, ...) of this square.
    pub const fn file(self) -> usize {
        (self as u8 & 7u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the Chebyshev distance to another square.
    pub fn chebyshev_to(self, rhs: Square) -> u8 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_sign_loss
        )]
        {
            let rankdiff = ((rhs.rank() as i8) - (self.rank() as i8)).abs();
            let filediff = ((rhs.file() as i8) - (self.file() as i8)).abs();

            max(rankdiff, filediff) as u8
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get what this square would appear to be from the point of view of the
    /// opposing player.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::Square;
    ///
    /// assert_eq!(Square::A1.opposite(), Square::A8);
    /// assert_eq!(Square::E2.opposite(), Square::E7);
    /// ```
    pub fn opposite(self) -> Square {
        // SAFETY: flipping the rank bits of a value in 0..64 stays in 0..64.
        unsafe { transmute(self as u8 ^ 56) }
    }

    /// Convert an algebraic string (such as 'e7') to a square.
    /// The file must be in lowercase.
    ///
    /// # Errors
    ///
    /// This function will return `Error::InvalidAlgebraic` if `s` is not a
    /// legal algebraic square.
    pub fn from_algebraic(s: &str) -> Result<Square> {
        let bad = || Error::InvalidAlgebraic(s.to_string());
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(bad());
        };
        let file = "abcdefgh".find(file_char).ok_or_else(bad)?;
        let rank = match rank_char.to_digit(10) {
            Some(n @ 1..=8) => n as usize - 1,
            _ => return Err(bad()),
        };
        Square::new(rank, file).ok_or_else(bad)
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square
    /// representing A1 will have the name "a".
    pub fn file_name(self) -> &'static str {
        ["a", "b", "c", "d", "e", "f", "g", "h"][self.file()]
    }
}

impl Add<Direction> for Square {
    type Output = Square;
    #[inline(always)]
    #[allow(clippy::cast_sign_loss)]
    /// Step in a direction. The result wraps around the ends of the board, so
    /// callers must check the step with `Square::chebyshev_to`.
    fn add(self, rhs: Direction) -> Self::Output {
        // SAFETY: the modulo keeps the value in 0..64.
        unsafe { transmute(((self as i8) + rhs.0) as u8 & 63) }
    }
}

impl AddAssign<Direction> for Square {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

impl Sub<Square> for Square {
    type Output = Direction;
    #[inline(always)]
    fn sub(self, rhs: Square) -> Self::Output {
        Direction((self as i8) - (rhs as i8))
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Square> {
        Square::from_algebraic(s)
    }
}

impl TryFrom<Bitboard> for Square {
    type Error = Error;

    /// Create the square closest to A1 (prioritizing rank) on the given
    /// bitboard. Fails if the bitboard is empty.
    #[inline(always)]
    fn try_from(bb: Bitboard) -> Result<Square> {
        Square::try_from(bb.lsb()?)
    }
}

impl TryFrom<u8> for Square {
    type Error = Error;

    #[inline(always)]
    fn try_from(x: u8) -> Result<Square> {
        match x {
            // SAFETY: `x` is a valid discriminant.
            x if x <= Square::H8 as u8 => Ok(unsafe { transmute(x) }),
            _ => Err(Error::InvalidSquare(x)),
        }
    }
}
