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

//! Bitboards, data structures used to efficiently represent sets of squares.

use super::{Error, Result, Square};

use std::{
    fmt::{Display, Formatter},
    iter::Iterator,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not, Shl, Shr, Sub,
    },
};

/// A bitboard, which uses an integer to express a set of `Square`s.
/// This expression allows the efficient computation of set intersection, union,
/// disjunction, element selection, and more, all in constant time.
///
/// The least significant bit is A1, the next is B1, and so on up to H8 in the
/// most significant bit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard representing the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::{Bitboard, Square};
    ///
    /// assert!(!Bitboard::EMPTY.contains(Square::A1));
    /// ```
    pub const EMPTY: Bitboard = Bitboard::new(0);

    /// A bitboard containing all 64 squares on the board, i.e. the universal
    /// set.
    pub const ALL: Bitboard = Bitboard::new(!0);

    /// The squares on the A file.
    pub const FILE_A: Bitboard = Bitboard::new(0x0101_0101_0101_0101);

    /// The squares on the H file.
    pub const FILE_H: Bitboard = Bitboard::new(0x8080_8080_8080_8080);

    /// The squares on the first rank, where White's pieces start.
    pub const RANK_1: Bitboard = Bitboard::new(0x0000_0000_0000_00FF);

    /// The squares on the fourth rank, where a white pawn lands after a double push.
    pub const RANK_4: Bitboard = Bitboard::new(0x0000_0000_FF00_0000);

    /// The squares on the fifth rank, where a black pawn lands after a double push.
    pub const RANK_5: Bitboard = Bitboard::new(0x0000_00FF_0000_0000);

    /// The squares on the eighth rank, where Black's pieces start.
    pub const RANK_8: Bitboard = Bitboard::new(0xFF00_0000_0000_0000);

    /// The outer ring of the board.
    pub const RING: Bitboard = Bitboard::new(0xFF81_8181_8181_81FF);

    #[inline(always)]
    #[must_use]
    /// Construct a new Bitboard from a numeric literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// bb.insert(Square::A1);
    ///
    /// assert_eq!(bb, Bitboard::new(1));
    /// ```
    pub const fn new(x: u64) -> Bitboard {
        Bitboard(x)
    }

    #[inline(always)]
    #[must_use]
    /// Get the raw integer behind this bitboard.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this bitboard contains a given square.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::{Bitboard, Square};
    ///
    /// assert!(Bitboard::new(1).contains(Square::A1));
    /// assert!(!(Bitboard::new(2).contains(Square::A1)));
    /// ```
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u8) != 0
    }

    #[inline(always)]
    /// Add a square to the set of squares contained in this `Bitboard`.
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq as u8;
    }

    #[inline(always)]
    /// Remove a square from the set of squares contained in this `Bitboard`.
    /// Removing a square which is not in the set does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::new(3);
    /// bb.remove(Square::A1);
    /// assert_eq!(bb, Bitboard::new(2));
    /// bb.remove(Square::A1);
    /// assert_eq!(bb, Bitboard::new(2));
    /// ```
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1 << sq as u8);
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this bitboard with `sq` added. Usable in const contexts.
    pub const fn with_square(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | 1 << sq as u8)
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this bitboard with `sq` removed.
    pub const fn without_square(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1 << sq as u8))
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    /// Compute the number of squares contained in this `Bitboard`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::Bitboard;
    ///
    /// assert_eq!(Bitboard::new(0).len(), 0);
    /// assert_eq!(Bitboard::new(0b10110).len(), 3);
    /// ```
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline(always)]
    #[must_use]
    /// Count the number of trailing zeros (i.e. empty squares between A1 and
    /// the first non-empty square) in this bitboard. Will be 64 if the board
    /// is empty.
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    #[allow(clippy::cast_possible_truncation)]
    /// Get the index of the least significant set bit of this bitboard.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyBitboard` if there are no bits set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::{Bitboard, Error};
    ///
    /// assert_eq!(Bitboard::new(22).lsb(), Ok(1));
    /// assert_eq!(Bitboard::new(4300).lsb(), Ok(2));
    /// assert_eq!(Bitboard::EMPTY.lsb(), Err(Error::EmptyBitboard));
    /// ```
    pub fn lsb(self) -> Result<u8> {
        if self.is_empty() {
            return Err(Error::EmptyBitboard);
        }
        Ok(self.0.trailing_zeros() as u8)
    }

    #[must_use]
    #[inline(always)]
    /// Determine whether this bitboard is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    #[inline(always)]
    /// Determine whether this bitboard has exactly one bit. Equivalent to
    /// `Bitboard.len() == 1`.
    pub const fn has_single_bit(self) -> bool {
        // 5 arithmetic operations,
        // faster than the 13 required for `count_ones() == 1`
        self.0 != 0 && (self.0 & self.0.wrapping_sub(1)) == 0
    }

    #[must_use]
    /// Determine whether this bitboard contains more than one `Square`.
    pub const fn more_than_one(self) -> bool {
        (self.0 & self.0.wrapping_sub(1)) != 0
    }

    #[must_use]
    /// Given the index of a subset, create the occupancy formed by mapping the
    /// binary digits of `index` onto the set bits of this mask, lowest first.
    /// Only the lowest `bits_in_mask` digits of `index` are used.
    ///
    /// For instance: if `self` represented a board like the following:
    /// ```text
    /// 8 | . . . . . . . .
    /// 7 | . . . . . . . .
    /// 6 | . . . . . . . .
    /// 5 | . . . . . . . .
    /// 4 | . . . . . . . .
    /// 3 | . . . . . . . .
    /// 2 | . 1 . . . . . .
    /// 1 | 1 . . . . . . .
    /// - + - - - - - - - -
    /// . | A B C D E F G H
    /// ```
    ///
    /// and the given index were `0b10`, then the output would contain only B2.
    ///
    /// # Panics
    ///
    /// Panics if `bits_in_mask` is greater than the number of squares in this
    /// mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::Bitboard;
    ///
    /// let mask = Bitboard::new(0b1010_0100);
    /// assert_eq!(mask.occupancy(0b101, 3), Bitboard::new(0b1000_0100));
    /// ```
    pub fn occupancy(self, index: usize, bits_in_mask: u8) -> Bitboard {
        assert!(
            bits_in_mask <= self.len(),
            "cannot take {bits_in_mask} bits from a mask of {} squares",
            self.len()
        );
        let mut result = Bitboard::EMPTY;
        let mut editable_mask = self;
        // go from right to left in the bits of the mask,
        // and add an occupancy if something is there
        for i in 0..bits_in_mask {
            // make a bitboard which only occupies the rightmost square
            let occupier = Bitboard(1 << editable_mask.trailing_zeros());
            editable_mask ^= occupier;
            if index & (1 << i) != 0 {
                result |= occupier;
            }
        }

        result
    }

    /// Iterate over every subset of this mask, in the order of their subset
    /// index (see `Bitboard::occupancy`).
    ///
    /// # Panics
    ///
    /// Panics if this mask contains all 64 squares, since its subsets cannot
    /// be indexed by a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_lookup::Bitboard;
    ///
    /// let subsets: Vec<Bitboard> = Bitboard::new(0b110).subsets().collect();
    /// assert_eq!(
    ///     subsets,
    ///     [0b000, 0b010, 0b100, 0b110].map(Bitboard::new)
    /// );
    /// ```
    pub fn subsets(self) -> impl Iterator<Item = Bitboard> {
        let n = self.len();
        assert!(n < 64, "cannot enumerate the subsets of a full board");
        (0..1usize << n).map(move |index| self.occupancy(index, n))
    }

    /* One-step shifts. East and west components mask out whatever wrapped around the board. */

    #[inline(always)]
    #[must_use]
    /// Move every square one rank up.
    pub const fn north(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    #[inline(always)]
    #[must_use]
    /// Move every square one rank down.
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    #[inline(always)]
    #[must_use]
    /// Move every square one file toward H.
    pub const fn east(self) -> Bitboard {
        Bitboard((self.0 << 1) & !Bitboard::FILE_A.0)
    }

    #[inline(always)]
    #[must_use]
    /// Move every square one file toward A.
    pub const fn west(self) -> Bitboard {
        Bitboard((self.0 >> 1) & !Bitboard::FILE_H.0)
    }

    #[inline(always)]
    #[must_use]
    pub const fn north_east(self) -> Bitboard {
        Bitboard((self.0 << 9) & !Bitboard::FILE_A.0)
    }

    #[inline(always)]
    #[must_use]
    pub const fn north_west(self) -> Bitboard {
        Bitboard((self.0 << 7) & !Bitboard::FILE_H.0)
    }

    #[inline(always)]
    #[must_use]
    pub const fn south_east(self) -> Bitboard {
        Bitboard((self.0 >> 7) & !Bitboard::FILE_A.0)
    }

    #[inline(always)]
    #[must_use]
    pub const fn south_west(self) -> Bitboard {
        Bitboard((self.0 >> 9) & !Bitboard::FILE_H.0)
    }

    #[inline(always)]
    #[must_use]
    /// Union with another bitboard. Usable in const contexts.
    pub const fn union(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Compute the intersection of the sets represented by this bitboard and
    /// the right-hand side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chess_lookup::{Bitboard, Square};
    /// let bb1 = Bitboard::new(7); // {A1, B1, C1}
    /// let bb2 = Bitboard::new(14); // {B1, C1, D1}
    /// let intersection = bb1 & bb2; // {B1, C1}
    /// assert!(!intersection.contains(Square::A1));
    /// assert!(intersection.contains(Square::B1));
    /// assert!(intersection.contains(Square::C1));
    /// assert!(!intersection.contains(Square::D1));
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Shl<u8> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: u8) -> Self::Output {
        Bitboard(self.0 << rhs)
    }
}

impl Shr<u8> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u8) -> Self::Output {
        Bitboard(self.0 >> rhs)
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Mul for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Bitboard(self.0.wrapping_mul(rhs.0))
    }
}

impl Mul<u64> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: u64) -> Self::Output {
        Bitboard(self.0.wrapping_mul(rhs))
    }
}

impl Sub<u64> for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Wrapping subtraction. `bb & (bb - 1)` clears the lowest square of `bb`.
    fn sub(self, rhs: u64) -> Self::Output {
        Bitboard(self.0.wrapping_sub(rhs))
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u8)
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(x: u64) -> Bitboard {
        Bitboard(x)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> u64 {
        bb.0
    }
}

impl From<Bitboard> for usize {
    fn from(bb: Bitboard) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        {
            bb.0 as usize
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row_idx in 0..8 {
            write!(f, "{} |", 8 - row_idx)?;
            for col_idx in 0..8 {
                let bit = 1 << ((8 * (7 - row_idx)) + col_idx);
                if bit & self.0 == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, " 1")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "- + - - - - - - - -")?;
        writeln!(f, ". | A B C D E F G H")
    }
}

#[allow(clippy::copy_iterator)]
impl Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let sq = Square::try_from(*self).ok()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_count() {
        assert_eq!(Bitboard::new(0).len(), 0);
        assert_eq!(Bitboard::new(22).len(), 3);
        assert_eq!(Bitboard::new(34123).len(), 7);
        assert_eq!(Bitboard::ALL.len(), 64);
    }

    #[test]
    fn population_count_matches_clearing_loop() {
        for _ in 0..1000 {
            let raw = fastrand::u64(..);
            let mut bb = Bitboard::new(raw);
            let mut count = 0;
            while !bb.is_empty() {
                count += 1;
                bb &= bb - 1;
            }
            assert_eq!(Bitboard::new(raw).len(), count);
        }
    }

    #[test]
    fn population_count_is_additive() {
        for _ in 0..1000 {
            let a = Bitboard::new(fastrand::u64(..));
            let b = Bitboard::new(fastrand::u64(..)) & !a;
            assert_eq!((a | b).len(), a.len() + b.len());
        }
    }

    #[test]
    fn least_significant_bit() {
        assert_eq!(Bitboard::new(22).lsb(), Ok(1));
        assert_eq!(Bitboard::new(12_893_901).lsb(), Ok(0));
        assert_eq!(Bitboard::new(4300).lsb(), Ok(2));
        assert_eq!(Bitboard::new(1 << 63).lsb(), Ok(63));
        assert_eq!(Bitboard::EMPTY.lsb(), Err(Error::EmptyBitboard));
    }

    #[test]
    fn insert_and_remove() {
        let mut bb = Bitboard::EMPTY;
        bb.insert(Square::E4);
        assert!(bb.contains(Square::E4));
        assert_eq!(bb, Bitboard::from(Square::E4));
        bb.remove(Square::E4);
        assert!(bb.is_empty());
        assert_eq!(
            Bitboard::EMPTY.with_square(Square::H8).without_square(Square::H8),
            Bitboard::EMPTY
        );
    }

    #[test]
    fn single_and_multiple_bits() {
        assert!(!Bitboard::EMPTY.has_single_bit());
        assert!(Bitboard::from(Square::A1).has_single_bit());
        assert!(!Bitboard::new(3).has_single_bit());
        assert!(!Bitboard::from(Square::A1).more_than_one());
        assert!(Bitboard::new(3).more_than_one());
    }

    #[test]
    fn valid_index_to_occupancy() {
        let mask = Bitboard::new(0b1111);
        for i in 0..16 {
            assert_eq!(mask.occupancy(i, 4), Bitboard::new(i as u64));
        }
    }

    #[test]
    fn occupancy_spreads_onto_mask() {
        // mask of A1 and B2
        let mask = Bitboard::new(0x0201);
        assert_eq!(mask.occupancy(0b00, 2), Bitboard::EMPTY);
        assert_eq!(mask.occupancy(0b01, 2), Bitboard::from(Square::A1));
        assert_eq!(mask.occupancy(0b10, 2), Bitboard::from(Square::B2));
        assert_eq!(mask.occupancy(0b11, 2), mask);
    }

    #[test]
    fn occupancy_ignores_high_index_bits() {
        let mask = Bitboard::new(0xF0);
        assert_eq!(mask.occupancy(0b1_0001, 1), Bitboard::new(0x10));
    }

    #[test]
    #[should_panic]
    fn occupancy_too_many_bits() {
        let _ = Bitboard::new(0b11).occupancy(0, 3);
    }

    #[test]
    fn subsets_are_distinct_and_contained() {
        let mask = Bitboard::new(0x0010_106E_1010_1000);
        let subsets: Vec<Bitboard> = mask.subsets().collect();
        assert_eq!(subsets.len(), 1 << mask.len());
        for (i, &a) in subsets.iter().enumerate() {
            assert_eq!(a & !mask, Bitboard::EMPTY);
            assert!(subsets[i + 1..].iter().all(|&b| b != a));
        }
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn subsets_of_full_board() {
        let _ = Bitboard::ALL.subsets();
    }

    #[test]
    fn largest_subset_count() {
        let mask = Bitboard::ALL.without_square(Square::H8);
        assert_eq!(mask.subsets().size_hint().0, 1 << 63);
    }

    #[test]
    fn shifts_do_not_wrap() {
        assert_eq!(Bitboard::FILE_H.east(), Bitboard::EMPTY);
        assert_eq!(Bitboard::FILE_A.west(), Bitboard::EMPTY);
        assert_eq!(Bitboard::FILE_H.north_east(), Bitboard::EMPTY);
        assert_eq!(Bitboard::FILE_A.north_west(), Bitboard::EMPTY);
        assert_eq!(Bitboard::FILE_H.south_east(), Bitboard::EMPTY);
        assert_eq!(Bitboard::FILE_A.south_west(), Bitboard::EMPTY);
        assert_eq!(Bitboard::RANK_8.north(), Bitboard::EMPTY);
        assert_eq!(Bitboard::RANK_1.south(), Bitboard::EMPTY);
        assert_eq!(Bitboard::from(Square::D4).north_east(), Bitboard::from(Square::E5));
        assert_eq!(Bitboard::from(Square::D4).south_west(), Bitboard::from(Square::C3));
    }

    #[test]
    fn iterate_squares() {
        let bb = Bitboard::from(Square::C3) | Bitboard::from(Square::A1) | Bitboard::from(Square::H8);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::A1, Square::C3, Square::H8]);
        assert_eq!(Bitboard::ALL.count(), 64);
    }

    #[test]
    fn display_grid() {
        let shown = format!("{}", Bitboard::from(Square::A8));
        assert!(shown.starts_with("8 | 1 . . . . . . ."));
    }
}
