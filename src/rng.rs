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

//! A small deterministic pseudo-random number generator for magic searches.

use super::{Bitboard, Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A 32-bit xorshift generator (shifts 13, 17, 5).
///
/// The sequence depends only on the seed, so a magic search driven by one
/// `Xorshift` finds the same magics every time it visits the squares in the
/// same order.
pub struct Xorshift {
    state: u32,
}

impl Xorshift {
    /// The seed used by `Xorshift::new`.
    pub const DEFAULT_SEED: u32 = 1_804_289_383;

    #[must_use]
    /// Create a generator seeded with `Xorshift::DEFAULT_SEED`.
    pub const fn new() -> Xorshift {
        Xorshift {
            state: Xorshift::DEFAULT_SEED,
        }
    }

    /// Create a generator with a custom seed.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroSeed` if `seed` is 0, since a xorshift generator
    /// seeded with 0 only ever produces 0.
    pub fn with_seed(seed: u32) -> Result<Xorshift> {
        if seed == 0 {
            return Err(Error::ZeroSeed);
        }
        Ok(Xorshift { state: seed })
    }

    /// Draw the next 32-bit number.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Draw a 64-bit number assembled from the low 16 bits of four
    /// consecutive 32-bit draws, least significant part first.
    pub fn next_u64(&mut self) -> u64 {
        let n1 = u64::from(self.next_u32() & 0xFFFF);
        let n2 = u64::from(self.next_u32() & 0xFFFF);
        let n3 = u64::from(self.next_u32() & 0xFFFF);
        let n4 = u64::from(self.next_u32() & 0xFFFF);

        n1 | (n2 << 16) | (n3 << 32) | (n4 << 48)
    }

    /// Generate a random, mostly-empty bitboard by intersecting three draws.
    /// Sparse multipliers are far more likely to be valid magics.
    pub fn sparse_bitboard(&mut self) -> Bitboard {
        Bitboard::new(self.next_u64() & self.next_u64() & self.next_u64())
    }
}

impl Default for Xorshift {
    fn default() -> Xorshift {
        Xorshift::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draws_from_default_seed() {
        let mut rng = Xorshift::new();
        let first = rng.next_u32();
        let mut x = Xorshift::DEFAULT_SEED;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        assert_eq!(first, x);
        assert_ne!(rng.next_u32(), first);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift::with_seed(42).unwrap();
        let mut b = Xorshift::with_seed(42).unwrap();
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_rejected() {
        assert_eq!(Xorshift::with_seed(0), Err(Error::ZeroSeed));
    }

    #[test]
    fn never_reaches_zero() {
        let mut rng = Xorshift::new();
        for _ in 0..10_000 {
            assert_ne!(rng.next_u32(), 0);
        }
    }

    #[test]
    fn sparse_draws_are_sparse() {
        let mut rng = Xorshift::new();
        let total: u32 = (0..1000).map(|_| u32::from(rng.sparse_bitboard().len())).sum();
        // three-way intersection keeps about an eighth of the bits
        assert!(total < 1000 * 16);
    }
}
