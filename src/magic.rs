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

//! Magic bitboards, used for generating bishop, rook, and queen attacks.
//!
//! For every square, the occupancy of the squares a slider could be blocked
//! on (its relevant mask) is multiplied by a magic number. The top bits of the
//! product then index a table of precomputed attacks.

use super::{Bitboard, Direction, Error, Piece, Result, Square, Xorshift};

/// The default number of candidates to try when searching for one magic.
pub const MAX_MAGIC_TRIES: u64 = 100_000_000;

/// Candidates whose product with the mask puts fewer than this many bits in
/// the top byte are rejected without being checked.
const MIN_TOP_BYTE_BITS: u8 = 6;

/// The top byte of a bitboard.
const TOP_BYTE: Bitboard = Bitboard::new(0xFF00_0000_0000_0000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece which has its own magic table.
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    #[must_use]
    /// Get the directions along which this slider moves.
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Slider::Bishop => &Direction::BISHOP_DIRECTIONS,
            Slider::Rook => &Direction::ROOK_DIRECTIONS,
        }
    }
}

impl From<Slider> for Piece {
    fn from(slider: Slider) -> Piece {
        match slider {
            Slider::Bishop => Piece::Bishop,
            Slider::Rook => Piece::Rook,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The configuration of a magic search.
pub struct MagicConfig {
    /// The seed of the generator which proposes candidate magics. Must not
    /// be 0.
    pub seed: u32,
    /// The number of candidates to try for each square before giving up.
    pub max_tries: u64,
}

impl MagicConfig {
    #[must_use]
    /// Get the default configuration.
    pub const fn new() -> MagicConfig {
        MagicConfig {
            seed: Xorshift::DEFAULT_SEED,
            max_tries: MAX_MAGIC_TRIES,
        }
    }
}

impl Default for MagicConfig {
    fn default() -> Self {
        MagicConfig::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// All the information needed to look up the attacks of a slider on one
/// square.
pub struct SquareMagic {
    /// A mask which, when &ed with the occupancy bitboard, will give only the
    /// bits that matter when computing attacks.
    pub mask: Bitboard,
    /// The magic number to multiply to hash the masked occupancy.
    pub magic: Bitboard,
    /// The shift related to this square, equal to 64 minus the size of the
    /// mask.
    pub shift: u8,
    /// The start of this square's slots in the attack table.
    pub offset: usize,
}

impl SquareMagic {
    const EMPTY: SquareMagic = SquareMagic {
        mask: Bitboard::EMPTY,
        magic: Bitboard::EMPTY,
        shift: 64,
        offset: 0,
    };

    #[inline(always)]
    #[must_use]
    /// Get the index, relative to `offset`, of the attacks for `occupancy`.
    pub fn index(&self, occupancy: Bitboard) -> usize {
        magic_index(occupancy & self.mask, self.magic, self.shift)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A complete magic table for one kind of slider.
pub struct SlidingTable {
    slider: Slider,
    entries: [SquareMagic; 64],
    /// Every square's attacks, packed back to back.
    attacks: Vec<Bitboard>,
}

impl SlidingTable {
    /// Build a table from a known magic for every square, indexed by square.
    ///
    /// # Errors
    ///
    /// Returns `Error::MagicCollision` if one of the magics maps two
    /// occupancies with different attacks onto the same slot.
    pub fn from_magics(slider: Slider, magics: &[u64; 64]) -> Result<SlidingTable> {
        let mut entries = [SquareMagic::EMPTY; 64];
        let mut attacks = Vec::new();

        for sq in Bitboard::ALL {
            let (occupancies, sq_attacks) = enumerate(slider, sq);
            let mask = relevant_mask(slider, sq);
            let entry = SquareMagic {
                mask,
                magic: Bitboard::new(magics[sq as usize]),
                shift: 64 - mask.len(),
                offset: attacks.len(),
            };
            attacks.resize(entry.offset + occupancies.len(), Bitboard::EMPTY);
            if !populate(
                &mut attacks[entry.offset..],
                &occupancies,
                &sq_attacks,
                entry.magic,
                entry.shift,
            ) {
                return Err(Error::MagicCollision {
                    piece: slider.into(),
                    square: sq,
                });
            }
            entries[sq as usize] = entry;
        }

        Ok(SlidingTable {
            slider,
            entries,
            attacks,
        })
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares attacked by this table's slider on `sq` when the board
    /// is occupied by `occupancy`.
    pub fn attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        let entry = &self.entries[sq as usize];
        self.attacks[entry.offset + entry.index(occupancy)]
    }

    #[must_use]
    /// Get the slider this table was built for.
    pub const fn slider(&self) -> Slider {
        self.slider
    }

    #[must_use]
    /// Get the lookup entry for `sq`.
    pub const fn entry(&self, sq: Square) -> &SquareMagic {
        &self.entries[sq as usize]
    }

    #[must_use]
    /// Get the magic of every square, indexed by square.
    pub fn magics(&self) -> [u64; 64] {
        self.entries.map(|entry| entry.magic.as_u64())
    }

    #[must_use]
    /// Get the total number of slots in the table.
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[must_use]
    /// Determine whether the table has no slots. Never true for a table made
    /// by `from_magics`.
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

/// Search for the magics of every square, bishop then rook for each square in
/// order, all drawing from one generator seeded by `config`. The result is
/// the bishop magics followed by the rook magics.
///
/// # Errors
///
/// Returns `Error::ZeroSeed` if the seed is 0, and `Error::MagicNotFound` if
/// any square exhausts its budget.
pub fn find_magics(config: &MagicConfig) -> Result<([u64; 64], [u64; 64])> {
    let mut rng = Xorshift::with_seed(config.seed)?;
    let mut bishop = [0; 64];
    let mut rook = [0; 64];
    for sq in Bitboard::ALL {
        bishop[sq as usize] = find_magic(Slider::Bishop, sq, &mut rng, config.max_tries)?.as_u64();
        rook[sq as usize] = find_magic(Slider::Rook, sq, &mut rng, config.max_tries)?.as_u64();
    }

    Ok((bishop, rook))
}

/// Search for a magic for `slider` on `sq`, drawing candidates from `rng`.
/// Two occupancies may share a slot only when their attacks are identical.
///
/// # Errors
///
/// Returns `Error::MagicNotFound` if no candidate works within `max_tries`.
pub fn find_magic(
    slider: Slider,
    sq: Square,
    rng: &mut Xorshift,
    max_tries: u64,
) -> Result<Bitboard> {
    let mask = relevant_mask(slider, sq);
    let shift = 64 - mask.len();
    let (occupancies, attacks) = enumerate(slider, sq);
    let mut used = vec![Bitboard::EMPTY; occupancies.len()];

    for _ in 0..max_tries {
        let magic = rng.sparse_bitboard();
        if ((mask * magic) & TOP_BYTE).len() < MIN_TOP_BYTE_BITS {
            continue;
        }

        used.fill(Bitboard::EMPTY);
        if populate(&mut used, &occupancies, &attacks, magic, shift) {
            return Ok(magic);
        }
    }

    Err(Error::MagicNotFound {
        piece: slider.into(),
        square: sq,
        tries: max_tries,
    })
}

/// Write `attacks[i]` into the slot of `occupancies[i]` for every `i`. Returns
/// `false` if some slot would need two different attacks.
///
/// Unused slots are marked by `Bitboard::EMPTY`, which no slider attack can be.
fn populate(
    slots: &mut [Bitboard],
    occupancies: &[Bitboard],
    attacks: &[Bitboard],
    magic: Bitboard,
    shift: u8,
) -> bool {
    for (&occupancy, &attack) in occupancies.iter().zip(attacks) {
        let slot = &mut slots[magic_index(occupancy, magic, shift)];
        if slot.is_empty() {
            *slot = attack;
        } else if *slot != attack {
            return false;
        }
    }

    true
}

/// Get every subset of the relevant mask of `slider` on `sq`, along with the
/// attacks for each subset.
fn enumerate(slider: Slider, sq: Square) -> (Vec<Bitboard>, Vec<Bitboard>) {
    let occupancies: Vec<Bitboard> = relevant_mask(slider, sq).subsets().collect();
    let attacks = occupancies
        .iter()
        .map(|&occupancy| ray_attacks(slider, sq, occupancy))
        .collect();

    (occupancies, attacks)
}

#[inline(always)]
/// Use magic hashing to get the index to look up attacks in a bitboard.
fn magic_index(occupancy: Bitboard, magic: Bitboard, shift: u8) -> usize {
    usize::from((occupancy * magic) >> shift)
}

#[must_use]
/// Create the mask for the relevant bits in magic of a slider on `sq`: every
/// square along its directions, except the last one before the edge of the
/// board. A piece on the last square cannot block anything.
pub fn relevant_mask(slider: Slider, sq: Square) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for &dir in slider.directions() {
        let mut current_square = sq;
        while is_valid_step(current_square, dir) {
            current_square += dir;
            if !is_valid_step(current_square, dir) {
                break;
            }
            mask.insert(current_square);
        }
    }

    mask
}

#[must_use]
/// Construct the squares attacked by `slider` on `sq` when the board is
/// occupied by the pieces in `occupancy`. Each ray includes the first
/// occupied square it meets. This is slow and should only be used for
/// generating tables and checking them.
pub fn ray_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for &dir in slider.directions() {
        let mut current_square = sq;
        for _ in 0..7 {
            if !is_valid_step(current_square, dir) {
                break;
            }
            current_square += dir;
            result.insert(current_square);
            if occupancy.contains(current_square) {
                break;
            }
        }
    }

    result
}

/// Return whether the following move is a single step, rather than one which
/// wraps around the board.
fn is_valid_step(sq: Square, dir: Direction) -> bool {
    sq.chebyshev_to(sq + dir) <= 1
}
