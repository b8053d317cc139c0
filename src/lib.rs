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

//! Bitboards and attack tables for chess engines.
//!
//! Pawn, knight, and king attacks are computed at compile time. Bishop, rook,
//! and queen attacks are looked up through magic bitboards, whose tables are
//! built once by `Lookup::new` and then queried in constant time.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use bitboard::Bitboard;

mod color;
pub use color::Color;

mod direction;
pub use direction::Direction;

mod error;
pub use error::{Error, Result};

pub mod leapers;

mod lookup;
pub use lookup::{Lookup, PieceSets, Pieces};

pub mod magic;
pub use magic::{MagicConfig, Slider};

mod piece;
pub use piece::Piece;

mod rng;
pub use rng::Xorshift;

mod square;
pub use square::Square;
