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

//! Errors which can occur while converting squares or building tables.

use thiserror::Error;

use super::{Piece, Square};

/// Errors that can occur in the lookup core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("square index {0} is out of bounds")]
    InvalidSquare(u8),

    #[error("illegal algebraic square name {0:?}")]
    InvalidAlgebraic(String),

    #[error("no squares in an empty bitboard")]
    EmptyBitboard,

    #[error("failed to find {piece:?} magic for square {square} in {tries} tries")]
    MagicNotFound {
        piece: Piece,
        square: Square,
        tries: u64,
    },

    #[error("{piece:?} magic for square {square} maps different attacks to one index")]
    MagicCollision { piece: Piece, square: Square },

    #[error("xorshift generators cannot be seeded with zero")]
    ZeroSeed,
}

/// Convenience `Result` type for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;
