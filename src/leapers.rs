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

//! Attacks of the pieces which jump rather than slide: pawns, knights and
//! kings. None of them depend on the occupancy of the board, so the tables
//! are computed at compile time.

use super::{Bitboard, Color};

/// A bitboard of all the squares a knight can move to if its position is
/// the index of the list.
pub const KNIGHT_ATTACKS: [Bitboard; 64] = create_knight_attacks();

/// A bitboard of all the squares a king can move to if his position is the
/// index in the list.
pub const KING_ATTACKS: [Bitboard; 64] = create_king_attacks();

/// A bitboard of all the squares which a pawn on the given square can
/// attack. The first index is for White's pawn attacks, the second is for
/// Black's.
pub const PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    create_pawn_attacks(Color::White),
    create_pawn_attacks(Color::Black),
];

const fn create_knight_attacks() -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut i = 0;
    while i < attacks.len() {
        attacks[i] = knight_attacks_set(Bitboard::new(1 << i));
        i += 1;
    }

    attacks
}

const fn create_king_attacks() -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut i = 0;
    while i < attacks.len() {
        attacks[i] = king_attacks_set(Bitboard::new(1 << i));
        i += 1;
    }

    attacks
}

const fn create_pawn_attacks(color: Color) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut i = 0;
    while i < attacks.len() {
        attacks[i] = pawn_attacks_set(color, Bitboard::new(1 << i));
        i += 1;
    }

    attacks
}

#[must_use]
/// Get every square attacked by at least one of the knights in `knights`.
pub const fn knight_attacks_set(knights: Bitboard) -> Bitboard {
    knights
        .north()
        .north_east()
        .union(knights.north().north_west())
        .union(knights.south().south_east())
        .union(knights.south().south_west())
        .union(knights.north_east().east())
        .union(knights.south_east().east())
        .union(knights.north_west().west())
        .union(knights.south_west().west())
}

#[must_use]
/// Get every square next to at least one of the kings in `kings`.
pub const fn king_attacks_set(kings: Bitboard) -> Bitboard {
    kings
        .north()
        .union(kings.south())
        .union(kings.east())
        .union(kings.west())
        .union(kings.north_east())
        .union(kings.north_west())
        .union(kings.south_east())
        .union(kings.south_west())
}

#[must_use]
/// Get the `targets` which at least one of the `kings` can step to. Targets
/// are empty squares for quiet moves, or enemy pieces for captures.
pub const fn king_moves(kings: Bitboard, targets: Bitboard) -> Bitboard {
    Bitboard::new(king_attacks_set(kings).as_u64() & targets.as_u64())
}

#[must_use]
/// Get the `targets` which at least one of the `knights` can jump to, never
/// landing on a square of `own`.
pub const fn knight_moves(knights: Bitboard, targets: Bitboard, own: Bitboard) -> Bitboard {
    Bitboard::new(knight_attacks_set(knights).as_u64() & targets.as_u64() & !own.as_u64())
}

#[must_use]
/// Get every square attacked by at least one of the pawns of `color` in
/// `pawns`.
pub const fn pawn_attacks_set(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => pawns.north_east().union(pawns.north_west()),
        Color::Black => pawns.south_east().union(pawns.south_west()),
    }
}

#[must_use]
/// Move every pawn of `color` one square forward, keeping only the pawns
/// which land on an `empty` square.
pub const fn pawn_single_pushes(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    let pushed = match color {
        Color::White => pawns.north(),
        Color::Black => pawns.south(),
    };
    Bitboard::new(pushed.as_u64() & empty.as_u64())
}

#[must_use]
/// Get the squares that pawns of `color` reach by moving two squares forward
/// through an empty square onto an empty square. Only pawns which started on
/// their home rank can land on the double-push rank, so `pawns` may contain
/// any pawns.
pub const fn pawn_double_pushes(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    let once = pawn_single_pushes(color, pawns, empty);
    let twice = pawn_single_pushes(color, once, empty);
    Bitboard::new(twice.as_u64() & color.pawn_double_push_rank().as_u64())
}

#[must_use]
/// Get the squares of the `enemies` which the pawns of `color` can capture.
pub const fn pawn_captures(color: Color, pawns: Bitboard, enemies: Bitboard) -> Bitboard {
    Bitboard::new(pawn_attacks_set(color, pawns).as_u64() & enemies.as_u64())
}

#[must_use]
/// Get the squares on the last rank which pawns of `color` can reach, either
/// by pushing onto an empty square or by capturing an enemy.
pub const fn pawn_promotions(
    color: Color,
    pawns: Bitboard,
    empty: Bitboard,
    enemies: Bitboard,
) -> Bitboard {
    let targets = pawn_single_pushes(color, pawns, empty)
        .union(pawn_captures(color, pawns, enemies));
    Bitboard::new(targets.as_u64() & color.pawn_promote_rank().as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Square};

    #[test]
    fn king_vectors() {
        // (king, targets, expected)
        let cases: [(u64, u64, u64); 11] = [
            // start position: everything around e1 is friendly
            (0x10, 0xffff_ffff_0000, 0x0),
            (0x0800_0000, 0xffff_ffff_f7ff_ffff, 0x1c_141c_0000),
            (0x0100_0000, 0xffff_ffff_feff_ffff, 0x3_0203_0000),
            (0x8000_0000, 0xffff_ffff_7fff_ffff, 0xc0_40c0_0000),
            (0x0800_0000_0000_0000, 0xf7ff_ffff_ffff_ffff, 0x141c_0000_0000_0000),
            (0x8, 0xffff_ffff_ffff_fff7, 0x1c14),
            (0x1, 0xffff_ffff_ffff_fffe, 0x302),
            (0x80, 0xffff_ffff_ffff_ff7f, 0xc040),
            (0x0100_0000_0000_0000, 0xfeff_ffff_ffff_ffff, 0x0203_0000_0000_0000),
            (0x8000_0000_0000_0000, 0x7fff_ffff_ffff_ffff, 0x40c0_0000_0000_0000),
            // d4 with c5 and e4 occupied by friends
            (0x0800_0000, 0xffff_fffb_e7ff_ffff, 0x18_041c_0000),
        ];
        for (king, targets, expected) in cases {
            let kings = Bitboard::new(king);
            assert_eq!(
                king_moves(kings, Bitboard::new(targets)),
                Bitboard::new(expected),
                "king on {kings:?}"
            );
            let sq = Square::try_from(kings).unwrap();
            assert_eq!(
                KING_ATTACKS[sq as usize] & Bitboard::new(targets),
                Bitboard::new(expected)
            );
        }
    }

    #[test]
    fn king_attacks_are_chebyshev_neighbors() {
        for sq in Bitboard::ALL {
            for other in Bitboard::ALL {
                assert_eq!(
                    KING_ATTACKS[sq as usize].contains(other),
                    sq.chebyshev_to(other) == 1,
                    "{sq} -> {other}"
                );
            }
        }
    }

    #[test]
    fn knight_attacks_are_knight_jumps() {
        for sq in Bitboard::ALL {
            for other in Bitboard::ALL {
                let dr = sq.rank().abs_diff(other.rank());
                let df = sq.file().abs_diff(other.file());
                let is_jump = (dr == 1 && df == 2) || (dr == 2 && df == 1);
                assert_eq!(
                    KNIGHT_ATTACKS[sq as usize].contains(other),
                    is_jump,
                    "{sq} -> {other}"
                );
            }
        }
    }

    #[test]
    /// Test that the shift-built tables agree with walking the step sets.
    fn step_sets_agree() {
        fn by_steps(sq: Square, steps: &[Direction], distance: u8) -> Bitboard {
            steps
                .iter()
                .map(|&dir| sq + dir)
                .filter(|&target| sq.chebyshev_to(target) == distance)
                .fold(Bitboard::EMPTY, |acc, target| acc.with_square(target))
        }

        for sq in Bitboard::ALL {
            assert_eq!(
                KNIGHT_ATTACKS[sq as usize],
                by_steps(sq, &Direction::KNIGHT_STEPS, 2)
            );
            assert_eq!(
                KING_ATTACKS[sq as usize],
                by_steps(sq, &Direction::KING_STEPS, 1)
            );
        }
    }

    #[test]
    fn knight_corner() {
        assert_eq!(
            KNIGHT_ATTACKS[Square::A1 as usize],
            Bitboard::from(Square::B3) | Bitboard::from(Square::C2)
        );
        assert_eq!(
            KNIGHT_ATTACKS[Square::H8 as usize],
            Bitboard::from(Square::G6) | Bitboard::from(Square::F7)
        );
    }

    #[test]
    fn two_knights_at_once() {
        let knights = Bitboard::from(Square::B1) | Bitboard::from(Square::G1);
        let own = Bitboard::new(0xFFFF);
        assert_eq!(
            knight_moves(knights, !Bitboard::EMPTY, own),
            Bitboard::from(Square::A3)
                | Bitboard::from(Square::C3)
                | Bitboard::from(Square::F3)
                | Bitboard::from(Square::H3)
        );

        // only enemy pieces as targets: captures
        let enemies = Bitboard::from(Square::C3) | Bitboard::from(Square::E2);
        let own = Bitboard::from(Square::B1) | Bitboard::from(Square::G1);
        assert_eq!(
            knight_moves(knights, enemies, own),
            enemies
        );

        // with nothing in the way, the moves of both knights are combined
        let both = knight_moves(knights, !Bitboard::EMPTY, Bitboard::EMPTY);
        assert_eq!(
            both,
            KNIGHT_ATTACKS[Square::B1 as usize] | KNIGHT_ATTACKS[Square::G1 as usize]
        );
        assert!(both.contains(Square::D2) && both.contains(Square::E2));
    }

    #[test]
    fn set_moves_are_unions_of_tables() {
        let rng = fastrand::Rng::with_seed(3);
        for _ in 0..500 {
            let pieces = Bitboard::new(rng.u64(..) & rng.u64(..) & rng.u64(..));
            let targets = Bitboard::new(rng.u64(..));
            let own = Bitboard::new(rng.u64(..));
            let kings = pieces.fold(Bitboard::EMPTY, |acc, sq| acc | KING_ATTACKS[sq as usize]);
            let knights = pieces.fold(Bitboard::EMPTY, |acc, sq| acc | KNIGHT_ATTACKS[sq as usize]);
            assert_eq!(king_moves(pieces, targets), kings & targets);
            assert_eq!(knight_moves(pieces, targets, own), knights & targets & !own);
        }
    }

    #[test]
    fn two_kings_at_once() {
        // kings on a1 and h8 share no neighbors
        let kings = Bitboard::from(Square::A1) | Bitboard::from(Square::H8);
        assert_eq!(
            king_moves(kings, !kings),
            Bitboard::new(0x302 | 0x40c0_0000_0000_0000)
        );
    }

    #[test]
    fn pawn_attacks_by_color() {
        assert_eq!(
            PAWN_ATTACKS[Color::White as usize][Square::E4 as usize],
            Bitboard::from(Square::D5) | Bitboard::from(Square::F5)
        );
        assert_eq!(
            PAWN_ATTACKS[Color::Black as usize][Square::E4 as usize],
            Bitboard::from(Square::D3) | Bitboard::from(Square::F3)
        );
        // no wrapping on the edge files
        assert_eq!(
            PAWN_ATTACKS[Color::White as usize][Square::A2 as usize],
            Bitboard::from(Square::B3)
        );
        assert_eq!(
            PAWN_ATTACKS[Color::Black as usize][Square::H7 as usize],
            Bitboard::from(Square::G6)
        );
        // nothing beyond the last rank
        assert_eq!(
            PAWN_ATTACKS[Color::White as usize][Square::D8 as usize],
            Bitboard::EMPTY
        );
    }

    #[test]
    fn pawn_attacks_are_mirrored() {
        for sq in Bitboard::ALL {
            let white = PAWN_ATTACKS[Color::White as usize][sq as usize];
            let black = PAWN_ATTACKS[Color::Black as usize][sq.opposite() as usize];
            let mirrored = black.fold(Bitboard::EMPTY, |acc, s| acc | Bitboard::from(s.opposite()));
            assert_eq!(white, mirrored);
        }
    }

    #[test]
    fn white_single_pushes() {
        let cases: [(u64, u64, u64); 3] = [
            (0xff00, 0xffff_ffff_ffff_00ff, 0xff_0000),
            (0x188_5600, 0xffff_ffff_fe77_a9ff, 0x1_8856_0000),
            (0x1_0000_0000_0000, 0xfffe_ffff_ffff_ffff, 0x100_0000_0000_0000),
        ];
        for (pawns, empty, expected) in cases {
            assert_eq!(
                pawn_single_pushes(Color::White, Bitboard::new(pawns), Bitboard::new(empty)),
                Bitboard::new(expected)
            );
        }
    }

    #[test]
    fn white_double_pushes() {
        let cases: [(u64, u64, u64); 4] = [
            (0xff00, 0xffff_ffff_0000, 0xff00_0000),
            // 1. e4 Nf6 2. Bc4
            (0x1000_ef00, 0x4010_dfef_ebff_1020, 0xeb00_0000),
            // 1. d4 d5 2. c4 e6 3. Nf3
            (0x0c00_f300, 0x0018_eff7_f3df_0c40, 0xd300_0000),
            (0x8800_6700, 0x048c_3bff_779f_9842, 0x0700_0000),
        ];
        for (pawns, empty, expected) in cases {
            assert_eq!(
                pawn_double_pushes(Color::White, Bitboard::new(pawns), Bitboard::new(empty)),
                Bitboard::new(expected)
            );
        }
    }

    #[test]
    fn black_pushes_mirror_white() {
        let pawns = Bitboard::new(0x00ff_0000_0000_0000);
        let empty = Bitboard::new(0x0000_ffff_ffff_0000);
        assert_eq!(
            pawn_single_pushes(Color::Black, pawns, empty),
            Bitboard::new(0x0000_ff00_0000_0000)
        );
        assert_eq!(
            pawn_double_pushes(Color::Black, pawns, empty),
            Bitboard::new(0x0000_00ff_0000_0000)
        );
    }

    #[test]
    fn blocked_double_push() {
        // a pawn on e3 blocks e2 from moving at all
        let pawns = Bitboard::from(Square::E2);
        let empty = !(pawns | Bitboard::from(Square::E3));
        assert_eq!(pawn_double_pushes(Color::White, pawns, empty), Bitboard::EMPTY);
    }

    #[test]
    fn captures_and_promotions() {
        let pawns = Bitboard::from(Square::B7) | Bitboard::from(Square::G2);
        let enemies = Bitboard::from(Square::A8)
            | Bitboard::from(Square::C8)
            | Bitboard::from(Square::H3);
        let empty = !(pawns | enemies | Bitboard::from(Square::B8));
        assert_eq!(
            pawn_captures(Color::White, pawns, enemies),
            enemies
        );
        assert_eq!(
            pawn_promotions(Color::White, pawns, empty, enemies),
            Bitboard::from(Square::A8) | Bitboard::from(Square::C8)
        );
    }
}
