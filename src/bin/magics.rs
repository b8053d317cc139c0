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

//! Search for bishop and rook magics and print them as Rust arrays, ready to
//! be passed to `Lookup::from_magics`.

#![warn(clippy::pedantic)]

use std::{process::ExitCode, time::Instant};

use chess_lookup::{Bitboard, Lookup, MagicConfig, Xorshift};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the generator proposing candidate magics. Must not be 0.
    #[arg(short, long, default_value_t = Xorshift::DEFAULT_SEED)]
    seed: u32,

    /// Number of candidates to try per square before giving up.
    #[arg(short, long, default_value_t = chess_lookup::magic::MAX_MAGIC_TRIES)]
    max_tries: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = MagicConfig {
        seed: args.seed,
        max_tries: args.max_tries,
    };

    let tic = Instant::now();
    let lookup = match Lookup::with_config(&config) {
        Ok(lookup) => lookup,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let toc = Instant::now();

    print_magics("BISHOP_MAGICS", &lookup.bishop_magics());
    println!();
    print_magics("ROOK_MAGICS", &lookup.rook_magics());
    eprintln!("built tables in {} ms", (toc - tic).as_millis());

    ExitCode::SUCCESS
}

/// Print a list of magics as a Rust constant, one square per line.
fn print_magics(name: &str, magics: &[u64; 64]) {
    println!("const {name}: [u64; 64] = [");
    for (magic, sq) in magics.iter().zip(Bitboard::ALL) {
        println!("    0x{magic:016x}, // {sq}");
    }
    println!("];");
}
