//! Perft breakdown for a position, one row per depth.
//!
//! usage: perft <depth> [fen]

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use gopher_chess::board::{human_count, Board, PerftStats, START_FEN};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(depth) = args.first().and_then(|d| d.parse::<usize>().ok()) else {
        eprintln!("usage: perft <depth> [fen]");
        return ExitCode::FAILURE;
    };
    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        START_FEN.to_string()
    };

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{board}");
    println!("Depth {}      Time", PerftStats::HEADER);
    for d in 1..=depth {
        let start = Instant::now();
        let stats = board.perft_stats(d);
        let elapsed = start.elapsed();
        let nps = (stats.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
        println!(
            "{d:>5} {stats} {:>8.3}s  ({} nodes/s)",
            elapsed.as_secs_f64(),
            human_count(nps)
        );
    }
    ExitCode::SUCCESS
}
