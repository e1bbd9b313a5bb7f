use clap::Parser;
use fifteen_solver::engine::Board;
use fifteen_solver::logging;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Write seeded, solvable 15-puzzle scrambles", long_about = None)]
struct Args {
    /// Number of puzzles to generate
    #[clap(short, long, default_value_t = 10)]
    count: usize,

    /// Seed of the first puzzle; puzzle i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of random moves applied to the goal layout
    #[clap(short, long, default_value_t = 30)]
    walk_length: usize,

    /// Write puzzles here instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let puzzles: Vec<String> = (0..args.count as u64)
        .map(|i| {
            let board = Board::scrambled(args.seed + i, args.walk_length);
            debug!(seed = args.seed + i, "generated puzzle\n{}", board);
            board.to_string()
        })
        .collect();
    let text = format!("{}\n", puzzles.join("\n"));

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
        None => print!("{}", text),
    }

    ExitCode::SUCCESS
}
