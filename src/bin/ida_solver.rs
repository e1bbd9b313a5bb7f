use clap::Parser;
use fifteen_solver::heuristics::ConflictRule;
use fifteen_solver::logging;
use fifteen_solver::report::render_batch;
use fifteen_solver::solver::{solve_all, SolverConfig, Verdict};
use fifteen_solver::utils::load_puzzles;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a batch of 15-puzzles with IDA*", long_about = None)]
struct Args {
    /// Path to the puzzle file (16 integers per puzzle, blank as -1)
    #[clap(default_value = "15_puzzles.txt")]
    puzzle_file: PathBuf,

    /// Write the solution log here instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Linear-conflict rule used by the heuristic
    #[clap(short, long, value_enum, default_value_t = ConflictRule::EvenCount)]
    conflict_rule: ConflictRule,

    /// Print each puzzle and its final board to stderr
    #[clap(long)]
    show_boards: bool,

    /// Enable debug logging for the search
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let puzzles = match load_puzzles(&args.puzzle_file) {
        Ok(puzzles) => puzzles,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        count = puzzles.len(),
        file = %args.puzzle_file.display(),
        "loaded puzzles"
    );

    let config = SolverConfig {
        conflict_rule: args.conflict_rule,
    };
    let verdicts = solve_all(&puzzles, &config);

    if args.show_boards {
        for (index, (board, verdict)) in puzzles.iter().zip(&verdicts).enumerate() {
            eprintln!("Puzzle {}:\n{}\n", index, board);
            if let Verdict::Solved(solution) = verdict {
                if let Some(final_board) = solution.replay(board) {
                    eprintln!("After {} moves:\n{}\n", solution.len(), final_board);
                }
            }
        }
    }

    let log = render_batch(&verdicts);
    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &log) {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            println!("Wrote {} verdicts to {}", verdicts.len(), path.display());
        }
        None => print!("{}", log),
    }

    ExitCode::SUCCESS
}
