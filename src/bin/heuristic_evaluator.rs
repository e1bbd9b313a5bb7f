use clap::Parser;
use fifteen_solver::engine::Board;
use fifteen_solver::heuristics::{evaluate, ConflictRule};
use fifteen_solver::logging;
use fifteen_solver::solver::{solve, SolverConfig, Verdict};
use std::time::Instant;

const RULES: [(&str, ConflictRule); 3] = [
    ("EVEN", ConflictRule::EvenCount),
    ("CANONICAL", ConflictRule::Canonical),
    ("MANHATTAN", ConflictRule::ManhattanOnly),
];

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare heuristic rules on seeded scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Random moves per scramble
    #[clap(short, long, default_value_t = 30)]
    walk_length: usize,

    /// Enable debug logging for the search
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct Totals {
    moves: usize,
    nodes: u64,
    /// Boards where this rule returned a longer path than the best rule did.
    longer_than_best: usize,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut totals: Vec<Totals> = RULES.iter().map(|_| Totals::default()).collect();

    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let board = Board::scrambled(current_seed, args.walk_length);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        let mut lengths = Vec::with_capacity(RULES.len());
        for ((name, rule), total) in RULES.iter().zip(totals.iter_mut()) {
            let started = Instant::now();
            let solution = match solve(&board, &SolverConfig { conflict_rule: *rule }) {
                Verdict::Solved(solution) => solution,
                Verdict::NotSolvable => {
                    eprintln!("Warning: scramble with seed {} reported unsolvable", current_seed);
                    break;
                }
            };
            println!(
                "  Rule: {:<10} Estimate: {:<3} Moves: {:<3} Nodes: {:<10} Time: {:.2?}",
                name,
                evaluate(&board, *rule),
                solution.len(),
                solution.stats.nodes_expanded,
                started.elapsed()
            );
            total.moves += solution.len();
            total.nodes += solution.stats.nodes_expanded;
            lengths.push(solution.len());
        }

        if let Some(&best) = lengths.iter().min() {
            for (total, &length) in totals.iter_mut().zip(&lengths) {
                if length > best {
                    total.longer_than_best += 1;
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    if args.boards == 0 {
        return;
    }

    println!("\n--- Averages ---");
    for ((name, _), total) in RULES.iter().zip(&totals) {
        println!(
            "Rule {:<10}: Moves = {:.2}, Nodes = {:.1}, Longer than best on {} board(s)",
            name,
            total.moves as f64 / args.boards as f64,
            total.nodes as f64 / args.boards as f64,
            total.longer_than_best
        );
    }
}
