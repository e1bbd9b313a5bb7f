//! Text rendering of solver verdicts.
//!
//! Each puzzle produces a header line, `"<index>, not solvable"` or
//! `"<index>, solvable, solved, <count>:"`, followed for solved puzzles by one
//! `"<column> <row> <label>"` line per move in playing order.
use crate::solver::Verdict;

/// Report lines for the puzzle at `index`.
///
/// # Examples
/// ```
/// use fifteen_solver::report::format_verdict;
/// use fifteen_solver::solver::Verdict;
/// assert_eq!(format_verdict(4, &Verdict::NotSolvable), vec!["4, not solvable"]);
/// ```
pub fn format_verdict(index: usize, verdict: &Verdict) -> Vec<String> {
    match verdict {
        Verdict::NotSolvable => vec![format!("{}, not solvable", index)],
        Verdict::Solved(solution) => {
            let mut lines = Vec::with_capacity(solution.len() + 1);
            lines.push(format!("{}, solvable, solved, {}:", index, solution.len()));
            lines.extend(solution.steps.iter().map(|step| step.to_string()));
            lines
        }
    }
}

/// Renders a whole batch, puzzles separated by an empty line.
pub fn render_batch(verdicts: &[Verdict]) -> String {
    let mut output = String::new();
    for (index, verdict) in verdicts.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        for line in format_verdict(index, verdict) {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output
}
