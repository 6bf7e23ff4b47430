//! Text rendering of a finished search: the chosen board followed by the trace.

use std::fmt;
use std::io::{self, Write};

use crate::alpha_beta_searcher::SearchOutcome;

pub const TRACE_HEADER: &str = "Node,Depth,Value,Alpha,Beta";

/// Displays as the full report text, one line per board row and trace entry.
pub struct Report<'a>(pub &'a SearchOutcome);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.next_board)?;
        writeln!(f, "{}", TRACE_HEADER)?;
        for entry in self.0.trace.iter() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

pub fn write_report<W: Write>(writer: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    write!(writer, "{}", Report(outcome))?;
    writer.flush()
}

pub fn format_report(outcome: &SearchOutcome) -> String {
    Report(outcome).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::{execute, SearchConfig};
    use crate::input_handler::parse_problem;

    #[test]
    fn test_opening_depth_1_report() {
        let problem = parse_problem(
            "X\n1\n********\n********\n********\n***OX***\n***XO***\n********\n********\n********\n",
        )
        .unwrap();
        let outcome = execute(
            &problem.board,
            problem.mover,
            SearchConfig::new(problem.depth_limit),
        )
        .unwrap();

        let expected = "\
********
********
***X****
***XX***
***XO***
********
********
********
Node,Depth,Value,Alpha,Beta
root,0,-Infinity,-Infinity,Infinity
d3,1,4,-Infinity,Infinity
root,0,4,4,Infinity
c4,1,4,4,Infinity
root,0,4,4,Infinity
f5,1,4,4,Infinity
root,0,4,4,Infinity
e6,1,4,4,Infinity
root,0,4,4,Infinity
";
        assert_eq!(expected, format_report(&outcome));
    }

    #[test]
    fn test_depth_0_report_has_only_board_and_header() {
        let problem = parse_problem(
            "O\n0\n********\n********\n********\n***OX***\n***XO***\n********\n********\n********\n",
        )
        .unwrap();
        let outcome = execute(
            &problem.board,
            problem.mover,
            SearchConfig::new(problem.depth_limit),
        )
        .unwrap();
        let report = format_report(&outcome);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(9, lines.len());
        assert_eq!("***OX***", lines[3]);
        assert_eq!(TRACE_HEADER, lines[8]);
    }

    #[test]
    fn test_written_report_matches_formatted_report() {
        let problem = parse_problem(
            "X\n2\n********\n********\n********\n***OX***\n***XO***\n********\n********\n********\n",
        )
        .unwrap();
        let outcome = execute(
            &problem.board,
            problem.mover,
            SearchConfig::new(problem.depth_limit),
        )
        .unwrap();

        let mut written = Vec::new();
        write_report(&mut written, &outcome).unwrap();
        assert_eq!(format_report(&outcome).as_bytes(), written.as_slice());
        assert_eq!(8 + 1 + outcome.trace.len(), format_report(&outcome).lines().count());
    }
}
