//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::graph::Graph;
use crate::search::{PathOutcome, PathSolution};
use anyhow::Result;
use std::path::Path;

/// Formats search results for console output and files
pub struct ResultFormatter;

impl ResultFormatter {
    /// Format a full outcome for console output
    pub fn format_outcome(outcome: &PathOutcome, show_attempts: bool) -> String {
        let mut output = String::new();

        match outcome {
            PathOutcome::Found(solution) => {
                output.push_str(&Self::format_solution(solution));
            }
            PathOutcome::NoPath(report) => {
                output.push_str(&format!(
                    "No path exists from {} to {} ({} candidate lengths exhausted in {:.3}s)\n",
                    report.source,
                    report.target,
                    report.attempts.len(),
                    report.solve_time.as_secs_f64()
                ));
            }
        }

        if show_attempts && !outcome.attempts().is_empty() {
            output.push('\n');
            output.push_str(&Self::format_attempts(outcome));
        }

        output
    }

    /// Format a single solution
    pub fn format_solution(solution: &PathSolution) -> String {
        let mut output = String::new();

        output.push_str(&format!("Shortest path found: {}\n", solution));
        output.push_str(&format!(
            "Length: {} nodes ({} edges)\n",
            solution.length(),
            solution.edge_count()
        ));
        output.push_str(&format!(
            "Lengths tried: {}, total time: {:.3}s\n",
            solution.attempts.len(),
            solution.solve_time.as_secs_f64()
        ));

        output
    }

    /// Format the per-length attempt table
    pub fn format_attempts(outcome: &PathOutcome) -> String {
        let mut output = String::new();

        output.push_str("Attempts:\n");
        output.push_str("Length | Variables | Clauses | Result  | Time(ms)\n");
        output.push_str("-------|-----------|---------|---------|---------\n");

        for attempt in outcome.attempts() {
            output.push_str(&format!(
                "{:6} | {:9} | {:7} | {:7} | {}\n",
                attempt.length,
                attempt.variables,
                attempt.clauses,
                if attempt.satisfiable { "SAT" } else { "UNSAT" },
                attempt.solve_time_ms
            ));
        }

        output
    }

    /// Format a graph's adjacency listing
    pub fn format_graph(graph: &Graph) -> String {
        graph.to_string()
    }

    /// Save an outcome to the output directory in the configured format
    pub fn save_outcome<P: AsRef<Path>>(
        outcome: &PathOutcome,
        output_dir: P,
        format: &OutputFormat,
        save_report: bool,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                let filepath = output_dir.join("result.txt");
                std::fs::write(filepath, Self::format_outcome(outcome, save_report))?;
            }
            OutputFormat::Json => {
                match outcome {
                    PathOutcome::Found(solution) => {
                        solution.save_to_file(output_dir.join("result.json"))?;
                    }
                    PathOutcome::NoPath(report) => {
                        let json = serde_json::to_string_pretty(report)?;
                        std::fs::write(output_dir.join("result.json"), json)?;
                    }
                }
                if save_report {
                    let json = serde_json::to_string_pretty(outcome.attempts())?;
                    std::fs::write(output_dir.join("attempts.json"), json)?;
                }
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{AttemptRecord, SearchReport};
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample_outcome() -> PathOutcome {
        PathOutcome::Found(PathSolution::new(
            vec![0, 1, 2],
            0,
            2,
            vec![
                AttemptRecord {
                    length: 2,
                    variables: 8,
                    clauses: 30,
                    satisfiable: false,
                    solve_time_ms: 1,
                },
                AttemptRecord {
                    length: 3,
                    variables: 12,
                    clauses: 52,
                    satisfiable: true,
                    solve_time_ms: 2,
                },
            ],
            Duration::from_millis(4),
        ))
    }

    #[test]
    fn test_format_solution() {
        let outcome = sample_outcome();
        let text = ResultFormatter::format_outcome(&outcome, false);

        assert!(text.contains("0 -> 1 -> 2"));
        assert!(text.contains("3 nodes (2 edges)"));
    }

    #[test]
    fn test_format_attempts_table() {
        let outcome = sample_outcome();
        let text = ResultFormatter::format_attempts(&outcome);

        assert!(text.contains("UNSAT"));
        assert!(text.contains("SAT"));
        assert!(text.contains("Length"));
    }

    #[test]
    fn test_format_no_path() {
        let outcome = PathOutcome::NoPath(SearchReport {
            source: 0,
            target: 4,
            attempts: vec![],
            solve_time: Duration::ZERO,
        });
        let text = ResultFormatter::format_outcome(&outcome, false);
        assert!(text.contains("No path exists from 0 to 4"));
    }

    #[test]
    fn test_save_outcome_text_and_json() {
        let temp_dir = tempdir().unwrap();
        let outcome = sample_outcome();

        ResultFormatter::save_outcome(&outcome, temp_dir.path(), &OutputFormat::Text, false)
            .unwrap();
        assert!(temp_dir.path().join("result.txt").exists());

        ResultFormatter::save_outcome(&outcome, temp_dir.path(), &OutputFormat::Json, true)
            .unwrap();
        assert!(temp_dir.path().join("result.json").exists());
        assert!(temp_dir.path().join("attempts.json").exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
