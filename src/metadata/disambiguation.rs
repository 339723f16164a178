//! Choosing between search candidates the selector cannot tell apart.
//!
//! [`TerminalDisambiguator`] asks the user on a terminal (or any reader and
//! writer pair). [`HeadlessDisambiguator`] never picks, so ambiguous results
//! surface as "not found".

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use tracing::warn;

use crate::metadata::provider::SearchCandidate;

/// Outcome of a disambiguation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the candidate list.
    Index(usize),
    /// No choice could be made.
    Ambiguous,
}

/// Pluggable policy for picking one of several candidates.
pub trait Disambiguator: Send {
    fn resolve(&mut self, candidates: &[SearchCandidate]) -> Selection;
}

/// Prompts for a 1-based choice until a valid one is entered.
///
/// Non-numeric and out-of-range answers are rejected with a corrective
/// message. End of input yields [`Selection::Ambiguous`].
pub struct TerminalDisambiguator<R, W> {
    input: R,
    output: W,
}

impl TerminalDisambiguator<BufReader<Stdin>, Stdout> {
    /// Prompt on stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalDisambiguator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the disambiguator and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, candidates: &[SearchCandidate]) -> io::Result<Selection> {
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(
                self.output,
                "{}: {}, {}",
                i + 1,
                candidate.title,
                candidate.description
            )?;
        }

        loop {
            writeln!(self.output, "enter your choice:")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Selection::Ambiguous);
            }
            let answer = line.trim();

            if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
                writeln!(self.output, "only numbers are allowed as input")?;
                continue;
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=candidates.len()).contains(&n) => {
                    return Ok(Selection::Index(n - 1));
                }
                _ => {
                    writeln!(
                        self.output,
                        "choose a number between 1 and {}",
                        candidates.len()
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> Disambiguator for TerminalDisambiguator<R, W> {
    fn resolve(&mut self, candidates: &[SearchCandidate]) -> Selection {
        if candidates.is_empty() {
            return Selection::Ambiguous;
        }
        match self.prompt(candidates) {
            Ok(selection) => selection,
            Err(e) => {
                warn!("Failed to prompt for a choice: {}", e);
                Selection::Ambiguous
            }
        }
    }
}

/// Never chooses; used when no terminal interaction is allowed.
#[derive(Debug, Default)]
pub struct HeadlessDisambiguator;

impl Disambiguator for HeadlessDisambiguator {
    fn resolve(&mut self, _candidates: &[SearchCandidate]) -> Selection {
        Selection::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn candidates() -> Vec<SearchCandidate> {
        vec![
            SearchCandidate::new("tt0078748", "Alien", "1979"),
            SearchCandidate::new("tt0090605", "Aliens", "1986"),
            SearchCandidate::new("tt0103644", "Alien 3", "1992"),
        ]
    }

    fn run(input: &str) -> (Selection, String) {
        let reader = Cursor::new(input.as_bytes().to_vec());
        let mut d = TerminalDisambiguator::new(reader, Vec::new());
        let selection = d.resolve(&candidates());
        let output = String::from_utf8(d.into_output()).unwrap();
        (selection, output)
    }

    #[test]
    fn test_lists_candidates_one_based() {
        let (selection, output) = run("2\n");
        assert_eq!(selection, Selection::Index(1));
        assert!(output.contains("1: Alien, 1979"));
        assert!(output.contains("3: Alien 3, 1992"));
        assert!(output.contains("enter your choice:"));
    }

    #[test]
    fn test_rejects_non_numeric_then_accepts() {
        let (selection, output) = run("abc\n-1\n3\n");
        assert_eq!(selection, Selection::Index(2));
        assert_eq!(output.matches("only numbers are allowed as input").count(), 2);
    }

    #[test]
    fn test_rejects_out_of_range_then_accepts() {
        let (selection, output) = run("0\n4\n1\n");
        assert_eq!(selection, Selection::Index(0));
        assert_eq!(output.matches("choose a number between 1 and 3").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_ambiguous() {
        let (selection, _) = run("9\n");
        assert_eq!(selection, Selection::Ambiguous);
    }

    #[test]
    fn test_headless_is_ambiguous() {
        let mut d = HeadlessDisambiguator;
        assert_eq!(d.resolve(&candidates()), Selection::Ambiguous);
    }
}
