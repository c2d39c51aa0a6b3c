//! Interactive text menu
//!
//! `p` runs the exhaustive search, `s` runs the Monte Carlo estimator, `q`
//! quits. The menu works over any line-oriented reader and writer so it can be
//! driven from a terminal or from a test.

use crate::board::format_columns;
use crate::error::{QueensError, Result};
use crate::search::{Algorithm, EstimateConfig, n_queens, run_estimates};
use log::debug;
use std::io::{BufRead, Write};

/// Board sizes offered by the exhaustive search prompt
pub const DEFAULT_SIZES: [i64; 4] = [4, 8, 12, 14];

const GOODBYE: &str = "Thank you for trying the N-Queens problem simulator.\nSystem exiting...";

/// Outcome of one prompt: a parsed value, unparsable input to re-prompt, or
/// a request to quit (end of input counts as quitting)
enum Answer<T> {
    Value(T),
    Retry,
    Quit,
}

/// Console session over an input and an output stream
pub struct Menu<R, W> {
    input: R,
    output: W,
    sizes: Vec<i64>,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
        }
    }

    /// Restrict the exhaustive search prompt to these board sizes
    pub fn with_sizes(mut self, sizes: Vec<i64>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Seed the estimator for reproducible sessions
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or the input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the N-Queens problem simulator.")?;
        loop {
            writeln!(
                self.output,
                "To run the N-Queens problem, please type p.\n\
                 To run the Monte Carlo Simulated Estimation of N-Queens, please type s.\n\
                 Press q to quit."
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let keep_going = match line.parse::<Algorithm>() {
                _ if line == "q" => false,
                Ok(Algorithm::Exhaustive) => self.exhaustive_prompt()?,
                Ok(Algorithm::Estimate) => self.estimate_prompt()?,
                Err(_) => {
                    writeln!(self.output, "Incorrect value submitted. Please try again.")?;
                    true
                }
            };
            if !keep_going {
                writeln!(self.output, "{}", GOODBYE)?;
                return Ok(());
            }
        }
    }

    /// Returns false when the session should end
    fn exhaustive_prompt(&mut self) -> Result<bool> {
        let choices = self.choices();
        writeln!(
            self.output,
            "Please enter the amount of queens.\nPossible choices are {}.\nPress q to quit.",
            choices
        )?;
        loop {
            let n = match self.ask_number()? {
                Answer::Value(n) => n,
                Answer::Retry => continue,
                Answer::Quit => return Ok(false),
            };
            if !self.sizes.contains(&n) {
                writeln!(
                    self.output,
                    "Must be {}. Please try again.\nPress q to quit.",
                    choices
                )?;
                continue;
            }

            self.print_solutions(n)?;
            writeln!(
                self.output,
                "Thank you for trying the N-Queens problem simulator.\nSystem restarting..."
            )?;
            return Ok(true);
        }
    }

    fn print_solutions(&mut self, n: i64) -> Result<()> {
        writeln!(self.output, "Trying {}-Queens.\nSolutions were:", n)?;
        let out = &mut self.output;
        let mut write_error = None;
        let stats = n_queens(n, |cols| {
            if write_error.is_none() {
                if let Err(e) = writeln!(out, "{}.", format_columns(cols)) {
                    write_error = Some(e);
                }
            }
        })?;
        if let Some(e) = write_error {
            return Err(e.into());
        }
        debug!("menu search finished: {} solutions", stats.solutions_found);
        Ok(())
    }

    /// Returns false when the session should end
    fn estimate_prompt(&mut self) -> Result<bool> {
        loop {
            writeln!(
                self.output,
                "Please enter the amount of queens you would like.\n\
                 Possible choices are {}.\nPress q to quit.",
                self.choices()
            )?;
            let n = match self.ask_number()? {
                Answer::Value(n) => n,
                Answer::Retry => continue,
                Answer::Quit => return Ok(false),
            };

            writeln!(
                self.output,
                "Please enter the amount of simulations you would like."
            )?;
            let trials = match self.ask_number()? {
                Answer::Value(t) => t,
                Answer::Retry => continue,
                Answer::Quit => return Ok(false),
            };

            let config = EstimateConfig::default()
                .with_trials(trials)
                .with_seed_option(self.seed);
            let report = match run_estimates(n, &config) {
                Ok(report) => report,
                Err(e @ (QueensError::InvalidSize(_) | QueensError::InvalidTrialCount(_))) => {
                    writeln!(self.output, "Error: {}. Please try again.", e)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            for (i, estimate) in report.estimates.iter().enumerate() {
                writeln!(self.output, "{}. Estimate was: {}.", i, estimate)?;
            }
            writeln!(self.output, "Average was: {}.", report.mean())?;
            writeln!(
                self.output,
                "Thank you for trying the Monte Carlo Simulated Estimation of N-Queens.\n\
                 System restarting..."
            )?;
            return Ok(true);
        }
    }

    fn ask_number(&mut self) -> Result<Answer<i64>> {
        let Some(line) = self.read_line()? else {
            return Ok(Answer::Quit);
        };
        if line == "q" {
            return Ok(Answer::Quit);
        }
        match line.parse::<i64>() {
            Ok(n) => Ok(Answer::Value(n)),
            Err(_) => {
                writeln!(self.output, "Must enter a number. Please try again.")?;
                Ok(Answer::Retry)
            }
        }
    }

    /// Next trimmed input line, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choices(&self) -> String {
        match self.sizes.split_last() {
            None => String::new(),
            Some((last, [])) => last.to_string(),
            Some((last, rest)) => {
                let rest: Vec<String> = rest.iter().map(|s| s.to_string()).collect();
                format!("{}, or {}", rest.join(", "), last)
            }
        }
    }
}
