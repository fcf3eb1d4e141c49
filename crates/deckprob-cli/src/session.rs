use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use deckprob_core::Evaluator;

use crate::config::OutputConfig;
use crate::render::render;

const HINT: &str = "commands: given <RBX>, observed <RBX>, show, quit";

/// A line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Given(String),
    Observed(String),
    Show,
    Quit,
    Blank,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Blank;
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head.to_ascii_lowercase().as_str() {
            "given" | "g" => Command::Given(rest.to_string()),
            "observed" | "o" => Command::Observed(rest.to_string()),
            "show" => Command::Show,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Interactive loop over two input fields. Each edit re-evaluates the pair
/// and prints the new state; `show` prints the current one again.
pub struct Session {
    evaluator: Evaluator,
    output: OutputConfig,
}

impl Session {
    pub fn new(output: OutputConfig) -> Self {
        Self {
            evaluator: Evaluator::new(),
            output,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Runs until `quit` or end of input. Returns the number of edits applied.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<usize> {
        let mut edits = 0;
        writeln!(out, "{HINT}").context("writing session prompt")?;
        self.print_state(&mut out)?;

        for line in input.lines() {
            let line = line.context("reading session input")?;
            match Command::parse(&line) {
                Command::Given(raw) => {
                    self.evaluator.set_given(&raw);
                    edits += 1;
                }
                Command::Observed(raw) => {
                    self.evaluator.set_observed(&raw);
                    edits += 1;
                }
                Command::Show => {}
                Command::Blank => continue,
                Command::Quit => break,
                Command::Unknown(text) => {
                    tracing::debug!(input = %text, "unrecognized session command");
                    writeln!(out, "{HINT}").context("writing session hint")?;
                    continue;
                }
            }
            self.print_state(&mut out)?;
        }

        Ok(edits)
    }

    fn print_state<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "given={} observed={}",
            self.evaluator.given(),
            self.evaluator.observed()
        )
        .context("writing session state")?;
        let rendered = render(&self.evaluator, &self.output, true)?;
        writeln!(out, "{rendered}").context("writing session state")?;
        out.flush().context("flushing session output")?;
        Ok(())
    }
}
