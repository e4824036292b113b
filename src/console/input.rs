//! Reading numbered choices from the console.

use std::io::{self, BufRead};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Result of reading one line for a numbered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The whole line was a number inside the prompt's range.
    Choice(u32),
    /// The line was not a number, had trailing text, or was out of range.
    Invalid,
    /// The input stream is exhausted.
    EndOfInput,
}

/// Source of player answers.
pub trait InputReader {
    /// Reads one answer and checks it against `range`.
    ///
    /// # Errors
    ///
    /// Only genuine I/O failures are errors. End of input is
    /// [`Reply::EndOfInput`].
    fn read_choice(&mut self, range: RangeInclusive<u32>) -> io::Result<Reply>;
}

/// Reads one line per answer from any buffered reader.
///
/// Each read consumes a full line, so leftovers from a rejected answer
/// never leak into the next prompt.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }
}

impl LineInput<io::StdinLock<'static>> {
    /// Reads from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputReader for LineInput<R> {
    #[instrument(skip(self))]
    fn read_choice(&mut self, range: RangeInclusive<u32>) -> io::Result<Reply> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            debug!("End of input");
            return Ok(Reply::EndOfInput);
        }

        let text = String::from_utf8_lossy(&self.line);
        let reply = parse_choice(&text, &range);
        debug!(input = %text.trim_end(), ?reply, "Read answer");
        Ok(reply)
    }
}

/// Parses a complete line as a single number within `range`.
///
/// Surrounding whitespace (including the newline) is ignored; anything
/// else besides the number makes the line invalid.
pub fn parse_choice(text: &str, range: &RangeInclusive<u32>) -> Reply {
    match text.trim().parse::<u32>() {
        Ok(value) if range.contains(&value) => Reply::Choice(value),
        _ => Reply::Invalid,
    }
}
