use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::AppError;

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Prints `label` without a newline and reads one line. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Re-prompts until a non-negative integer is entered.
    pub fn prompt_number(&mut self, label: &str) -> io::Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse_number(&line) {
                Ok(n) => return Ok(Some(n)),
                Err(e) => self.say(e)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn parse_number(raw: &str) -> Result<u64, AppError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("{:?} is not a number", trimmed)))
}
