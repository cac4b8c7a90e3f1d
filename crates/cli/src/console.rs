use std::io::{self, BufRead, Write};

use services::Transcript;

/// Paired input/output handle that records every line it prints or reads
/// into the session transcript.
///
/// Generic over the reader and writer so tests can drive a session from
/// in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Prints one line and records it.
    ///
    /// # Errors
    ///
    /// Propagates write failures on the underlying output.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        self.transcript.record(line);
        Ok(())
    }

    /// Reads one line, records it, and returns it with surrounding
    /// whitespace trimmed. Returns `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates read failures on the underlying input.
    pub fn ask(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.transcript.record(&line);
        Ok(Some(line.trim().to_owned()))
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }
}
