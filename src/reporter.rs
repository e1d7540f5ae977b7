use std::io::Write;

use tracing::warn;

use crate::scanner::ScanningError;

/// Prints lexical errors for the user and remembers whether any were seen.
///
/// Generic over the writer so the output can be captured, the binary hands it stderr.
pub struct ConsoleReporter<W: Write> {
    writer: W,
    had_error: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> ConsoleReporter<W> {
        ConsoleReporter {
            writer,
            had_error: false,
        }
    }

    pub fn report(&mut self, error: &ScanningError) {
        if let Err(io_error) = writeln!(self.writer, "[line {}] Error: {error}", error.line()) {
            warn!(%io_error, "unable to write error report");
        }
        self.had_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// The prompt calls this after every line so one typo does not stick to the whole session.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}
