use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};
use witchterm::terminal::Terminal;

/// The real screen. In raw mode the cursor does not return on `\n`, so line
/// ends are rewritten to `\r\n`.
pub struct StdoutTerminal {
    out: Stdout,
    raw: bool,
}

impl StdoutTerminal {
    pub fn new(raw: bool) -> Self {
        Self {
            out: io::stdout(),
            raw,
        }
    }

    fn try_write(&mut self, text: &str) -> io::Result<()> {
        if self.raw {
            self.out.write_all(text.replace('\n', "\r\n").as_bytes())?;
        } else {
            self.out.write_all(text.as_bytes())?;
        }
        self.out.flush()
    }

    fn try_clear(&mut self) -> io::Result<()> {
        self.out
            .queue(Clear(ClearType::All))?
            .queue(Clear(ClearType::Purge))?
            .queue(MoveTo(0, 0))?;
        self.out.flush()
    }
}

impl Terminal for StdoutTerminal {
    fn write(&mut self, text: &str) {
        if let Err(e) = self.try_write(text) {
            tracing::warn!(error = %e, "stdout write failed");
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            tracing::warn!(error = %e, "screen clear failed");
        }
    }
}
