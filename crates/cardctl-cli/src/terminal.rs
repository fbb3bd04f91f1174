//! [`PromptIo`] backed by the process's stdin/stdout.
//!
//! On a TTY, input goes through `console` so masked prompts don't echo. When
//! stdin is piped, lines are read directly and EOF is reported to the caller.

use cardctl_core::prompt::PromptIo;
use cardctl_core::Result;
use console::Term;
use std::io::{BufRead, IsTerminal};

pub struct TerminalIo {
    term: Term,
    interactive: bool,
}

impl TerminalIo {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    fn read_piped(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        // Piped input is not echoed; end the prompt line ourselves.
        self.term.write_line("")?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn show(&mut self, prompt: &str) -> Result<()> {
        self.term.write_str(prompt)?;
        self.term.flush()?;
        Ok(())
    }
}

impl Default for TerminalIo {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptIo for TerminalIo {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.show(prompt)?;
        if self.interactive {
            Ok(Some(self.term.read_line()?))
        } else {
            self.read_piped()
        }
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        self.show(prompt)?;
        if self.interactive {
            Ok(Some(self.term.read_secure_line()?))
        } else {
            self.read_piped()
        }
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        Ok(())
    }
}
