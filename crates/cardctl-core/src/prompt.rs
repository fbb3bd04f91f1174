//! Interactive prompt semantics, independent of any terminal.
//!
//! [`PromptIo`] is the raw line source; the free functions layer defaults,
//! masking, confirmation and re-asking on top of it.

use crate::error::{CardError, Result};

pub const CONFIRMATION_PROMPT: &str = "Repeat for confirmation: ";
pub const MISMATCH_ERROR: &str = "Error: The two entered values do not match.";
pub const INVALID_INPUT_ERROR: &str = "Error: invalid input";

pub trait PromptIo {
    /// Show `prompt` and read one echoed line without its terminator.
    /// Returns `Ok(None)` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Like [`PromptIo::read_line`], but the typed characters are not echoed.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Report a recoverable input error before the prompt is shown again.
    fn error(&mut self, message: &str) -> Result<()>;
}

fn require(line: Option<String>) -> Result<String> {
    line.ok_or(CardError::InputClosed)
}

/// Yes/no question defaulting to no.
pub fn confirm(io: &mut dyn PromptIo, message: &str) -> Result<bool> {
    let prompt = format!("{message} [y/N]: ");
    loop {
        let answer = require(io.read_line(&prompt)?)?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => io.error(INVALID_INPUT_ERROR)?,
        }
    }
}

/// Echoed prompt. Empty input takes `default`; with no default it asks again.
pub fn text(io: &mut dyn PromptIo, label: &str, default: Option<&str>) -> Result<String> {
    let prompt = match default {
        Some(d) => format!("{label} [{d}]: "),
        None => format!("{label}: "),
    };
    loop {
        let value = require(io.read_line(&prompt)?)?;
        if !value.is_empty() {
            return Ok(value);
        }
        if let Some(d) = default {
            return Ok(d.to_string());
        }
    }
}

/// Masked prompt that must be typed twice. The default is never displayed.
pub fn secret(io: &mut dyn PromptIo, label: &str, default: Option<&str>) -> Result<String> {
    let prompt = format!("{label}: ");
    loop {
        let (first, accepted) = loop {
            let value = require(io.read_secret(&prompt)?)?;
            if !value.is_empty() {
                break (value.clone(), value);
            }
            if let Some(d) = default {
                break (value, d.to_string());
            }
        };

        // An empty confirmation only counts when the first entry was empty too.
        let second = loop {
            let value = require(io.read_secret(CONFIRMATION_PROMPT)?)?;
            if !value.is_empty() || first.is_empty() {
                break value;
            }
        };

        if first == second {
            return Ok(accepted);
        }
        io.error(MISMATCH_ERROR)?;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedIo;
    use super::*;

    #[test]
    fn confirm_accepts_yes_variants() {
        for answer in ["y", "Y", "yes", "YES", " y "] {
            let mut io = ScriptedIo::new(&[answer]);
            assert!(confirm(&mut io, "Overwrite?").unwrap(), "answer {answer:?}");
        }
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut io = ScriptedIo::new(&[""]);
        assert!(!confirm(&mut io, "Overwrite?").unwrap());
        assert_eq!(io.prompts, ["Overwrite? [y/N]: "]);
    }

    #[test]
    fn confirm_reasks_on_garbage() {
        let mut io = ScriptedIo::new(&["maybe", "n"]);
        assert!(!confirm(&mut io, "Overwrite?").unwrap());
        assert_eq!(io.errors, [INVALID_INPUT_ERROR]);
        assert_eq!(io.prompts.len(), 2);
    }

    #[test]
    fn text_uses_default_on_empty() {
        let mut io = ScriptedIo::new(&[""]);
        let v = text(&mut io, "Enter the DATABASE_USER", Some("carduser")).unwrap();
        assert_eq!(v, "carduser");
        assert_eq!(io.prompts, ["Enter the DATABASE_USER [carduser]: "]);
    }

    #[test]
    fn text_without_default_reasks() {
        let mut io = ScriptedIo::new(&["", "", "value"]);
        assert_eq!(text(&mut io, "Name", None).unwrap(), "value");
        assert_eq!(io.prompts, ["Name: ", "Name: ", "Name: "]);
    }

    #[test]
    fn text_fails_when_input_closes() {
        let mut io = ScriptedIo::new(&[]);
        let err = text(&mut io, "Name", None).unwrap_err();
        assert!(matches!(err, CardError::InputClosed));
    }

    #[test]
    fn secret_requires_matching_confirmation() {
        let mut io = ScriptedIo::new(&["abc", "abd", "abc", "abc"]);
        assert_eq!(secret(&mut io, "Key", None).unwrap(), "abc");
        assert_eq!(io.errors, [MISMATCH_ERROR]);
        assert_eq!(io.remaining(), 0);
    }

    #[test]
    fn secret_hides_default_in_prompt() {
        let mut io = ScriptedIo::new(&["", ""]);
        assert_eq!(secret(&mut io, "Password", Some("cardpass")).unwrap(), "cardpass");
        assert_eq!(
            io.prompts,
            ["(masked) Password: ", "(masked) Repeat for confirmation: "]
        );
    }

    #[test]
    fn secret_without_default_reasks_on_empty() {
        let mut io = ScriptedIo::new(&["", "k", "k"]);
        assert_eq!(secret(&mut io, "Key", None).unwrap(), "k");
        assert_eq!(io.prompts.len(), 3);
    }

    #[test]
    fn secret_reasks_empty_confirmation_for_typed_value() {
        let mut io = ScriptedIo::new(&["k", "", "k"]);
        assert_eq!(secret(&mut io, "Key", None).unwrap(), "k");
        assert!(io.errors.is_empty());
    }

    #[test]
    fn secret_typed_value_against_defaulted_first_entry_mismatches() {
        // Empty first entry takes the default, but the confirmation must then be empty too.
        let mut io = ScriptedIo::new(&["", "cardpass", "pw", "pw"]);
        assert_eq!(secret(&mut io, "Password", Some("cardpass")).unwrap(), "pw");
        assert_eq!(io.errors, [MISMATCH_ERROR]);
    }
}
