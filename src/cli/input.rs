//! Input sources for the menu loop: the interactive terminal widget and a
//! line-oriented reader used for scripted sessions and tests.

use std::io::{self, BufRead, Cursor};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::CliError;

/// Outcome of offering a fixed list of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(usize),
    /// Nothing was picked (escape, interrupt, or an unrecognised answer).
    Cancelled,
    /// The input stream ended.
    Closed,
}

/// Injected source of user answers.
pub trait InputSource {
    /// Reads one line of text. `None` means the user backed out or input ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Offers `options` under `label` and reports which one was picked.
    fn select(&mut self, label: &str, options: &[String]) -> Result<Selection, CliError>;

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let answer = self.read_line(&format!("{prompt} [y/N]"))?;
        Ok(answer.map(|value| is_affirmative(&value)).unwrap_or(false))
    }

    /// Whether screen clearing and "press enter" pauses make sense.
    fn is_interactive(&self) -> bool {
        false
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn interrupted(err: &dialoguer::Error) -> bool {
    #[allow(unreachable_patterns)]
    match err {
        dialoguer::Error::IO(io_err) => io_err.kind() == io::ErrorKind::Interrupted,
        _ => false,
    }
}

/// Terminal prompts rendered with dialoguer.
pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(Some(value)),
            Err(err) if interrupted(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn select(&mut self, label: &str, options: &[String]) -> Result<Selection, CliError> {
        if options.is_empty() {
            return Ok(Selection::Cancelled);
        }
        match Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => Ok(Selection::Chosen(index)),
            Ok(None) => Ok(Selection::Cancelled),
            Err(err) if interrupted(&err) => Ok(Selection::Cancelled),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        match Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
        {
            Ok(answer) => Ok(answer.unwrap_or(false)),
            Err(err) if interrupted(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Reads answers line by line. Selections accept a 1-based number or an
/// option label (case-insensitive).
pub struct ScriptInput<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, echo: true }
    }

    /// Suppresses prompt echoing.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    fn next_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

impl ScriptInput<Cursor<Vec<u8>>> {
    pub fn from_text(text: &str) -> Self {
        Self::new(Cursor::new(text.as_bytes().to_vec())).quiet()
    }
}

impl<R: BufRead> InputSource for ScriptInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        if self.echo {
            println!("{prompt}:");
        }
        self.next_line()
    }

    fn select(&mut self, label: &str, options: &[String]) -> Result<Selection, CliError> {
        if self.echo {
            println!("{label}:");
        }
        let Some(answer) = self.next_line()? else {
            return Ok(Selection::Closed);
        };
        Ok(match_option(answer.trim(), options))
    }
}

fn match_option(answer: &str, options: &[String]) -> Selection {
    if answer.is_empty() {
        return Selection::Cancelled;
    }
    if let Ok(number) = answer.parse::<usize>() {
        return if (1..=options.len()).contains(&number) {
            Selection::Chosen(number - 1)
        } else {
            Selection::Cancelled
        };
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(answer))
        .map(Selection::Chosen)
        .unwrap_or(Selection::Cancelled)
}
