use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{theme::ColorfulTheme, Password};

use crate::errors::CommandError;

/// Reads a password. On a terminal the input is hidden; otherwise a single line is
/// read from stdin so the command can be scripted. Empty input is accepted.
pub fn prompt_secret(prompt: &str) -> Result<String, CommandError> {
    if io::stdin().is_terminal() {
        return Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(CommandError::from);
    }

    let mut stdout = io::stdout();
    write!(stdout, "{}: ", prompt)?;
    stdout.flush()?;
    read_secret_line(io::stdin().lock())
}

fn read_secret_line(mut input: impl BufRead) -> Result<String, CommandError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
