use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rustyline::{ColorMode, DefaultEditor, config::Configurer};

/// Commands that can be parsed from user input
pub enum Command {
    Quit,
    Default(String),
}

/// Parses user input commands from the terminal
pub fn parse_commands() -> Result<Command> {
    let mut rl = DefaultEditor::new()?;
    rl.set_color_mode(ColorMode::Enabled);
    let prompt = "~❯ ".red().to_string();
    let cmd = match rl.readline(&prompt).map(|line| line.trim().to_owned()) {
        Ok(line) if line.len() == 1 && line.contains(['q', 'Q']) => Command::Quit,
        Ok(line) => Command::Default(line),
        Err(err) => bail!(err),
    };

    Ok(cmd)
}

/// Parses a 1-based selection into an index of a list of `len` items
///
/// An empty line picks the first item.
pub fn parse_index(line: &str, len: usize) -> Result<usize> {
    let line = line.trim();
    if line.is_empty() && len > 0 {
        return Ok(0);
    }

    match line.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => bail!("Invalid input"),
    }
}
