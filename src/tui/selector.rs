use std::process::exit;

use anyhow::{Result, ensure};

use crate::anime::{Entry, Episode};

use super::input::{Command, parse_commands, parse_index};
use super::table::{build_entries_table, build_episodes_table, print_prompt, print_title};

fn select(len: usize) -> Result<usize> {
    ensure!(len > 0, "Nothing to select");
    print_prompt("Make your selection (eg: 3) [<enter> for the first, <q> for exit]");

    let index = match parse_commands()? {
        Command::Default(input) => parse_index(&input, len)?,
        Command::Quit => exit(0),
    };
    println!();

    Ok(index)
}

/// Selects one title from a listing
pub fn select_entry(entries: &[Entry]) -> Result<&Entry> {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, e)| vec![(i + 1).to_string(), e.title.clone()])
        .collect();

    println!("{}", build_entries_table(vec!["Index", "Title"], rows));
    let index = select(entries.len())?;

    Ok(&entries[index])
}

/// Selects one episode of a title
pub fn select_episode<'a>(title: &str, episodes: &'a [Episode]) -> Result<&'a Episode> {
    let rows = episodes
        .iter()
        .enumerate()
        .map(|(i, e)| vec![(i + 1).to_string(), e.name.clone()])
        .collect();

    print_title(title);
    println!("{}", build_episodes_table(vec!["Index", "Episode"], rows));
    let index = select(episodes.len())?;

    Ok(&episodes[index])
}
