use owo_colors::OwoColorize;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Modify, Style,
        object::{Columns, Rows},
        themes::Colorization,
    },
};

use super::style::*;

fn build(headers: Vec<&str>, rows: Vec<Vec<String>>) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }

    builder.build()
}

/// Builds a table of catalog entries
pub fn build_entries_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    let mut table = build(headers, rows);
    table
        .with(Style::rounded())
        .with(Colorization::columns(TABLE_COLORS_ENTRIES))
        .with(Modify::new(Rows::first()).with(TABLE_HEADER_COLOR))
        .with(Modify::new(Columns::first()).with(Alignment::center()));

    table.to_string()
}

/// Builds a table of episodes
pub fn build_episodes_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    let mut table = build(headers, rows);
    table
        .with(Style::rounded())
        .with(Colorization::columns(TABLE_COLORS_EPISODES))
        .with(Modify::new(Rows::first()).with(TABLE_HEADER_COLOR))
        .with(Modify::new(Columns::first()).with(Alignment::center()));

    table.to_string()
}

/// Builds a table of ranked streams, the first row highlighted
pub fn build_videos_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    let highlight = !rows.is_empty();

    let mut table = build(headers, rows);
    table
        .with(Style::rounded())
        .with(Colorization::columns(TABLE_COLORS_VIDEOS))
        .with(Modify::new(Rows::first()).with(TABLE_HEADER_COLOR))
        .with(Modify::new(Columns::first()).with(Alignment::center()));

    if highlight {
        table.with(Colorization::exact(
            [Color::FG_BLACK | Color::BG_WHITE],
            Rows::one(1),
        ));
    }

    table.to_string()
}

/// Builds a two-column `field | value` table
pub fn build_details_table(rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Colorization::columns(TABLE_COLORS_DETAILS));

    table.to_string()
}

/// Prints a selection prompt with consistent formatting
pub fn print_prompt(instructions: &str) {
    println!("\n{} {}", "::".red(), instructions.bold());
}

/// Prints a title header with consistent formatting
pub fn print_title(title: &str) {
    let formatted = title.cyan().bold().to_string();
    println!("{formatted}\n");
}
