use std::process::exit;

use crate::tui::Tui;

#[macro_use]
mod macros;

mod anime;
mod archive;
mod cli;
mod config;
mod errors;
mod extractor;
mod parser;
mod transport;
mod tui;
mod video;

#[tokio::main]
async fn main() {
    if let Err(err) = cli::run().await {
        eprintln!("{}", Tui::format_err(&err));
        exit(1)
    }
}
