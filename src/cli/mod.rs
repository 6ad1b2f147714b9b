use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::archive::{Site, Source};
use crate::config::{QUALITIES, Store};
use crate::transport::HttpClient;
use crate::tui::Tui;

mod catalog;
mod stream;

/// Browse EgyBest and resolve playable streams
#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Site to browse
    #[arg(long, short = 'S', value_enum, global = true, env = "EDL_SITE", default_value_t)]
    site: Site,

    /// Print debug logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Popular titles
    #[command(alias = "p")]
    Popular(catalog::PageArgs),
    /// Latest additions
    #[command(alias = "l")]
    Latest(catalog::PageArgs),
    /// Search titles
    #[command(alias = "s")]
    Search(catalog::SearchArgs),
    /// Details of a title
    #[command(alias = "i")]
    Details(catalog::UrlArgs),
    /// Episodes of a title
    #[command(alias = "e")]
    Episodes(catalog::UrlArgs),
    /// Ranked streams of an episode
    #[command(alias = "v")]
    Videos(stream::VideoArgs),
    /// Play the best stream of an episode
    Play(stream::VideoArgs),
    /// Search, pick an episode and play it
    #[command(alias = "w")]
    Watch(stream::WatchArgs),
    /// Show or set the preferred quality
    Quality {
        /// One of 1080, 720, 480, 360, 240, Dood, Uqload
        value: Option<String>,
    },
    /// Delete app configuration
    Clean,
}

/// What every command works with
pub struct Session {
    pub store: Store,
    pub source: Source<HttpClient>,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let store = Store::default();
    let client = HttpClient::new(store.timeout()).context("Unable to create client")?;
    let source = Source::new(args.site, client).with_origin(store.origin(args.site));
    debug!(site = source.name(), origin = source.origin(), "source ready");
    let ctx = Session { store, source };

    match args.command {
        Command::Popular(cmd) => catalog::popular(&ctx, cmd).await,
        Command::Latest(cmd) => catalog::latest(&ctx, cmd).await,
        Command::Search(cmd) => catalog::search(&ctx, cmd).await,
        Command::Details(cmd) => catalog::details(&ctx, cmd).await,
        Command::Episodes(cmd) => catalog::episodes(&ctx, cmd).await,
        Command::Videos(cmd) => stream::videos(&ctx, cmd).await,
        Command::Play(cmd) => stream::play(&ctx, cmd).await,
        Command::Watch(cmd) => stream::watch(&ctx, cmd).await,
        Command::Quality { value } => quality(&ctx.store, value),
        Command::Clean => clean(&ctx.store),
    }
}

fn init_tracing(verbose: bool) {
    let filter = match verbose {
        true => EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME"))),
        false => EnvFilter::try_from_env("EDL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn quality(store: &Store, value: Option<String>) -> Result<()> {
    match value {
        Some(v) => {
            store.set_quality(&v)?;
            Tui::notice(&format!("Preferred quality set to {v}"));
        }
        None => {
            let current = store.quality();
            Tui::notice(&format!(
                "Preferred quality: {current} (one of {})",
                QUALITIES.join(", ")
            ));
        }
    }

    Ok(())
}

fn clean(store: &Store) -> Result<()> {
    store
        .clean()
        .with_context(|| format!("Unable to delete {}", store.path().display()))?;
    Tui::notice("Configuration deleted");

    Ok(())
}
