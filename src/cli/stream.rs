use std::process::Stdio;

use anyhow::{Context, Result, ensure};
use clap::Args;
use tokio::process::Command;
use tracing::info;
use which::which;

use super::Session;
use crate::anime::Episode;
use crate::extractor::Extractors;
use crate::tui::Tui;
use crate::video::Video;

#[derive(Args, Debug)]
pub struct VideoArgs {
    /// Episode url, absolute or relative to the site
    pub url: String,

    /// Override the preferred quality for this run
    #[arg(short, long)]
    pub quality: Option<String>,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help(true))]
pub struct WatchArgs {
    /// Search query
    pub query: Vec<String>,

    /// Override the preferred quality for this run
    #[arg(short, long)]
    pub quality: Option<String>,
}

pub async fn videos(ctx: &Session, cmd: VideoArgs) -> Result<()> {
    let preference = cmd.quality.unwrap_or_else(|| ctx.store.quality());
    let videos = resolve(ctx, &cmd.url, &preference).await?;
    Tui::show_videos(&videos);

    Ok(())
}

pub async fn play(ctx: &Session, cmd: VideoArgs) -> Result<()> {
    let preference = cmd.quality.unwrap_or_else(|| ctx.store.quality());
    let videos = resolve(ctx, &cmd.url, &preference).await?;
    let best = videos.first().context("No playable stream found")?;

    launch(best).await
}

pub async fn watch(ctx: &Session, cmd: WatchArgs) -> Result<()> {
    let preference = cmd.quality.unwrap_or_else(|| ctx.store.quality());
    let query = cmd.query.join(" ");

    let page = ctx
        .source
        .search(&query, 1)
        .await
        .with_context(|| format!("Unable to search `{query}`"))?;
    ensure!(!page.entries.is_empty(), "No title found for `{query}`");

    let entry = Tui::select_entry(&page.entries)?;
    let mut episodes = ctx
        .source
        .episodes(&entry.url)
        .await
        .with_context(|| format!("Unable to load episodes of {}", entry.title))?;

    // movies carry their servers on the title page itself
    if episodes.is_empty() {
        episodes.push(Episode {
            url: entry.url.clone(),
            name: entry.title.clone(),
        });
    }

    let episode = match episodes.as_slice() {
        [single] => single,
        _ => Tui::select_episode(&entry.title, &episodes)?,
    };

    let videos = resolve(ctx, &episode.url, &preference).await?;
    Tui::show_videos(&videos);
    let best = videos.first().context("No playable stream found")?;

    launch(best).await
}

async fn resolve(ctx: &Session, url: &str, preference: &str) -> Result<Vec<Video>> {
    let extractors = Extractors::new(ctx.source.transport());

    let pb = Tui::spinner("Resolving servers");
    let res = ctx.source.videos(url, &extractors, preference).await;
    pb.finish_and_clear();

    res.with_context(|| format!("Unable to unlock the server list of {url}"))
}

/// Hands a stream to `mpv`, or `vlc` when mpv is missing
async fn launch(video: &Video) -> Result<()> {
    let referer = video.referer.as_deref();

    let (cmd, args) = match which("mpv") {
        Ok(c) => (c, referer.map(|r| format!("--referrer={r}"))),
        _ => (
            which("vlc").context("`mpv` or `vlc` required for streaming")?,
            referer.map(|r| format!("--http-referrer={r}")),
        ),
    };
    info!(player = %cmd.display(), url = %video.url, "launching player");

    Command::new(cmd)
        .args(args)
        .arg(&video.url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Unable to launch the media player")?;

    Ok(())
}
