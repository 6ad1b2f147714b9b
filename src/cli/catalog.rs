use anyhow::{Context, Result};
use clap::Args;

use super::Session;
use crate::tui::Tui;

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query, empty for the unfiltered listing
    pub query: Vec<String>,

    /// Page number
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Title url, absolute or relative to the site
    pub url: String,
}

pub async fn popular(ctx: &Session, cmd: PageArgs) -> Result<()> {
    let page = ctx
        .source
        .popular(cmd.page)
        .await
        .context("Unable to load popular titles")?;
    Tui::show_page(&format!("{} popular", ctx.source.name()), &page, cmd.page);

    Ok(())
}

pub async fn latest(ctx: &Session, cmd: PageArgs) -> Result<()> {
    let page = ctx
        .source
        .latest(cmd.page)
        .await
        .context("Unable to load latest titles")?;
    Tui::show_page(&format!("{} latest", ctx.source.name()), &page, cmd.page);

    Ok(())
}

pub async fn search(ctx: &Session, cmd: SearchArgs) -> Result<()> {
    let query = cmd.query.join(" ");
    let page = ctx
        .source
        .search(&query, cmd.page)
        .await
        .with_context(|| format!("Unable to search `{query}`"))?;
    Tui::show_page(&format!("Results for `{query}`"), &page, cmd.page);

    Ok(())
}

pub async fn details(ctx: &Session, cmd: UrlArgs) -> Result<()> {
    let details = ctx
        .source
        .details(&cmd.url)
        .await
        .with_context(|| format!("Unable to load {}", cmd.url))?;
    Tui::show_details(&details);

    Ok(())
}

pub async fn episodes(ctx: &Session, cmd: UrlArgs) -> Result<()> {
    let episodes = ctx
        .source
        .episodes(&cmd.url)
        .await
        .with_context(|| format!("Unable to load episodes of {}", cmd.url))?;
    Tui::show_episodes(&episodes);

    Ok(())
}
