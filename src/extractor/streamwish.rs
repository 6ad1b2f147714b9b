use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use reqwest::header::HeaderMap;

use super::{Host, unpacker};
use crate::errors::{Error, Result};
use crate::parser::{origin, regex};
use crate::transport::{Transport, referer};
use crate::video::Video;

static FILE: LazyLock<Regex> = LazyLock::new(|| regex(r#"file\s*:\s*"([^"]+\.m3u8[^"]*)""#));

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| regex(r"RESOLUTION=\d+x(\d+)"));

pub async fn videos_from_url<T: Transport>(transport: &T, url: &str) -> Result<Vec<Video>> {
    let page = transport.get(url, HeaderMap::new()).await?;
    let script = unpacker::unpack_html(&page);

    // the player setup is not always inside the packed block
    let master = script
        .iter()
        .map(String::as_str)
        .chain([page.as_str()])
        .find_map(|s| FILE.captures(s).map(|c| c[1].to_string()))
        .ok_or_else(|| Error::StreamNotFound(url.to_string()))?;

    let referer_url = origin(url)? + "/";
    let playlist = transport.get(&master, referer(&referer_url)?).await?;

    let variants = parse_playlist(&master, &playlist);
    let videos = match variants.is_empty() {
        true => vec![Video::new(&master, "StreamWish", Host::StreamWish)],
        false => variants
            .into_iter()
            .map(|(quality, src)| Video::new(&src, &quality, Host::StreamWish))
            .collect(),
    };

    Ok(videos
        .into_iter()
        .map(|v| v.with_referer(&referer_url))
        .collect())
}

/// Variant streams of an HLS master playlist as `(label, url)`
fn parse_playlist(master: &str, playlist: &str) -> Vec<(String, String)> {
    let base = Url::parse(master).ok();
    let mut variants = vec![];
    let mut lines = playlist.lines().map(str::trim);

    while let Some(line) = lines.next() {
        let Some(attrs) = line.strip_prefix("#EXT-X-STREAM-INF:") else {
            continue;
        };

        let Some(uri) = lines.find(|l| !l.is_empty() && !l.starts_with('#')) else {
            break;
        };

        let src = match &base {
            Some(base) => base.join(uri).map(|u| u.to_string()).unwrap_or(uri.into()),
            None => uri.to_string(),
        };
        let label = match RESOLUTION.captures(attrs) {
            Some(c) => format!("StreamWish - {}p", &c[1]),
            None => "StreamWish".to_string(),
        };

        variants.push((label, src));
    }

    variants
}
