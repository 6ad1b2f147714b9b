use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::HeaderMap;

use super::Host;
use crate::errors::{Error, Result};
use crate::parser::{origin, regex};
use crate::transport::Transport;
use crate::video::Video;

static SOURCES: LazyLock<Regex> = LazyLock::new(|| regex(r#"sources:\s*\[\s*"([^"]+)""#));

pub async fn videos_from_url<T: Transport>(transport: &T, url: &str) -> Result<Vec<Video>> {
    let page = transport.get(url, HeaderMap::new()).await?;

    let src = SOURCES
        .captures(&page)
        .map(|c| c[1].to_string())
        .filter(|s| s.starts_with("http"))
        .ok_or_else(|| Error::StreamNotFound(url.to_string()))?;

    let referer = origin(url)? + "/";

    Ok(vec![
        Video::new(&src, "Uqload", Host::Uqload).with_referer(&referer),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    #[tokio::test]
    async fn test_videos_from_url() {
        let page = r#"<script>
            var player = new Clappr.Player({
                sources: ["https://m180.uqload.com/3rfkcvwj4cs/v.mp4"],
                poster: "https://m180.uqload.com/i/01/poster.jpg",
            });
        </script>"#;
        let transport = FakeTransport::new().page("https://uqload.com/embed-1.html", page);

        let videos = videos_from_url(&transport, "https://uqload.com/embed-1.html")
            .await
            .unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].url, "https://m180.uqload.com/3rfkcvwj4cs/v.mp4");
        assert_eq!(videos[0].referer.as_deref(), Some("https://uqload.com/"));
    }

    #[tokio::test]
    async fn test_no_sources() {
        let transport = FakeTransport::new().page("https://uqload.com/embed-1.html", "File was deleted");

        let res = videos_from_url(&transport, "https://uqload.com/embed-1.html").await;
        assert!(matches!(res, Err(Error::StreamNotFound(_))));
    }

    #[tokio::test]
    async fn test_unreachable() {
        let transport = FakeTransport::new();

        let res = videos_from_url(&transport, "https://uqload.com/embed-1.html").await;
        assert!(res.is_err());
    }
}
