use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use reqwest::header::HeaderMap;

use super::Host;
use crate::errors::{Error, Result};
use crate::parser::{origin, regex};
use crate::transport::{Transport, referer};
use crate::video::Video;

static PASS_MD5: LazyLock<Regex> = LazyLock::new(|| regex(r#"/pass_md5/[^'"\s]+"#));

pub async fn videos_from_url<T: Transport>(transport: &T, url: &str) -> Result<Vec<Video>> {
    let embed = url.replace("/d/", "/e/");
    let host = origin(&embed)?;

    let page = transport.get(&embed, HeaderMap::new()).await?;
    let md5 = PASS_MD5
        .find(&page)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::StreamNotFound(embed.clone()))?;
    let token = md5.rsplit('/').next().unwrap_or_default();

    let prefix = transport
        .get(&format!("{host}{md5}"), referer(&embed)?)
        .await?;
    let prefix = prefix.trim();
    if !prefix.starts_with("http") {
        return Err(Error::StreamNotFound(embed));
    }

    let expiry = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let src = format!("{prefix}{}?token={token}&expiry={expiry}", random_string(10));

    let video = Video::new(&src, "Doodstream", Host::Dood).with_referer(&format!("{host}/"));

    Ok(vec![video])
}

fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    const EMBED: &str = r#"<html><script>
        $.get('/pass_md5/12345-67-890-1234567890-abcdef/tok3n', function(data) {
            dsplayer.src(data + makePlay());
        });
    </script></html>"#;

    #[tokio::test]
    async fn test_videos_from_url() {
        let transport = FakeTransport::new()
            .page("https://dood.to/e/abc", EMBED)
            .page(
                "https://dood.to/pass_md5/12345-67-890-1234567890-abcdef/tok3n",
                "https://cdn.dood.video/xyz/",
            );

        let videos = videos_from_url(&transport, "https://dood.to/d/abc")
            .await
            .unwrap();

        assert_eq!(videos.len(), 1);
        let video = &videos[0];
        assert!(video.url.starts_with("https://cdn.dood.video/xyz/"));
        assert!(video.url.contains("?token=tok3n&expiry="));
        assert_eq!(video.host, Host::Dood);
        assert_eq!(video.referer.as_deref(), Some("https://dood.to/"));

        let seen = transport.seen.borrow();
        assert_eq!(seen[1].headers["referer"], "https://dood.to/e/abc");
    }

    #[tokio::test]
    async fn test_missing_pass_md5() {
        let transport = FakeTransport::new().page("https://dood.to/e/abc", "<html></html>");

        let res = videos_from_url(&transport, "https://dood.to/e/abc").await;
        assert!(matches!(res, Err(Error::StreamNotFound(_))));
    }

    #[test]
    fn test_random_string() {
        let s = random_string(10);
        assert_eq!(s.len(), 10);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
