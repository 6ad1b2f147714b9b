pub mod dood;
pub mod mixdrop;
pub mod streamwish;
pub mod unpacker;
pub mod uqload;

use std::fmt;

use futures::future::join_all;
use tracing::debug;

use crate::errors::Result;
use crate::transport::Transport;
use crate::video::{ServerLink, Video};

/// Embed hosts a server link can point to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host {
    Dood,
    MixDrop,
    Uqload,
    StreamWish,
}

impl Host {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dood => "Dood",
            Self::MixDrop => "MixDrop",
            Self::Uqload => "Uqload",
            Self::StreamWish => "StreamWish",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered url patterns, first match wins
#[derive(Clone, Copy, Debug)]
pub struct DispatchTable {
    patterns: &'static [(&'static str, Host)],
    fallback: Host,
}

impl DispatchTable {
    pub const fn new(patterns: &'static [(&'static str, Host)], fallback: Host) -> Self {
        Self { patterns, fallback }
    }

    pub fn classify(&self, url: &str) -> Host {
        self.patterns
            .iter()
            .find(|(pattern, _)| url.contains(pattern))
            .map_or(self.fallback, |(_, host)| *host)
    }
}

/// Turns an embed url into playable streams
pub trait Resolver {
    async fn resolve(&self, host: Host, url: &str) -> Result<Vec<Video>>;
}

/// The bundled extractors, sharing one transport
pub struct Extractors<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> Extractors<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> Resolver for Extractors<'_, T> {
    async fn resolve(&self, host: Host, url: &str) -> Result<Vec<Video>> {
        match host {
            Host::Dood => dood::videos_from_url(self.transport, url).await,
            Host::MixDrop => mixdrop::videos_from_url(self.transport, url).await,
            Host::Uqload => uqload::videos_from_url(self.transport, url).await,
            Host::StreamWish => streamwish::videos_from_url(self.transport, url).await,
        }
    }
}

/// Resolves every link concurrently
///
/// A failing link only drops its own streams, siblings keep running.
pub async fn extract_all<R: Resolver>(
    links: &[ServerLink],
    table: &DispatchTable,
    resolver: &R,
) -> Vec<Video> {
    let pool = links.iter().map(|link| async move {
        let host = table.classify(&link.url);

        match resolver.resolve(host, &link.url).await {
            Ok(videos) => {
                debug!(url = %link.url, %host, count = videos.len(), "extracted");
                videos
            }
            Err(err) => {
                debug!(url = %link.url, %host, "extractor failed: {err}");
                vec![]
            }
        }
    });

    join_all(pool).await.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    const TABLE: DispatchTable = DispatchTable::new(
        &[
            ("dood", Host::Dood),
            ("mixdrop", Host::MixDrop),
            ("uqload", Host::Uqload),
        ],
        Host::StreamWish,
    );

    #[test]
    fn test_classify() {
        assert_eq!(TABLE.classify("https://dood.to/e/abc"), Host::Dood);
        assert_eq!(TABLE.classify("https://mixdrop.co/e/xyz"), Host::MixDrop);
        assert_eq!(TABLE.classify("https://uqload.com/embed/1"), Host::Uqload);
        assert_eq!(TABLE.classify("https://unknownhost.com/x"), Host::StreamWish);
        assert_eq!(TABLE.classify(""), Host::StreamWish);
    }

    #[test]
    fn test_classify_first_match_wins() {
        let url = "https://dood.to/e/mixdrop-mirror";
        assert_eq!(TABLE.classify(url), Host::Dood);
        assert_eq!(TABLE.classify(url), TABLE.classify(url));
    }

    /// Answers with `n` streams per url, where `n` is the last path segment
    struct Counting;

    impl Resolver for Counting {
        async fn resolve(&self, host: Host, url: &str) -> Result<Vec<Video>> {
            let n = url
                .rsplit('/')
                .next()
                .and_then(|s| s.parse::<usize>().ok())
                .ok_or_else(|| Error::StreamNotFound(url.to_string()))?;

            Ok((0..n)
                .map(|i| Video::new(&format!("{url}#{i}"), "720", host))
                .collect())
        }
    }

    #[tokio::test]
    async fn test_extract_all_tolerates_failures() {
        let links = vec![
            ServerLink::new("https://dood.to/e/2"),
            ServerLink::new("https://mixdrop.co/e/broken"),
            ServerLink::new("https://uqload.com/embed/1"),
            ServerLink::new("https://wish.tld/e/3"),
        ];

        let videos = extract_all(&links, &TABLE, &Counting).await;
        assert_eq!(videos.len(), 6);
        assert!(videos.iter().all(|v| v.host != Host::MixDrop));
        assert_eq!(videos.iter().filter(|v| v.host == Host::StreamWish).count(), 3);
    }

    #[tokio::test]
    async fn test_extract_all_every_link_fails() {
        let links = vec![
            ServerLink::new("https://dood.to/e/x"),
            ServerLink::new("https://uqload.com/embed/y"),
        ];

        let videos = extract_all(&links, &TABLE, &Counting).await;
        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn test_extract_all_empty() {
        let videos = extract_all(&[], &TABLE, &Counting).await;
        assert!(videos.is_empty());
    }
}
