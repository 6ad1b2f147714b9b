use crate::extractor::Host;

/// A raw server link found behind the view gate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerLink {
    pub url: String,
}

impl ServerLink {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

/// A playable stream candidate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    pub url: String,
    pub quality: String,
    pub host: Host,
    /// Referer the player has to send, when the host checks it
    pub referer: Option<String>,
}

impl Video {
    pub fn new(url: &str, quality: &str, host: Host) -> Self {
        Self {
            url: url.to_string(),
            quality: quality.to_string(),
            host,
            referer: None,
        }
    }

    pub fn with_referer(mut self, referer: &str) -> Self {
        self.referer = Some(referer.to_string());
        self
    }

    fn matches(&self, preference: &str) -> bool {
        self.quality.contains(preference) || self.host.label().contains(preference)
    }
}

/// Moves the candidates matching `preference` to the front
///
/// Both groups keep their input order.
pub fn rank(videos: Vec<Video>, preference: &str) -> Vec<Video> {
    let (mut preferred, rest): (Vec<_>, Vec<_>) =
        videos.into_iter().partition(|v| v.matches(preference));

    preferred.extend(rest);
    preferred
}
