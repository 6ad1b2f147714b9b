use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::anime::Status;
use crate::errors::{Error, Result};

static MOVIE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?:فيلم|عرض)\s(.*?)\s*(?:\d{4})*\s*(مترجم|مدبلج)"));

static SERIES: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?:مسلسل|برنامج|انمي)\s(.+)\sالحلقة\s(\d+)"));

/// Compiles a pattern known at compile time
pub fn regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(r) => r,
        Err(_) => panic!("unable to parse regex {pattern}"),
    }
}

/// Strips the site's title boilerplate
///
/// Movie titles keep their name and, with `details`, the dubbing tag.
/// Series titles keep the series name and, with `details`, the episode number.
/// Anything else is only trimmed.
pub fn normalize_title(title: &str, details: bool) -> String {
    let title = if let Some(caps) = MOVIE.captures(title) {
        let (name, kind) = (&caps[1], &caps[2]);

        match details {
            true => format!("{name} ({kind})"),
            false => name.to_string(),
        }
    } else if let Some(caps) = SERIES.captures(title) {
        let (name, num) = (&caps[1], &caps[2]);

        match details {
            true => format!("{name} (ep:{num})"),
            false => name.to_string(),
        }
    } else {
        title.to_string()
    };

    title.trim().to_string()
}

pub fn status(title: &str, finished: &[&str]) -> Status {
    if finished.iter().any(|m| title.contains(m)) {
        Status::Completed
    } else {
        Status::Ongoing
    }
}

/// Keeps path, query and fragment of absolute urls
pub fn url_without_domain(href: &str) -> String {
    let Ok(url) = Url::parse(href) else {
        return href.trim().to_string();
    };

    let mut out = url.path().to_string();
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }

    out
}

/// `scheme://host[:port]` of an absolute url
pub fn origin(input: &str) -> Result<String> {
    let url = Url::parse(input).map_err(|_| Error::InvalidUrl(input.to_string()))?;

    match url.origin() {
        o if o.is_tuple() => Ok(o.ascii_serialization()),
        _ => Err(Error::InvalidUrl(input.to_string())),
    }
}

pub fn is_web_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}
