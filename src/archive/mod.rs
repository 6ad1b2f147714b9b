pub mod page;
pub mod sites;

use reqwest::Url;
use reqwest::header::HeaderMap;
use scraper::Html;
use tracing::{debug, info};

use crate::anime::{Details, Episode, Page};
use crate::errors::{Error, Result};
use crate::extractor::{DispatchTable, Resolver, extract_all};
use crate::parser::is_web_url;
use crate::transport::{Transport, referer};
use crate::video::{ServerLink, Video, rank};

/// Supported sites
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Site {
    #[default]
    EgyBest,
}

impl Site {
    pub fn config(self) -> SiteConfig {
        match self {
            Self::EgyBest => sites::EGYBEST,
        }
    }

    /// Name used for per-site configuration keys
    pub fn key(self) -> &'static str {
        match self {
            Self::EgyBest => "egybest",
        }
    }
}

/// Url templates, `{origin}` and `{page}` are filled in
#[derive(Debug, Clone, Copy)]
pub struct Requests {
    pub popular: &'static str,
    pub latest: &'static str,
    pub search: &'static str,
    /// Query parameter carrying the search terms
    pub search_param: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NextPage {
    pub selector: &'static str,
    /// Text the matched node must contain
    pub text: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub item: &'static str,
    pub next_page: NextPage,
}

/// Selectors relative to one listing item
#[derive(Debug, Clone, Copy)]
pub struct EntrySelectors {
    pub link: &'static str,
    pub title: &'static str,
    pub thumbnail: &'static str,
    pub normalize: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DetailSelectors {
    pub title: &'static str,
    pub thumbnail: &'static str,
    pub description: &'static str,
    pub info_item: &'static str,
    pub info_link: &'static str,
    /// `(key, label)` pairs, the info item containing `label` fills `key`
    pub attribution: &'static [(&'static str, &'static str)],
}

/// Everything that differs between two mirrors of the site
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub name: &'static str,
    pub origin: &'static str,
    pub requests: Requests,
    pub popular: Listing,
    pub latest: Listing,
    pub search: Listing,
    pub entry: EntrySelectors,
    pub details: DetailSelectors,
    pub episodes: &'static str,
    pub servers: &'static str,
    pub server_attr: &'static str,
    pub gate_form: &'static [(&'static str, &'static str)],
    /// Title markers of a finished title
    pub finished: &'static [&'static str],
    pub dispatch: DispatchTable,
}

mod selector {
    use scraper::Selector;

    pub fn from(s: &str) -> Selector {
        match Selector::parse(s) {
            Ok(s) => s,
            Err(_) => panic!("unable to parse selector {s}"),
        }
    }
}

/// A site bound to a transport
pub struct Source<T> {
    config: SiteConfig,
    origin: String,
    transport: T,
}

impl<T: Transport> Source<T> {
    pub fn new(site: Site, transport: T) -> Self {
        let config = site.config();

        Self {
            origin: config.origin.to_string(),
            config,
            transport,
        }
    }

    /// Replaces the built-in origin, the site moves domain often
    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        if let Some(o) = origin.filter(|o| is_web_url(o)) {
            self.origin = o.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Joins a site-relative path onto the origin
    pub fn absolute(&self, url: &str) -> String {
        match is_web_url(url) {
            true => url.to_string(),
            false if url.starts_with('/') => format!("{}{url}", self.origin),
            false => format!("{}/{url}", self.origin),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Html> {
        let body = self.transport.get(url, HeaderMap::new()).await?;

        Ok(Html::parse_document(&body))
    }

    async fn listing(&self, url: &str, listing: &Listing) -> Result<Page> {
        info!(url, "fetching listing");

        let doc = self.fetch(url).await?;
        let entries = page::parse_listing(&doc, listing.item, &self.config.entry);
        let has_next = page::has_next_page(&doc, &listing.next_page);
        debug!(count = entries.len(), has_next, "listing parsed");

        Ok(Page { entries, has_next })
    }

    pub async fn popular(&self, page: u32) -> Result<Page> {
        let url = fill_url!(self.config.requests.popular, &self.origin, page);

        self.listing(&url, &self.config.popular).await
    }

    pub async fn latest(&self, page: u32) -> Result<Page> {
        let url = fill_url!(self.config.requests.latest, &self.origin, page);

        self.listing(&url, &self.config.latest).await
    }

    /// A blank query falls back to the unfiltered listing
    pub async fn search(&self, query: &str, page: u32) -> Result<Page> {
        let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
        if query.is_empty() {
            return self.popular(page).await;
        }

        let url = fill_url!(self.config.requests.search, &self.origin, page);
        let mut url = Url::parse(&url).map_err(|_| Error::InvalidUrl(url.clone()))?;
        url.query_pairs_mut()
            .append_pair(self.config.requests.search_param, &query);

        self.listing(url.as_str(), &self.config.search).await
    }

    pub async fn details(&self, url: &str) -> Result<Details> {
        let doc = self.fetch(&self.absolute(url)).await?;

        Ok(page::parse_details(
            &doc,
            &self.config.details,
            self.config.finished,
        ))
    }

    pub async fn episodes(&self, url: &str) -> Result<Vec<Episode>> {
        let doc = self.fetch(&self.absolute(url)).await?;

        Ok(page::parse_episodes(&doc, self.config.episodes))
    }

    /// Unlocks the server list of an episode page
    ///
    /// The links are only served to a POST of the view form sent with the
    /// site as referer, a plain GET of the page does not carry them.
    pub async fn list_servers(&self, url: &str) -> Result<Vec<ServerLink>> {
        let url = self.absolute(url);
        let headers = referer(&format!("{}/", self.origin))?;
        info!(%url, "unlocking server list");

        let body = self
            .transport
            .post(&url, headers, self.config.gate_form)
            .await?;
        let doc = Html::parse_document(&body);
        let links = page::parse_servers(&doc, self.config.servers, self.config.server_attr);
        debug!(count = links.len(), "servers found");

        Ok(links)
    }

    /// Resolves every server of an episode, best match for `preference` first
    pub async fn videos<R: Resolver>(
        &self,
        url: &str,
        resolver: &R,
        preference: &str,
    ) -> Result<Vec<Video>> {
        let links = self.list_servers(url).await?;
        let videos = extract_all(&links, &self.config.dispatch, resolver).await;
        info!(links = links.len(), videos = videos.len(), "extraction done");

        Ok(rank(videos, preference))
    }
}
