use std::time::Duration;

use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

use crate::errors::{Error, Result};

/// Fetches documents on behalf of the scraper and the extractors
pub trait Transport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<String>;

    async fn post(&self, url: &str, headers: HeaderMap, form: &[(&str, &str)]) -> Result<String>;
}

/// Builds a header map carrying only a `Referer`
pub fn referer(url: &str) -> Result<HeaderMap> {
    let value = HeaderValue::from_str(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, value);

    Ok(headers)
}

#[derive(Clone, Debug)]
pub struct HttpClient(Client);

impl<'a> HttpClient {
    #[rustfmt::skip]
    const ACCEPT: &'a str = "text/html,application/xhtml+xml,application/xml; q=0.9,image/webp,*/*; q=0.8";
    const USER_AGENT: &'a str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";

    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .default_headers(Self::default_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self(client))
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(header::ACCEPT, HeaderValue::from_static(Self::ACCEPT));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("ar,en;q=0.8"));

        headers
    }
}

impl Transport for HttpClient {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<String> {
        debug!(url, "GET");

        let response = self
            .0
            .get(url)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    async fn post(&self, url: &str, headers: HeaderMap, form: &[(&str, &str)]) -> Result<String> {
        debug!(url, "POST");

        let response = self
            .0
            .post(url)
            .headers(headers)
            .form(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// A request seen by [`FakeTransport`]
    #[derive(Debug, Clone)]
    pub struct Seen {
        pub method: &'static str,
        pub url: String,
        pub headers: HeaderMap,
        pub form: Vec<(String, String)>,
    }

    /// Serves canned pages by url, everything else fails
    #[derive(Default)]
    pub struct FakeTransport {
        pages: HashMap<String, String>,
        pub seen: RefCell<Vec<Seen>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        fn serve(&self, seen: Seen) -> Result<String> {
            let body = self.pages.get(&seen.url).cloned();
            let url = seen.url.clone();
            self.seen.borrow_mut().push(seen);

            body.ok_or_else(|| Error::Custom(format!("unreachable {url}")))
        }
    }

    impl Transport for FakeTransport {
        async fn get(&self, url: &str, headers: HeaderMap) -> Result<String> {
            self.serve(Seen {
                method: "GET",
                url: url.to_string(),
                headers,
                form: vec![],
            })
        }

        async fn post(
            &self,
            url: &str,
            headers: HeaderMap,
            form: &[(&str, &str)],
        ) -> Result<String> {
            self.serve(Seen {
                method: "POST",
                url: url.to_string(),
                headers,
                form: form
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
        }
    }
}
