// src/core/net.rs

// Page fetching. The pipeline only needs "GET this URL, give me status + body",
// so that is the whole trait; HttpFetcher is the reqwest-backed implementation.

use reqwest::blocking::Client;
use url::Url;

use crate::config::options::FetchOptions;
use crate::error::FetchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `FetchError::Status`.
    pub fn error_for_status(self, url: &Url) -> Result<Response, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Status { url: url.to_string(), status: self.status })
        }
    }
}

/// Anything that can GET a page.
///
/// Transport faults are `Err`; an HTTP error status is still `Ok` so the
/// caller decides what a 404 means.
pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> Result<Response, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &Url) -> Result<Response, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher. One client per fetcher, reused for both requests.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(opts.user_agent.as_str());
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Response, FetchError> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::transport(url.as_str(), e))?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| FetchError::transport(url.as_str(), e))?;
        logd!("{status} {url} ({} bytes)", body.len());

        Ok(Response { status, body })
    }
}
