// ABOUTME: PDC SDK library providing an async REST client for the Product Definition Catalog
// ABOUTME: Includes token authentication, retries, lazy pagination and typed image filters

pub mod builder;
pub mod constants;
pub mod error;
pub mod filters;
pub mod retry;
pub mod types;

#[cfg(test)]
mod test_helpers;

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use std::collections::VecDeque;
use url::Url;

pub use builder::PdcClientConfig;
pub use error::PdcError;
pub use filters::ImageFilters;
pub use types::{ImageRecord, Page};

use crate::constants::{endpoints, headers, paging};
use crate::retry::{RetryConfig, retry_with_backoff};

pub type Result<T> = std::result::Result<T, PdcError>;

/// Read access to image records. The CLI only talks to the catalog through
/// this trait.
#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// Lazily walk every page of images matching `filters`. The stream is
    /// finite and cannot be restarted; a new call issues new requests.
    fn list_images<'a>(&'a self, filters: &'a ImageFilters) -> BoxStream<'a, Result<ImageRecord>>;

    /// Single request for images matching `filters`, returning the first
    /// page together with the total `count`.
    async fn find_images(&self, filters: &ImageFilters) -> Result<Page<ImageRecord>>;
}

pub struct PdcClient {
    client: reqwest::Client,
    base_url: Url,
    page_size: Option<u32>,
    retry: RetryConfig,
}

impl PdcClient {
    pub(crate) fn from_config(config: PdcClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(headers::USER_AGENT));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.auth_token {
            let mut value = HeaderValue::from_str(&format!(
                "{} {}",
                headers::TOKEN_SCHEME,
                token.expose_secret()
            ))
            .map_err(|e| PdcError::Configuration(format!("Invalid token: {}", e)))?;
            value.set_sensitive(true);
            default_headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.ssl_verify)
            .build()
            .map_err(|e| PdcError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            page_size: config.page_size,
            retry: RetryConfig {
                max_retries: config.max_retries,
                ..Default::default()
            },
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// GET `endpoint` with the given query, retrying transient failures.
    pub async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;
        retry_with_backoff(&self.retry, || self.send_get(&url, query)).await
    }

    async fn send_get<T>(&self, url: &Url, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        log::debug!("GET {} {:?}", url, query);
        let response = self.client.get(url.clone()).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PdcError::from_status(status.as_u16(), url.as_str(), &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_image_page(&self, filters: &ImageFilters, page: u64) -> Result<Page<ImageRecord>> {
        let mut query = owned_query(filters);
        query.push((paging::PAGE, page.to_string()));
        if let Some(size) = self.page_size {
            query.push((paging::PAGE_SIZE, size.to_string()));
        }
        self.get(endpoints::IMAGES, &query).await
    }
}

#[async_trait]
impl ImageCatalog for PdcClient {
    fn list_images<'a>(&'a self, filters: &'a ImageFilters) -> BoxStream<'a, Result<ImageRecord>> {
        let state = PageCursor {
            next_page: Some(1),
            buffered: VecDeque::new(),
        };

        stream::try_unfold(state, move |mut cursor| async move {
            loop {
                if let Some(record) = cursor.buffered.pop_front() {
                    return Ok::<_, PdcError>(Some((record, cursor)));
                }
                let Some(page_number) = cursor.next_page else {
                    return Ok(None);
                };

                let page = self.fetch_image_page(filters, page_number).await?;
                log::debug!(
                    "Fetched page {} ({} records, {} total)",
                    page_number,
                    page.results.len(),
                    page.count
                );
                cursor.next_page = page.has_next().then_some(page_number + 1);
                cursor.buffered.extend(page.results);
            }
        })
        .boxed()
    }

    async fn find_images(&self, filters: &ImageFilters) -> Result<Page<ImageRecord>> {
        self.get(endpoints::IMAGES, &owned_query(filters)).await
    }
}

struct PageCursor {
    next_page: Option<u64>,
    buffered: VecDeque<ImageRecord>,
}

fn owned_query(filters: &ImageFilters) -> Vec<(&str, String)> {
    filters
        .to_query()
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect()
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
