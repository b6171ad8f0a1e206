use futures::future::join_all;
use serde::de::DeserializeOwned;

use dex_core::{CatalogEntryDetail, CatalogEntrySummary, EntryRef, PageResult};

use crate::config::ApiConfig;
use crate::error::CatalogError;
use crate::reference::{fallback_summary, resolve_id};
use crate::types::{CategoryResponse, ListResponse, RawEntry, RawListingRef};

/// How much of an unexpected response body to quote in errors.
const ERROR_SNIPPET_LEN: usize = 200;

/// HTTP client for the upstream catalog.
///
/// Owns all knowledge of the upstream schema; callers only ever see the
/// normalized shapes from `dex_core`. Nothing is cached: every call goes to
/// the network.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One page of raw `{name, url}` listing references.
    pub async fn fetch_summary_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<PageResult<RawListingRef>, CatalogError> {
        if limit == 0 {
            return Err(CatalogError::InvalidLimit);
        }
        let mut list = self.fetch_listing(limit, offset).await?;
        list.results.truncate(limit);
        Ok(PageResult::new(list.count, limit, offset, list.results))
    }

    /// The first `cap` listing references, in catalog order.
    pub async fn fetch_name_corpus(&self, cap: usize) -> Result<Vec<RawListingRef>, CatalogError> {
        let list = self.fetch_listing(cap, 0).await?;
        if list.count > cap {
            log::debug!(
                "Name corpus capped at {} of {} catalog entries",
                cap,
                list.count
            );
        }
        Ok(list.results.into_iter().take(cap).collect())
    }

    /// Every member of a category, in upstream order.
    pub async fn fetch_category_members(
        &self,
        category: &str,
    ) -> Result<Vec<RawListingRef>, CatalogError> {
        let category = category.trim().to_lowercase();
        if category.is_empty() || category.contains(['/', '?', '#']) {
            return Err(CatalogError::CategoryNotFound(category));
        }
        let path = format!("type/{category}");
        let response: CategoryResponse = self
            .get_json(&path, &[], || CatalogError::CategoryNotFound(category.clone()))
            .await?;
        Ok(response.pokemon.into_iter().map(|m| m.pokemon).collect())
    }

    /// Fetch and normalize one entry.
    pub async fn fetch_detail(&self, entry: &EntryRef) -> Result<CatalogEntryDetail, CatalogError> {
        Ok(self.fetch_raw_entry(entry).await?.into_detail())
    }

    /// Fetch one entry, keeping only the fields list views need.
    pub async fn fetch_summary(&self, entry: &EntryRef) -> Result<CatalogEntrySummary, CatalogError> {
        Ok(self.fetch_raw_entry(entry).await?.into_summary())
    }

    /// Resolve a listing reference to a summary, degrading instead of failing.
    ///
    /// A failed detail fetch still yields an entry built from the listing
    /// name and a fallback image. A reference whose URL carries no id is
    /// looked up by name instead; only if that also fails is the entry
    /// dropped (`None`).
    pub async fn fetch_summary_best_effort(
        &self,
        reference: &RawListingRef,
    ) -> Option<CatalogEntrySummary> {
        match resolve_id(&reference.url) {
            Ok(id) => match self.fetch_summary(&EntryRef::Id(id)).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    log::warn!(
                        "Using fallback for '{}' (#{}): {}",
                        reference.name,
                        id,
                        e
                    );
                    Some(fallback_summary(id, &reference.name))
                }
            },
            Err(e) => {
                log::warn!("{e}; looking up '{}' by name", reference.name);
                match self.fetch_summary(&EntryRef::name(&reference.name)).await {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        log::warn!("Dropping '{}' from page: {}", reference.name, e);
                        None
                    }
                }
            }
        }
    }

    /// Enrich a batch of references concurrently.
    ///
    /// All fetches are started together and awaited together; the output
    /// keeps the input order regardless of completion order.
    pub async fn enrich(&self, references: &[RawListingRef]) -> Vec<CatalogEntrySummary> {
        let fetches = references.iter().map(|r| self.fetch_summary_best_effort(r));
        join_all(fetches).await.into_iter().flatten().collect()
    }

    async fn fetch_listing(&self, limit: usize, offset: usize) -> Result<ListResponse, CatalogError> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        self.get_json("pokemon", &query, || {
            CatalogError::decode("listing endpoint returned 404")
        })
        .await
    }

    async fn fetch_raw_entry(&self, entry: &EntryRef) -> Result<RawEntry, CatalogError> {
        let path = format!("pokemon/{}", entry.as_path_segment());
        self.get_json(&path, &[], || CatalogError::EntryNotFound(entry.to_string()))
            .await
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    ///
    /// 404 maps to `not_found()`, other error statuses to `ServerError`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        not_found: impl FnOnce() -> CatalogError,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let resp = self.http.get(&url).query(query).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(not_found());
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }

        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            CatalogError::decode(format!("{e}. Response: {}", snippet(&text)))
        })
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(ERROR_SNIPPET_LEN).collect()
}
