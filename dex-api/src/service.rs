//! List, search and filter over the catalog.
//!
//! Each mode is stateless: it fetches whatever it needs from upstream on
//! every call, paginates, then enriches only the visible page.

use dex_core::{CatalogEntryDetail, CatalogEntrySummary, EntryRef, PageResult};

use crate::client::CatalogClient;
use crate::config::ApiConfig;
use crate::error::CatalogError;
use crate::query::QueryMode;

/// Paginated query service on top of [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct CatalogService {
    client: CatalogClient,
    search_corpus_limit: usize,
}

impl CatalogService {
    pub fn new(client: CatalogClient, search_corpus_limit: usize) -> Self {
        Self {
            client,
            search_corpus_limit,
        }
    }

    /// Build a client and service from one config.
    pub fn from_config(config: &ApiConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(CatalogClient::new(config)?, config.search_corpus_limit))
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Catalog order, one page.
    pub async fn list_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<PageResult<CatalogEntrySummary>, CatalogError> {
        let page = self.client.fetch_summary_page(limit, offset).await?;
        let results = self.client.enrich(&page.results).await;
        Ok(page.map_results(results))
    }

    /// Entries whose name contains `query`, case-insensitively. The query is
    /// matched as given; surrounding whitespace is not stripped.
    ///
    /// Only the first `search_corpus_limit` catalog names are searched.
    /// `count` is the number of matches, not the corpus size.
    pub async fn search_page(
        &self,
        query: &str,
        limit: usize,
        offset: usize,
    ) -> Result<PageResult<CatalogEntrySummary>, CatalogError> {
        check_limit(limit)?;
        let needle = query.to_lowercase();
        let corpus = self.client.fetch_name_corpus(self.search_corpus_limit).await?;
        let matches: Vec<_> = corpus
            .into_iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect();
        log::debug!("Search '{}' matched {} entries", needle, matches.len());

        let page = PageResult::paginate(matches, limit, offset);
        let results = self.client.enrich(&page.results).await;
        Ok(page.map_results(results))
    }

    /// Members of `category`. `count` is the full membership size.
    pub async fn filter_page(
        &self,
        category: &str,
        limit: usize,
        offset: usize,
    ) -> Result<PageResult<CatalogEntrySummary>, CatalogError> {
        check_limit(limit)?;
        let members = self.client.fetch_category_members(category).await?;
        let page = PageResult::paginate(members, limit, offset);
        let results = self.client.enrich(&page.results).await;
        Ok(page.map_results(results))
    }

    /// Dispatch to the page operation for `mode`.
    pub async fn query(
        &self,
        mode: &QueryMode,
        limit: usize,
        offset: usize,
    ) -> Result<PageResult<CatalogEntrySummary>, CatalogError> {
        match mode {
            QueryMode::Plain => self.list_page(limit, offset).await,
            QueryMode::Search(query) => self.search_page(query, limit, offset).await,
            QueryMode::Filter(category) => self.filter_page(category, limit, offset).await,
        }
    }

    /// Full detail for one entry. Errors propagate unchanged.
    pub async fn detail(&self, entry: &EntryRef) -> Result<CatalogEntryDetail, CatalogError> {
        self.client.fetch_detail(entry).await
    }
}

fn check_limit(limit: usize) -> Result<(), CatalogError> {
    if limit == 0 {
        Err(CatalogError::InvalidLimit)
    } else {
        Ok(())
    }
}
