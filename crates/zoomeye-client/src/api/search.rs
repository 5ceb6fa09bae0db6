//! Search API endpoints.

use crate::{SearchPage, ZoomEyeClient};
use zoomeye_core::{Filters, Result, SearchKind, SearchQuery};

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a ZoomEyeClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a ZoomEyeClient) -> Self {
        Self { client }
    }

    /// Search the host index
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let page = client.search()
    ///     .host("nginx")
    ///     .filter(Filter::Port, 80)
    ///     .facets(["app", "os"])
    ///     .send()
    ///     .await?;
    /// println!("Total: {:?}", page.total());
    /// ```
    #[must_use]
    pub fn host(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, SearchKind::Host, query.into())
    }

    /// Search the web index
    #[must_use]
    pub fn web(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, SearchKind::Web, query.into())
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a ZoomEyeClient,
    kind: SearchKind,
    query: SearchQuery,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a ZoomEyeClient, kind: SearchKind, query: String) -> Self {
        Self {
            client,
            kind,
            query: SearchQuery::new(query),
        }
    }

    /// Add a filter term
    #[must_use]
    pub fn filter(mut self, key: impl AsRef<str>, value: impl ToString) -> Self {
        self.query.filters.insert(key, value);
        self
    }

    /// Replace all filter terms
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.query.filters = filters;
        self
    }

    /// Add a facet to aggregate results
    #[must_use]
    pub fn facet(mut self, facet: impl Into<String>) -> Self {
        self.query = self.query.facet(facet);
        self
    }

    /// Add multiple facets
    #[must_use]
    pub fn facets<I, S>(mut self, facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query = self.query.facets(facets);
        self
    }

    /// Set the page number (1-indexed)
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.query.page = page;
        self
    }

    /// The query this builder would send
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Execute the search
    pub async fn send(self) -> Result<SearchPage> {
        self.client.run_search(self.kind, &self.query).await
    }
}
