//! A page of search results that knows how to fetch its neighbours.

use crate::ZoomEyeClient;
use serde_json::{Map, Value};
use std::fmt;
use zoomeye_core::{Result, SearchKind, SearchQuery};

/// One page of search results.
///
/// The body is the JSON object returned by ZoomEye, kept as-is. Each page
/// remembers the search that produced it, so [`next_page`](Self::next_page)
/// and [`page`](Self::page) repeat that search with a different page number.
/// Every call is a fresh request; nothing is cached.
#[derive(Clone)]
pub struct SearchPage {
    client: ZoomEyeClient,
    kind: SearchKind,
    query: SearchQuery,
    body: Value,
}

impl SearchPage {
    pub(crate) const fn new(
        client: ZoomEyeClient,
        kind: SearchKind,
        query: SearchQuery,
        body: Value,
    ) -> Self {
        Self {
            client,
            kind,
            query,
            body,
        }
    }

    /// Fetch the page after this one
    pub async fn next_page(&self) -> Result<Self> {
        let query = self.query.next_page()?;
        self.client.run_search(self.kind, &query).await
    }

    /// Fetch an arbitrary page of the same search
    pub async fn page(&self, page: u32) -> Result<Self> {
        self.client
            .run_search(self.kind, &self.query.with_page(page))
            .await
    }

    /// Index this page came from
    #[must_use]
    pub const fn kind(&self) -> SearchKind {
        self.kind
    }

    /// The search that produced this page
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Page number of this page
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.query.page
    }

    /// Raw response body
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consume the page and return the raw response body
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Look up a top-level field of the response
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Matching records on this page
    #[must_use]
    pub fn matches(&self) -> &[Value] {
        self.body
            .get("matches")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Facet aggregations, if any were requested
    #[must_use]
    pub fn facets(&self) -> Option<&Map<String, Value>> {
        self.body.get("facets").and_then(Value::as_object)
    }

    /// Total number of results for the search
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.body.get("total").and_then(Value::as_u64)
    }

    /// Number of results the account may retrieve
    #[must_use]
    pub fn available(&self) -> Option<u64> {
        self.body.get("available").and_then(Value::as_u64)
    }

    /// Returns true if the page holds no matches
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches().is_empty()
    }

    /// Number of matches on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches().len()
    }
}

impl fmt::Debug for SearchPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPage")
            .field("kind", &self.kind)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
