//! Search query construction.
//!
//! ZoomEye takes the whole search as one composite string: free text, then
//! `key:value` filter terms, then `&facets=` and `&page=` suffixes.

use super::Filters;
use crate::{Result, ZoomEyeError};
use serde::{Deserialize, Serialize};

/// How consecutive filter terms are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStyle {
    /// Filter terms run together with no separator (`port:80country:US`).
    ///
    /// This is what existing ZoomEye clients send, so it is the default.
    #[default]
    Legacy,
    /// Filter terms separated by a single space (`port:80 country:US`)
    Spaced,
}

/// A search request: query text, filters, facets and page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text part of the query
    pub query: String,

    /// Filter terms appended after the text
    #[serde(default)]
    pub filters: Filters,

    /// Facets to aggregate over
    #[serde(default)]
    pub facets: Vec<String>,

    /// Page number (1-indexed)
    #[serde(default = "first_page")]
    pub page: u32,
}

const fn first_page() -> u32 {
    1
}

impl SearchQuery {
    /// Create a query for the first page with no filters or facets
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Filters::new(),
            facets: Vec::new(),
            page: first_page(),
        }
    }

    /// Replace the filter terms
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Add a single facet
    #[must_use]
    pub fn facet(mut self, facet: impl Into<String>) -> Self {
        self.facets.push(facet.into());
        self
    }

    /// Add multiple facets
    #[must_use]
    pub fn facets<I, S>(mut self, facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets.extend(facets.into_iter().map(Into::into));
        self
    }

    /// Set the page number
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// The same query on another page
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        self.clone().page(page)
    }

    /// The same query on the page after this one
    pub fn next_page(&self) -> Result<Self> {
        let page = self
            .page
            .checked_add(1)
            .ok_or_else(|| ZoomEyeError::Validation("page number out of range".to_string()))?;
        Ok(self.with_page(page))
    }

    /// Fail if the query text is empty
    pub fn validate(&self) -> Result<()> {
        if self.query.is_empty() {
            return Err(ZoomEyeError::Validation("query can't be empty".to_string()));
        }
        Ok(())
    }

    /// Build the composite query string.
    ///
    /// The result is not URL-encoded.
    pub fn build(&self, style: QueryStyle) -> Result<String> {
        let mut out = self.search_text(style)?;

        if !self.facets.is_empty() {
            out.push_str("&facets=");
            out.push_str(&self.facets.join(","));
        }

        out.push_str("&page=");
        out.push_str(&self.page.to_string());

        Ok(out)
    }

    /// Split the composite string into the URL parameters it encodes.
    ///
    /// Percent-encoding each value separately keeps `&` or `#` in the
    /// query text from leaking into other parameters.
    pub fn to_params(&self, style: QueryStyle) -> Result<Vec<(&'static str, String)>> {
        let mut params = vec![("query", self.search_text(style)?)];

        if !self.facets.is_empty() {
            params.push(("facets", self.facets.join(",")));
        }
        params.push(("page", self.page.to_string()));

        Ok(params)
    }

    /// Query text followed by the filter terms
    fn search_text(&self, style: QueryStyle) -> Result<String> {
        self.validate()?;

        let mut out = self.query.clone();
        if self.filters.is_empty() {
            return Ok(out);
        }

        out.push(' ');
        for (i, (key, value)) in self.filters.iter().enumerate() {
            if i > 0 && style == QueryStyle::Spaced {
                out.push(' ');
            }
            out.push_str(key);
            out.push(':');
            out.push_str(value);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Filter;

    fn nginx_us() -> SearchQuery {
        SearchQuery::new("nginx")
            .filters(Filters::new().with(Filter::Port, 80).with(Filter::Country, "US"))
    }

    #[test]
    fn test_empty_query_rejected() {
        let err = SearchQuery::new("").build(QueryStyle::Legacy).unwrap_err();
        assert!(matches!(err, ZoomEyeError::Validation(ref m) if m == "query can't be empty"));
        assert!(SearchQuery::new("").to_params(QueryStyle::Spaced).is_err());
    }

    #[test]
    fn test_plain_query() {
        let built = SearchQuery::new("nginx").build(QueryStyle::Legacy).unwrap();
        assert_eq!(built, "nginx&page=1");
    }

    #[test]
    fn test_legacy_filters_run_together() {
        let built = nginx_us().build(QueryStyle::Legacy).unwrap();
        assert_eq!(built, "nginx port:80country:US&page=1");
    }

    #[test]
    fn test_spaced_filters() {
        let built = nginx_us().build(QueryStyle::Spaced).unwrap();
        assert_eq!(built, "nginx port:80 country:US&page=1");
    }

    #[test]
    fn test_facets_and_page() {
        let built = SearchQuery::new("nginx")
            .facets(["app", "os"])
            .page(2)
            .build(QueryStyle::Legacy)
            .unwrap();
        assert_eq!(built, "nginx&facets=app,os&page=2");
    }

    #[test]
    fn test_params_match_composite_string() {
        let query = nginx_us().facet("app").page(3);
        let params = query.to_params(QueryStyle::Legacy).unwrap();
        assert_eq!(
            params,
            vec![
                ("query", "nginx port:80country:US".to_string()),
                ("facets", "app".to_string()),
                ("page", "3".to_string()),
            ]
        );

        let joined = format!("{}&facets={}&page={}", params[0].1, params[1].1, params[2].1);
        assert_eq!(joined, query.build(QueryStyle::Legacy).unwrap());
    }

    #[test]
    fn test_next_page_is_relative() {
        let first = nginx_us().page(4);
        let next = first.next_page().unwrap();
        assert_eq!(next.page, 5);
        assert_eq!(first.page, 4);
        assert_eq!(next.filters, first.filters);
        assert_eq!(first.next_page().unwrap().page, 5);

        assert!(SearchQuery::new("x").page(u32::MAX).next_page().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let query: SearchQuery = serde_json::from_str(r#"{"query": "redis"}"#).unwrap();
        assert_eq!(query.page, 1);
        assert!(query.filters.is_empty());
        assert!(query.facets.is_empty());
    }
}
