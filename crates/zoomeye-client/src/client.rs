//! Main ZoomEye API client implementation.

use crate::api::*;
use crate::config::ClientConfig;
use crate::page::SearchPage;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use zoomeye_core::{
    access_token_from, is_empty_response, Credentials, LoginRequest, QueryStyle, Result,
    SearchKind, SearchQuery, ZoomEyeError,
};

/// Login endpoint path
const LOGIN_PATH: &str = "/user/login";

/// Main ZoomEye API client.
///
/// Cheap to clone; clones share the same session, so a login on one is
/// visible to all of them.
#[derive(Clone)]
pub struct ZoomEyeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    credentials: Credentials,
    access_token: RwLock<Option<String>>,
    query_style: QueryStyle,
}

/// Whether a request carries the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Anonymous,
    Session,
}

impl ZoomEyeClient {
    /// Create a new client with the given credentials using default settings
    pub fn new(credentials: Credentials) -> Result<Self> {
        ZoomEyeClientBuilder::new(credentials).build()
    }

    /// Create a client from a pre-issued access token
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::token(token))
    }

    /// Create a client that logs in with a username and password
    pub fn with_password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Credentials::password(username, password))
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(credentials: Credentials) -> ZoomEyeClientBuilder {
        ZoomEyeClientBuilder::new(credentials)
    }

    /// Access login endpoints
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Access host and web search endpoints
    #[must_use]
    pub const fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Access account endpoints
    #[must_use]
    pub const fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// Exchange username and password for an access token.
    ///
    /// The token is stored in the session and sent with every later
    /// authenticated request. Returns the client for chaining.
    pub async fn login(&self) -> Result<&Self> {
        let (username, password) = match &self.inner.credentials {
            Credentials::Password { username, password }
                if !username.is_empty() && !password.is_empty() =>
            {
                (username, password)
            }
            _ => {
                return Err(ZoomEyeError::Configuration(
                    "credentials not set: login needs a username and password".to_string(),
                ))
            }
        };

        let body = serde_json::to_value(LoginRequest { username, password })?;
        let response = self
            .send(LOGIN_PATH, &[], Some(&body), Auth::Anonymous)
            .await?;

        let token = access_token_from(&response).map(str::to_owned);
        let Some(token) = token else {
            warn!(username = %username, "login response carried no access token");
            let response = (!is_empty_response(&response)).then_some(response);
            return Err(ZoomEyeError::Authentication { response });
        };

        *self.inner.access_token.write().await = Some(token);
        info!(username = %username, "logged in");
        Ok(self)
    }

    /// The access token currently held by the session
    pub async fn access_token(&self) -> Option<String> {
        self.inner.access_token.read().await.clone()
    }

    /// Returns true if authenticated requests can be sent
    pub async fn is_authenticated(&self) -> bool {
        self.inner.access_token.read().await.is_some()
    }

    /// Search the host index
    pub async fn host_search(&self, query: &SearchQuery) -> Result<SearchPage> {
        self.run_search(SearchKind::Host, query).await
    }

    /// Search the web index
    pub async fn web_search(&self, query: &SearchQuery) -> Result<SearchPage> {
        self.run_search(SearchKind::Web, query).await
    }

    /// Run a search against either index
    pub(crate) async fn run_search(
        &self,
        kind: SearchKind,
        query: &SearchQuery,
    ) -> Result<SearchPage> {
        let params = query.to_params(self.inner.query_style)?;
        debug!(kind = %kind, page = query.page, "search");

        let body = self.get_with_query(kind.path(), &params).await?;
        Ok(SearchPage::new(self.clone(), kind, query.clone(), body))
    }

    /// Build the composite query string this client would send
    pub fn build_query(&self, query: &SearchQuery) -> Result<String> {
        query.build(self.inner.query_style)
    }

    /// Perform an authenticated GET request
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.get_with_query(path, &[]).await
    }

    /// Perform an authenticated GET request with query parameters
    pub(crate) async fn get_with_query(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value> {
        self.send(path, params, None, Auth::Session).await
    }

    /// Dispatch a single request: POST with a JSON body, GET otherwise.
    ///
    /// Any status other than 200 fails with the response body attached.
    async fn send(
        &self,
        path: &str,
        params: &[(&str, String)],
        body: Option<&Value>,
        auth: Auth,
    ) -> Result<Value> {
        // Resolve the token first so an unauthenticated session never hits the wire.
        let token = match auth {
            Auth::Session => Some(self.session_token().await?),
            Auth::Anonymous => None,
        };

        let url = self.build_url(path, params);
        let mut request = match body {
            Some(body) => {
                debug!(url = %url, "POST request");
                self.inner.http.post(&url).json(body)
            }
            None => {
                debug!(url = %url, "GET request");
                self.inner.http.get(&url)
            }
        };

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("JWT {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ZoomEyeError::Http(e.to_string()))?;

        self.handle_response(path, response).await
    }

    async fn session_token(&self) -> Result<String> {
        self.inner.access_token.read().await.clone().ok_or_else(|| {
            ZoomEyeError::Configuration(
                "not logged in: call login() before authenticated requests".to_string(),
            )
        })
    }

    /// Build a URL with encoded query parameters
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    /// Turn a response into its JSON body or a request error
    async fn handle_response(&self, path: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), path, "request failed");
            let text = response.text().await.unwrap_or_default();
            return Err(request_error(status.as_u16(), text));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ZoomEyeError::Http(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(ZoomEyeError::Json)
    }
}

/// Failure for a non-200 response, keeping the body as JSON when it parses
fn request_error(status: u16, text: String) -> ZoomEyeError {
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    ZoomEyeError::Request { status, body }
}

impl std::fmt::Debug for ZoomEyeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomEyeClient")
            .field("base_url", &self.inner.base_url)
            .field("credentials", &self.inner.credentials)
            .field("query_style", &self.inner.query_style)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`ZoomEyeClient`]
pub struct ZoomEyeClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
}

impl ZoomEyeClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: ClientConfig::default(),
        }
    }

    /// Replace every setting with the given configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set how filter terms are joined
    #[must_use]
    pub const fn query_style(mut self, style: QueryStyle) -> Self {
        self.config.query_style = style;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ZoomEyeClient> {
        let base_url = self.config.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| ZoomEyeError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = HttpClient::builder()
            .timeout(self.config.timeout())
            .user_agent(&self.config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ZoomEyeError::Http(e.to_string()))?;

        let access_token = self.credentials.initial_token().map(str::to_owned);

        Ok(ZoomEyeClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                credentials: self.credentials,
                access_token: RwLock::new(access_token),
                query_style: self.config.query_style,
            }),
        })
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
