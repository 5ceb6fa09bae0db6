//! Login endpoint.

use crate::ZoomEyeClient;
use zoomeye_core::Result;

/// Login endpoints
pub struct AuthApi<'a> {
    client: &'a ZoomEyeClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ZoomEyeClient) -> Self {
        Self { client }
    }

    /// Log in with the client's username and password
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let client = ZoomEyeClient::with_password("me@example.com", "secret")?;
    /// client.auth().login().await?;
    /// ```
    pub async fn login(&self) -> Result<&'a ZoomEyeClient> {
        self.client.login().await
    }

    /// The access token currently held by the session
    pub async fn token(&self) -> Option<String> {
        self.client.access_token().await
    }
}
