//! Account API endpoints.

use crate::ZoomEyeClient;
use serde_json::Value;
use zoomeye_core::Result;

/// Account API endpoints
pub struct AccountApi<'a> {
    client: &'a ZoomEyeClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) const fn new(client: &'a ZoomEyeClient) -> Self {
        Self { client }
    }

    /// Get plan and remaining search quota
    pub async fn resources_info(&self) -> Result<Value> {
        self.client.get("/resources-info").await
    }
}
