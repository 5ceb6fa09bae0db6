use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ZoomEye index a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Hosts and devices (`/host/search`)
    Host,
    /// Websites (`/web/search`)
    Web,
}

impl SearchKind {
    /// Endpoint path for this kind of search
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Host => "/host/search",
            Self::Web => "/web/search",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Web => write!(f, "web"),
        }
    }
}
