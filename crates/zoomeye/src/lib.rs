//! Rust client for the ZoomEye cyberspace search engine API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use zoomeye::{Filter, ZoomEyeClient};
//!
//! #[tokio::main]
//! async fn main() -> zoomeye::Result<()> {
//!     let client = ZoomEyeClient::with_password("me@example.com", "secret")?;
//!     client.login().await?;
//!
//!     let page = client.search()
//!         .host("nginx")
//!         .filter(Filter::Country, "US")
//!         .facets(["app", "os"])
//!         .send()
//!         .await?;
//!
//!     println!("Total: {:?} results", page.total());
//!
//!     let next = page.next_page().await?;
//!     println!("Page {} has {} matches", next.page_number(), next.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/zoomeye/0.1.0")]

// Re-export core types
pub use zoomeye_core::*;

// Re-export client
pub use zoomeye_client::{
    api, ClientConfig, SearchPage, ZoomEyeClient, ZoomEyeClientBuilder, DEFAULT_BASE_URL,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
