//! Core types and errors for the ZoomEye API client.
//!
//! This crate provides the foundational pieces shared by the ZoomEye crates:
//!
//! - **Types**: credentials, search filters, query construction and search kinds
//! - **Errors**: a single error enum, [`ZoomEyeError`]
//!
//! Nothing in here performs I/O. Query construction is a pure function of a
//! [`SearchQuery`] and can be unit tested without a server.
//!
//! # Example
//!
//! ```rust
//! use zoomeye_core::{Filter, Filters, QueryStyle, SearchQuery};
//!
//! let query = SearchQuery::new("nginx")
//!     .filters(Filters::new().with(Filter::Port, 80).with(Filter::Country, "US"));
//!
//! assert_eq!(
//!     query.build(QueryStyle::Legacy).unwrap(),
//!     "nginx port:80country:US&page=1"
//! );
//! ```

#![doc(html_root_url = "https://docs.rs/zoomeye-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Result, ZoomEyeError};
pub use types::*;
