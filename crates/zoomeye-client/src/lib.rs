//! HTTP client for the ZoomEye API.
//!
//! This crate provides the main [`ZoomEyeClient`] for interacting with the
//! ZoomEye API. Searches return a [`SearchPage`], which can fetch the next
//! page or any other page of the same search.

#![doc(html_root_url = "https://docs.rs/zoomeye-client/0.1.0")]

mod client;
mod config;
mod page;
pub mod api;

pub use client::{ZoomEyeClient, ZoomEyeClientBuilder};
pub use config::*;
pub use page::SearchPage;
pub use zoomeye_core::{Result, ZoomEyeError};
