//! API endpoint modules.

mod account;
mod auth;
mod search;

pub use account::AccountApi;
pub use auth::AuthApi;
pub use search::{SearchApi, SearchRequestBuilder};
