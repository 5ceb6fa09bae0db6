mod auth;
mod credentials;
mod filter;
mod query;
mod search;

pub use auth::*;
pub use credentials::*;
pub use filter::*;
pub use query::*;
pub use search::*;
