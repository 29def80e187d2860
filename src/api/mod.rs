//! HTTP client for the quote submission API

mod client;
mod error;
mod traits;

pub use client::{ApiClient, ApiClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
