//! Network access layer: one request in, a list of records or a
//! [`NetworkError`] out.

mod client;
mod error;
mod query;

pub use client::FinancialClient;
pub use error::NetworkError;
pub use query::FetchQuery;
pub use reqwest::Method;
