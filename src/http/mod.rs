//! HTTP layer: low-level client + retry policies.

pub mod client;
pub mod retry;

pub use client::CoinSimHttp;
pub use retry::{RetryConfig, RetryPolicy};
