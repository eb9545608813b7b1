//! Network URL constants for the CoinSim SDK.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
