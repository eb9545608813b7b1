//! # CoinSim SDK
//!
//! A unified Rust SDK for the CoinSim simulated crypto trading game,
//! supporting both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, chart geometry, domain models (always available, WASM-safe)
//! 2. **Session** — Explicit user-identity context + launch-URL bootstrap
//! 3. **HTTP API** — `CoinSimHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `CoinSimClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinsim_sdk::prelude::*;
//!
//! let client = CoinSimClient::builder()
//!     .base_url("https://play.coinsim.example")
//!     .session(Session::explicit("user_001"))
//!     .build()?;
//!
//! let coins = client.markets().coins().await?;
//! let samples = client.history().get(&coins[0].id, Range::Day1).await?;
//! let view = render_trend(&samples, &ChartLayout::default(), YDirection::PriceUpIsScreenUp);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Trend-series chart geometry: price samples → screen points + summary.
pub mod chart;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// User identity: session context, launch-URL bootstrap, registration.
pub mod session;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinSimClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, Range, TradeAction, UserId};

    // Chart geometry
    pub use crate::chart::{
        render_trend, ChartLayout, PriceSample, ScreenPoint, SeriesSummary, TrendView, YDirection,
    };

    // Domain types — market
    pub use crate::domain::market::{Coin, Quote};

    // Domain types — price history
    pub use crate::domain::price_history::PriceHistoryState;

    // Domain types — portfolio
    pub use crate::domain::portfolio::{Holding, Portfolio, PortfolioSummary};

    // Domain types — trade
    pub use crate::domain::trade::{fee_rate, preview, TradeInfo, TradePreview, TradeReceipt};

    // Domain types — watchlist, account
    pub use crate::domain::account::initial_balance;
    pub use crate::domain::watchlist::{TrackedCoin, Watchlist};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Session
    pub use crate::session::{Session, SessionSource};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountClient, CoinSimClient, CoinSimClientBuilder, HistoryClient, MarketsClient,
        PositionsClient, SessionSubClient, TradesClient, WatchlistClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
