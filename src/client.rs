//! High-level client — `CoinSimClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::account::client::Account;
use crate::domain::market::client::Markets;
use crate::domain::market::Coin;
use crate::domain::portfolio::client::Positions;
use crate::domain::price_history::client::History;
use crate::domain::trade::client::Trades;
use crate::domain::watchlist::client::WatchlistOps;
use crate::error::SdkError;
use crate::http::CoinSimHttp;
use crate::session::client::SessionOps;
use crate::session::Session;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::portfolio::client::Positions as PositionsClient;
pub use crate::domain::price_history::client::History as HistoryClient;
pub use crate::domain::trade::client::Trades as TradesClient;
pub use crate::domain::watchlist::client::WatchlistOps as WatchlistClient;
pub use crate::session::client::SessionOps as SessionSubClient;

/// The primary entry point for the CoinSim SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.trades()`, etc.
pub struct CoinSimClient {
    pub(crate) http: CoinSimHttp,
    /// Attached identity context.
    pub(crate) session: Arc<RwLock<Option<Session>>>,
    /// Coin list cache: (coins, fetched_at)
    pub(crate) coin_cache: Arc<RwLock<Option<(Vec<Coin>, Instant)>>>,
    /// Cache TTL for the coin list
    pub(crate) coin_cache_ttl: Duration,
}

impl CoinSimClient {
    pub fn builder() -> CoinSimClientBuilder {
        CoinSimClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn watchlist(&self) -> WatchlistOps<'_> {
        WatchlistOps { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn session(&self) -> SessionOps<'_> {
        SessionOps { client: self }
    }

    /// Clear all client-side caches.
    pub async fn clear_all_caches(&self) {
        *self.coin_cache.write().await = None;
    }
}

impl Clone for CoinSimClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            coin_cache: self.coin_cache.clone(),
            coin_cache_ttl: self.coin_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinSimClientBuilder {
    base_url: String,
    coin_cache_ttl: Duration,
    session: Option<Session>,
}

impl Default for CoinSimClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            coin_cache_ttl: Duration::from_secs(60),
            session: None,
        }
    }
}

impl CoinSimClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn coin_cache_ttl(mut self, ttl: Duration) -> Self {
        self.coin_cache_ttl = ttl;
        self
    }

    /// Pre-attach an identity context on construction.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn build(self) -> Result<CoinSimClient, SdkError> {
        let initial_user = self
            .session
            .as_ref()
            .map(|s| s.user_id.to_string());

        Ok(CoinSimClient {
            http: CoinSimHttp::new(&self.base_url, initial_user),
            session: Arc::new(RwLock::new(self.session)),
            coin_cache: Arc::new(RwLock::new(None)),
            coin_cache_ttl: self.coin_cache_ttl,
        })
    }
}
