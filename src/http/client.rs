//! Low-level HTTP client — `CoinSimHttp`.
//!
//! One method per backend endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level client wraps this.
//!
//! Identity travels two ways, mirroring the backend: every request carries a
//! `user_id` query parameter when a session is set, and the reqwest cookie
//! store holds the server session cookie once `/set_uid` has been called.

use crate::domain::account::wire::ResetResponse;
use crate::domain::market::wire::{CoinListEntry, QuoteEntry};
use crate::domain::portfolio::wire::ProfitResponse;
use crate::domain::price_history::wire::PricePointRow;
use crate::domain::trade::wire::{TradeInfoResponse, TradeReceiptResponse, TradeRequest};
use crate::domain::watchlist::wire::FollowListResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{CoinId, Range};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the CoinSim REST API.
pub struct CoinSimHttp {
    base_url: String,
    client: Client,
    /// Current user id, appended as a query parameter to every request.
    user_id: Arc<RwLock<Option<String>>>,
}

impl CoinSimHttp {
    pub fn new(base_url: &str, user_id: Option<String>) -> Self {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        // On WASM the browser owns cookies; natively the SDK holds the
        // backend's session cookie itself.
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .cookie_store(true)
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            user_id: Arc::new(RwLock::new(user_id)),
        }
    }

    /// Set the user id carried on every request.
    pub(crate) async fn set_user_id(&self, user_id: Option<String>) {
        *self.user_id.write().await = user_id;
    }

    pub(crate) async fn user_id(&self) -> Option<String> {
        self.user_id.read().await.clone()
    }

    // ── Market ───────────────────────────────────────────────────────────

    pub async fn get_coin_list(&self) -> Result<Vec<CoinListEntry>, HttpError> {
        let url = format!("{}/api/coin_list", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_current_prices(&self) -> Result<Vec<QuoteEntry>, HttpError> {
        let url = format!("{}/api/current_prices", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Price history ────────────────────────────────────────────────────

    pub async fn get_price_history(
        &self,
        coin_id: &CoinId,
        range: Range,
    ) -> Result<Vec<PricePointRow>, HttpError> {
        let url = format!(
            "{}/api/price_history/{}?type={}",
            self.base_url,
            urlencoding::encode(coin_id.as_str()),
            range.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Trade ────────────────────────────────────────────────────────────

    pub async fn get_trade_info(&self, coin_id: &CoinId) -> Result<TradeInfoResponse, HttpError> {
        let url = format!(
            "{}/api/trade_info?coin_id={}",
            self.base_url,
            urlencoding::encode(coin_id.as_str())
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn submit_trade(
        &self,
        request: &TradeRequest,
    ) -> Result<TradeReceiptResponse, HttpError> {
        let url = format!("{}/api/trade", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Portfolio ────────────────────────────────────────────────────────

    pub async fn get_profit(&self) -> Result<ProfitResponse, HttpError> {
        let url = format!("{}/api/profit", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub async fn get_follow_list(&self) -> Result<FollowListResponse, HttpError> {
        let url = format!("{}/follow_list", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    /// Follow-list mutation. The backend takes this endpoint form-encoded.
    pub async fn post_follow_action(
        &self,
        action: &str,
        coin_id: &CoinId,
    ) -> Result<(), HttpError> {
        let url = format!("{}/follow_list", self.base_url);
        let fields = [("action", action), ("coin_id", coin_id.as_str())];
        self.post_form(&url, &fields).await
    }

    // ── Account ──────────────────────────────────────────────────────────

    pub async fn reset_account(&self) -> Result<ResetResponse, HttpError> {
        let url = format!("{}/api/reset", self.base_url);
        let body = serde_json::json!({ "user_id": self.user_id().await });
        self.post(&url, &body, RetryPolicy::None).await
    }

    // ── Session ──────────────────────────────────────────────────────────

    pub async fn set_uid(&self, uid: &str) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/set_uid", self.base_url);
        self.post(&url, &serde_json::json!({ "uid": uid }), RetryPolicy::None)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let url = self.with_user_param(url).await;
        let mut req = self.client.request(method.clone(), &url);

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        Self::parse_response(resp).await
    }

    /// Form-encoded POST; mutations never retry, so no policy parameter.
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<(), HttpError> {
        let url = self.with_user_param(url).await;
        let resp = self.client.post(&url).form(fields).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Self::error_for_status(status.as_u16(), resp.text().await.unwrap_or_default())
    }

    async fn with_user_param(&self, url: &str) -> String {
        match self.user_id.read().await.as_ref() {
            Some(uid) => {
                let separator = if url.contains('?') { '&' } else { '?' };
                format!("{}{}user_id={}", url, separator, urlencoding::encode(uid))
            }
            None => url.to_string(),
        }
    }

    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        Self::error_for_status(status.as_u16(), resp.text().await.unwrap_or_default())
    }

    fn error_for_status<T>(status: u16, body: String) -> Result<T, HttpError> {
        match status {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body)),
            _ => Err(HttpError::ServerError { status, body }),
        }
    }
}

impl Clone for CoinSimHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            user_id: self.user_id.clone(),
        }
    }
}
