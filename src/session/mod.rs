//! User identity — session context, launch-URL bootstrap, backend registration.
//!
//! Identity is an explicit [`Session`] value handed to the client at build
//! time (or set later through the session sub-client). Nothing here reads
//! ambient global state; the one place identity may be *discovered* is the
//! launch URL, and [`Session::from_launch_url`] is the single authoritative
//! parser for it.
//!
//! The backend accepts identity two ways: a `user_id` query parameter on any
//! request, and a server-side cookie session populated by `POST /set_uid`.
//! The SDK does both — the HTTP layer appends the query parameter while the
//! cookie store carries the session cookie once `register()` has run.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SessionError;
use crate::shared::UserId;
use serde::{Deserialize, Serialize};

/// Where a session's user id came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionSource {
    /// Parsed out of the launch URL.
    LaunchUrl,
    /// Supplied directly by the caller.
    Explicit,
}

/// Explicit identity context for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub source: SessionSource,
}

impl Session {
    /// Build a session from a caller-supplied user id.
    pub fn explicit(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            source: SessionSource::Explicit,
        }
    }

    /// Bootstrap a session from the application launch URL.
    ///
    /// Checks the query string embedded in the URL fragment first
    /// (`https://host/#/page?user_id=abc` — the form the SPA navigates
    /// with), then the top-level query string (`https://host/?user_id=abc`
    /// — the form the backend accepts directly). Empty values and the
    /// literal string `"null"` are rejected.
    pub fn from_launch_url(url: &str) -> Result<Self, SessionError> {
        user_id_from_url(url)
            .map(|user_id| Self {
                user_id,
                source: SessionSource::LaunchUrl,
            })
            .ok_or(SessionError::MissingUserId)
    }
}

/// Extract a usable `user_id` from a launch URL, fragment query first.
pub fn user_id_from_url(url: &str) -> Option<UserId> {
    let (before_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };

    if let Some(frag) = fragment {
        if let Some((_, query)) = frag.split_once('?') {
            if let Some(uid) = query_param(query, "user_id") {
                return Some(UserId::from(uid));
            }
        }
    }

    if let Some((_, query)) = before_fragment.split_once('?') {
        if let Some(uid) = query_param(query, "user_id") {
            return Some(UserId::from(uid));
        }
    }

    None
}

/// First usable value for `key` in a raw query string, percent-decoded.
fn query_param(query: &str, key: &str) -> Option<String> {
    for pair in query.split('&') {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k != key {
            continue;
        }
        let decoded = urlencoding::decode(v).map(|c| c.into_owned()).unwrap_or_default();
        let trimmed = decoded.trim();
        if trimmed.is_empty() || trimmed == "null" {
            continue;
        }
        return Some(trimmed.to_string());
    }
    None
}
