//! Session sub-client — register identity with the backend.

use crate::client::CoinSimClient;
use crate::error::{SdkError, SessionError};
use crate::session::Session;

/// Sub-client for session operations.
pub struct SessionOps<'a> {
    pub(crate) client: &'a CoinSimClient,
}

impl<'a> SessionOps<'a> {
    /// The session currently attached to this client, if any.
    pub async fn current(&self) -> Option<Session> {
        self.client.session.read().await.clone()
    }

    /// Attach a session and propagate its user id to the HTTP layer.
    pub async fn set(&self, session: Session) {
        self.client
            .http
            .set_user_id(Some(session.user_id.to_string()))
            .await;
        *self.client.session.write().await = Some(session);
    }

    /// Register the attached session with the backend (`POST /set_uid`).
    ///
    /// After this call the backend's cookie session also carries the
    /// identity, so requests stay attributed even if a proxy strips query
    /// parameters.
    pub async fn register(&self) -> Result<(), SdkError> {
        let session = self
            .current()
            .await
            .ok_or(SessionError::NoSession)?;

        self.client
            .http
            .set_uid(session.user_id.as_str())
            .await
            .map_err(|e| SessionError::RegistrationFailed(e.to_string()))?;

        Ok(())
    }

    /// Detach the session; subsequent requests carry no user id.
    pub async fn clear(&self) {
        self.client.http.set_user_id(None).await;
        *self.client.session.write().await = None;
    }
}
