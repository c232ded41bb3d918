//! Asynchronous synchronization client.
//!
//! Request/response with a fixed timeout, no retry, no cancellation. Every
//! failure class — transport error, timeout, malformed payload,
//! server-reported error — is surfaced exactly once through the
//! [`AlertSink`] and returned to the caller; the caller decides whether to
//! keep or discard any optimistic local change (favorites/recent keep it).

use std::time::Duration;

use async_trait::async_trait;
use mosaic_api::{
    Ack, Element, ElementId, ElementsPayload, IdListPayload, PageState, PersistTarget,
    ResponseState, SyncRequest,
};
use serde::de::DeserializeOwned;

use crate::SyncError;

/// Carries one request to the server and returns the raw JSON response.
///
/// Implementations own the actual wire (the legacy endpoint takes the
/// [`SyncRequest::query`] parameters and, for persist, a POST body).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(&self, request: &SyncRequest) -> Result<serde_json::Value, SyncError>;
}

/// Receives user-visible error messages. The host UI shows them as a
/// blocking alert; tests record them.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// The synchronization client: transport + timeout + error surfacing.
pub struct SyncClient {
    transport: Box<dyn Transport>,
    alerts: Box<dyn AlertSink>,
    timeout: Duration,
}

impl SyncClient {
    pub fn new(
        transport: Box<dyn Transport>,
        alerts: Box<dyn AlertSink>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            alerts,
            timeout,
        }
    }

    /// Fetch the complete state of one page.
    pub async fn load_all(&self, page: &str) -> Result<PageState, SyncError> {
        self.exchange(&SyncRequest::LoadAll {
            page: page.to_string(),
        })
        .await
    }

    /// Fetch a single element (the lazy reload / property-edit path).
    pub async fn load_one(&self, id: &ElementId) -> Result<Element, SyncError> {
        let payload: ElementsPayload = self
            .exchange(&SyncRequest::LoadOne { elem: id.clone() })
            .await?;
        match payload.elements.into_iter().find(|(key, _)| key == id) {
            Some((_, element)) => Ok(element),
            // The contract keys the map by the requested id; anything else
            // is a malformed response.
            None => Err(self.fail(SyncError::Malformed(format!(
                "element {id} missing from load-one response"
            )))),
        }
    }

    pub async fn load_favorites(&self) -> Result<Vec<ElementId>, SyncError> {
        let payload: IdListPayload = self.exchange(&SyncRequest::LoadFavorites).await?;
        Ok(payload.ids)
    }

    pub async fn load_recent(&self) -> Result<Vec<ElementId>, SyncError> {
        let payload: IdListPayload = self.exchange(&SyncRequest::LoadRecent).await?;
        Ok(payload.ids)
    }

    /// Write one aggregate's current value.
    pub async fn persist(
        &self,
        target: PersistTarget,
        body: serde_json::Value,
    ) -> Result<(), SyncError> {
        let _ack: Ack = self.exchange(&SyncRequest::Persist { target, body }).await?;
        tracing::debug!(target = target.as_str(), "aggregate persisted");
        Ok(())
    }

    /// One round trip: transport, timeout, envelope check, payload parse.
    /// Every failure path is alerted exactly once here.
    async fn exchange<T: DeserializeOwned>(&self, request: &SyncRequest) -> Result<T, SyncError> {
        let raw = match tokio::time::timeout(self.timeout, self.transport.exchange(request)).await
        {
            Err(_) => return Err(self.fail(SyncError::Timeout)),
            Ok(Err(err)) => return Err(self.fail(err)),
            Ok(Ok(raw)) => raw,
        };

        let envelope: Ack = match serde_json::from_value(raw.clone()) {
            Ok(envelope) => envelope,
            Err(err) => return Err(self.fail(SyncError::Malformed(err.to_string()))),
        };
        if envelope.state == ResponseState::Error {
            let message = envelope
                .error
                .unwrap_or_else(|| "unspecified server error".to_string());
            return Err(self.fail(SyncError::Server(message)));
        }

        match serde_json::from_value(raw) {
            Ok(value) => Ok(value),
            Err(err) => Err(self.fail(SyncError::Malformed(err.to_string()))),
        }
    }

    fn fail(&self, err: SyncError) -> SyncError {
        tracing::warn!("sync request failed: {err}");
        self.alerts.alert(&err.to_string());
        err
    }
}
