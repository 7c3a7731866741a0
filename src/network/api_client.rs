//! REST client for the rack inventory backend.
//!
//! Every call is a single fail-fast request: no retries, no timeout beyond
//! the browser's own. Non-2xx responses become [`ApiError::Rejected`],
//! carrying the backend's `{"error": "..."}` message when one was sent.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::config::ApiConfig;
use crate::models::{
    Cabinet, CabinetDetail, CabinetPayload, DeleteOutcome, HardwarePayload, HardwareUnit,
    OccupancyRow, StatusCounts,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("HTTP {status}: {}", .server_message.as_deref().unwrap_or("request failed"))]
    Rejected {
        status: u16,
        server_message: Option<String>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-success response, pulling the message out of
    /// an `{"error": "..."}` body when present.
    pub fn rejected(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        ApiError::Rejected { status, server_message }
    }

    /// Message the backend supplied, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the backend's own message when it sent one,
    /// otherwise the caller's operation-specific fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// REST API client; cheap to clone into event handlers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // ---------------- Cabinets ----------------

    pub async fn list_cabinets(&self) -> Result<Vec<Cabinet>, ApiError> {
        let resp = Request::get(&self.config.url("/ormari")).send().await?;
        decode(resp).await
    }

    /// Cabinet together with the hardware mounted in it
    pub async fn get_cabinet(&self, id: u32) -> Result<CabinetDetail, ApiError> {
        let url = self.config.url(&format!("/ormar/{}", id));
        let resp = Request::get(&url).send().await?;
        decode(resp).await
    }

    pub async fn create_cabinet(&self, payload: &CabinetPayload) -> Result<Cabinet, ApiError> {
        let resp = Request::post(&self.config.url("/ormari")).json(payload)?.send().await?;
        decode(resp).await
    }

    pub async fn update_cabinet(&self, id: u32, payload: &CabinetPayload) -> Result<Cabinet, ApiError> {
        let url = self.config.url(&format!("/ormar/{}", id));
        let resp = Request::put(&url).json(payload)?.send().await?;
        decode(resp).await
    }

    /// The backend refuses (409) to delete a cabinet that still holds hardware.
    pub async fn delete_cabinet(&self, id: u32) -> Result<DeleteOutcome, ApiError> {
        let url = self.config.url(&format!("/ormar/{}", id));
        let resp = Request::delete(&url).send().await?;
        decode(resp).await
    }

    // ---------------- Hardware ----------------

    pub async fn list_hardware(&self) -> Result<Vec<HardwareUnit>, ApiError> {
        let resp = Request::get(&self.config.url("/hardver")).send().await?;
        decode(resp).await
    }

    pub async fn get_hardware(&self, id: u32) -> Result<HardwareUnit, ApiError> {
        let url = self.config.url(&format!("/hardver/{}", id));
        let resp = Request::get(&url).send().await?;
        decode(resp).await
    }

    pub async fn create_hardware(&self, payload: &HardwarePayload) -> Result<HardwareUnit, ApiError> {
        let resp = Request::post(&self.config.url("/hardver")).json(payload)?.send().await?;
        decode(resp).await
    }

    pub async fn update_hardware(&self, id: u32, payload: &HardwarePayload) -> Result<HardwareUnit, ApiError> {
        let url = self.config.url(&format!("/hardver/{}", id));
        let resp = Request::put(&url).json(payload)?.send().await?;
        decode(resp).await
    }

    // Only the status matters here; the body is not inspected on success.
    pub async fn delete_hardware(&self, id: u32) -> Result<(), ApiError> {
        let url = self.config.url(&format!("/hardver/{}", id));
        let resp = Request::delete(&url).send().await?;
        ensure_success(resp).await
    }

    // ---------------- Aggregations ----------------

    pub async fn status_counts(&self) -> Result<StatusCounts, ApiError> {
        let resp = Request::get(&self.config.url("/vizualizacije/status")).send().await?;
        decode(resp).await
    }

    pub async fn occupancy(&self) -> Result<Vec<OccupancyRow>, ApiError> {
        let resp = Request::get(&self.config.url("/vizualizacije/popunjenost")).send().await?;
        decode(resp).await
    }
}

async fn ensure_success(resp: Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::rejected(resp.status(), &body))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    if !resp.ok() {
        return Err(ApiError::rejected(resp.status(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
