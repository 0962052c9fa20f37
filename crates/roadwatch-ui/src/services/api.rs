//! REST client for the detection backend.
//!
//! # Design
//! - One client per app boot, built from [`DashboardConfig`].
//! - Non-2xx responses become [`ApiError::Status`] with the problem detail
//!   when the body carries one.

use crate::core::config::DashboardConfig;
use crate::core::errors::ApiError;
use crate::core::export::failure_message;
use gloo_net::http::{Request, Response};
use roadwatch_api_models::DashboardSnapshot;
use web_sys::AbortSignal;

const DEFAULT_EXPORT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Raw export body plus its declared media type.
#[derive(Clone, Debug)]
pub(crate) struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    snapshot_url: String,
    export_url: String,
}

impl ApiClient {
    pub(crate) fn new(config: &DashboardConfig) -> Self {
        Self {
            snapshot_url: config.snapshot_url(),
            export_url: config.export_url(),
        }
    }

    pub(crate) async fn fetch_snapshot(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<DashboardSnapshot, ApiError> {
        let response = Request::get(&self.snapshot_url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response).await?;
        response
            .json::<DashboardSnapshot>()
            .await
            .map_err(decode_error)
    }

    pub(crate) async fn fetch_export(&self) -> Result<ExportArtifact, ApiError> {
        let response = Request::get(&self.export_url)
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response).await?;
        let content_type = response
            .headers()
            .get("content-type")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_TYPE.to_string());
        let bytes = response.binary().await.map_err(decode_error)?;
        Ok(ExportArtifact {
            bytes,
            content_type,
        })
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.ok();
    Err(ApiError::Status {
        status,
        message: failure_message(&status_text, body.as_deref()),
    })
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network {
        message: err.to_string(),
    }
}

fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode {
        message: err.to_string(),
    }
}
