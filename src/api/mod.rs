// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote classification service.
//!
//! The service exposes a single route: `POST {base_url}/predict` with a
//! multipart body whose `image` field carries the raw scan bytes, original
//! filename, and content type. A 2xx answer with a JSON body of
//! `{"class": string, "confidence": number}` is a success; everything else
//! collapses into the [`ApiError`] taxonomy and, at the UI level, a single
//! generic failure message.

use crate::domain::classification::PredictResponse;
use crate::domain::ClassificationResult;
use crate::error::ApiError;
use crate::workflow::SelectedScan;
use std::time::Duration;

/// Route appended to the configured base URL.
const PREDICT_ROUTE: &str = "/predict";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("NeuroLens/", env!("CARGO_PKG_VERSION"));

/// Multipart field name the service expects.
const IMAGE_FIELD: &str = "image";

/// Client for the `/predict` endpoint. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct PredictClient {
    base_url: String,
    client: reqwest::Client,
}

impl PredictClient {
    /// Builds a client with explicit redirect policy, user agent, and
    /// request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Full URL of the predict route.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_ROUTE)
    }

    /// Submits a scan for classification.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for request-building problems, transport
    /// failures, non-2xx statuses, and bodies that do not match the
    /// documented shape.
    pub async fn classify(&self, scan: &SelectedScan) -> Result<ClassificationResult, ApiError> {
        let part = reqwest::multipart::Part::bytes(scan.bytes.as_ref().clone())
            .file_name(scan.file_name.clone())
            .mime_str(&scan.mime_type)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(self.predict_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        let raw: PredictResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Contract(e.to_string()))?;

        Ok(raw.into())
    }
}

/// Runs a classification after the configured minimum perceived latency.
/// The delay smooths the loading indicator for near-instant responses; tests
/// pass `Duration::ZERO` to run without it.
pub async fn classify_after_delay(
    client: PredictClient,
    scan: SelectedScan,
    delay: Duration,
) -> Result<ClassificationResult, ApiError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    client.classify(&scan).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PredictClient {
        PredictClient::new(base, Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn predict_url_joins_route() {
        assert_eq!(
            client("https://example.org").predict_url(),
            "https://example.org/predict"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        assert_eq!(
            client("https://example.org/").predict_url(),
            "https://example.org/predict"
        );
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_transport_error() {
        // Reserved TEST-NET-1 address; nothing listens there.
        let client = client("http://192.0.2.1:9");
        let scan = SelectedScan::from_bytes("scan.png", vec![1, 2, 3]);
        let err = client.classify(&scan).await.expect_err("must fail");
        assert!(matches!(
            err,
            ApiError::Transport(_) | ApiError::Request(_)
        ));
    }
}
