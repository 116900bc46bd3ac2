//! Client for the airspace snapshot service.

use airspace_core::{Anomaly, FlightState, Snapshot, UpdateFlightsResponse};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {detail}")]
    Server { status: StatusCode, detail: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for one airspace server.
#[derive(Debug, Clone)]
pub struct AirspaceClient {
    base_url: Url,
    client: reqwest::Client,
}

impl AirspaceClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// List flights, optionally within a named region. `None` limits use
    /// the server default.
    pub async fn list_flights(
        &self,
        region: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<FlightState>> {
        let mut params = Vec::new();
        if let Some(region) = region {
            params.push(("region", region.to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get_json(self.endpoint("flights/list", &params)?).await
    }

    /// Look up one flight by callsign or ICAO24. A 404 is `Ok(None)`.
    pub async fn get_flight(&self, identifier: &str) -> Result<Option<FlightState>> {
        let url = self.endpoint("flights/get", &[("callsign", identifier.to_string())])?;
        match self.get_json(url).await {
            Ok(flight) => Ok(Some(flight)),
            Err(ClientError::Server { status, .. }) if status == StatusCode::NOT_FOUND => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// List anomaly findings in the server's scan order.
    pub async fn list_alerts(&self, limit: Option<usize>) -> Result<Vec<Anomaly>> {
        let params: Vec<_> = limit.map(|l| ("limit", l.to_string())).into_iter().collect();
        self.get_json(self.endpoint("alerts/list", &params)?).await
    }

    /// Replace the server's live snapshot.
    pub async fn update_flights(&self, snapshot: &Snapshot) -> Result<UpdateFlightsResponse> {
        let url = self.endpoint("update-flights", &[])?;
        tracing::debug!("Pushing {} flights to {}", snapshot.len(), url);
        let response = self.client.post(url).json(snapshot).send().await?;
        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.detail)
        .unwrap_or(text);
    Err(ClientError::Server { status, detail })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_query() {
        let client = AirspaceClient::new("http://localhost:8000/").unwrap();
        let url = client
            .endpoint(
                "flights/list",
                &[("region", "Region A".to_string()), ("limit", "3".to_string())],
            )
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/flights/list?region=Region+A&limit=3");
    }

    #[test]
    fn test_endpoint_without_params_has_no_query() {
        let client = AirspaceClient::new("http://localhost:8000").unwrap();
        let url = client.endpoint("update-flights", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/update-flights");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            AirspaceClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let client = AirspaceClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(client.list_alerts(None).await, Err(ClientError::Http(_))));
    }
}
