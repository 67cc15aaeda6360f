//! Device position lookup. The terminal has no geolocation permission
//! prompt, so the default locator resolves the machine's public IP via
//! ip-api.com. The trait keeps other sources pluggable.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::error::LocationError;
use crate::model::Coordinates;

const IP_API_URL: &str = "http://ip-api.com/json";

#[async_trait]
pub trait Locator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Approximate position from the machine's public IP address.
#[derive(Debug, Clone)]
pub struct IpLocator {
    http: Client,
    base_url: String,
}

impl IpLocator {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: IP_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Locator for IpLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let res = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| LocationError::Other(e.to_string()))?;

        if !res.status().is_success() {
            return Err(LocationError::Unavailable);
        }

        let body: IpApiResponse = res
            .json()
            .await
            .map_err(|e| LocationError::Other(e.to_string()))?;

        if body.status != "success" {
            tracing::debug!(status = %body.status, "ip geolocation refused");
            return Err(LocationError::Denied);
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => {
                tracing::debug!(lat, lon, "resolved position from ip");
                Ok(Coordinates { lat, lon })
            }
            _ => Err(LocationError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn successful_response_yields_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"status":"success","lat":-6.2146,"lon":106.8451}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let locator = IpLocator::new().with_base_url(server.uri());
        let pos = locator.current_position().await.unwrap();
        assert_eq!(pos.lat, -6.2146);
        assert_eq!(pos.lon, 106.8451);
    }

    #[tokio::test]
    async fn failure_status_maps_to_denied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"status":"fail","message":"private range"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let locator = IpLocator::new().with_base_url(server.uri());
        let err = locator.current_position().await.unwrap_err();
        assert!(matches!(err, LocationError::Denied));
    }

    #[tokio::test]
    async fn missing_coordinates_map_to_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"status":"success"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let locator = IpLocator::new().with_base_url(server.uri());
        let err = locator.current_position().await.unwrap_err();
        assert!(matches!(err, LocationError::Unavailable));
    }

    #[tokio::test]
    async fn http_error_maps_to_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let locator = IpLocator::new().with_base_url(server.uri());
        let err = locator.current_position().await.unwrap_err();
        assert!(matches!(err, LocationError::Unavailable));
    }
}
