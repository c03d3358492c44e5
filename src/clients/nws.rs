use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AlertCollection, RegionCode};
use crate::infra::config::NwsConfig;
use crate::infra::http::client::make_http_client;
use crate::infra::http::headers::{add_standard_headers, generate_request_id};

/// Why an alerts fetch produced no document. Distinct from an empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http client setup failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream status {0}")]
    Status(u16),
    #[error("malformed alerts body: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type FetchOutcome = Result<AlertCollection, FetchError>;

/// Anything that can produce the alert document for a region.
#[async_trait]
pub trait AlertSource: Send + Sync + 'static {
    async fn fetch_alerts(&self, region: &RegionCode) -> FetchOutcome;
}

#[derive(Debug, Clone)]
pub struct NwsRemote {
    cfg: NwsConfig,
}

impl NwsRemote {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            cfg: NwsConfig::default().with_base_url(base),
        }
    }

    pub fn from_config(cfg: &NwsConfig) -> Self {
        Self { cfg: cfg.clone() }
    }

    pub fn alerts_url(&self, region: &RegionCode) -> String {
        format!("{}/alerts?area={}", self.cfg.base_url.trim_end_matches('/'), region)
    }

    async fn request(&self, url: &str) -> FetchOutcome {
        // One client per call, dropped when the request completes.
        let http = make_http_client(&self.cfg).map_err(FetchError::Client)?;
        let resp = add_standard_headers(http.get(url), &self.cfg.user_agent)
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }
}

#[async_trait]
impl AlertSource for NwsRemote {
    async fn fetch_alerts(&self, region: &RegionCode) -> FetchOutcome {
        let url = self.alerts_url(region);
        let req_id = generate_request_id();
        tracing::debug!(request_id = %req_id, endpoint = %url, "nws.alerts request");
        let start = Instant::now();

        let res = self.request(&url).await;
        match &res {
            Ok(doc) => {
                let elapsed_ms = start.elapsed().as_millis() as f64;
                crate::infra::logging::log_metric("get_alerts", "remote_latency_ms", elapsed_ms);
                tracing::debug!(request_id = %req_id, features = doc.features.len(), "nws.alerts response");
            }
            Err(e) => {
                crate::infra::logging::log_metric("get_alerts", "remote_error_total", 1.0);
                tracing::warn!(request_id = %req_id, region = %region, error = %e, "error fetching NWS data");
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn builds_alerts_url_without_double_slash() {
        let cli = NwsRemote::new("http://nws.test/");
        assert_eq!(cli.alerts_url(&RegionCode::normalize("ca")), "http://nws.test/alerts?area=CA");
    }

    #[tokio::test]
    async fn it_gets_alerts_with_standard_headers() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/alerts")
                .query_param("area", "NY")
                .header("user-agent", "weather-app/1.0")
                .header("accept", "application/geo+json");
            then.status(200)
                .header("content-type", "application/geo+json")
                .json_body(json!({
                    "type": "FeatureCollection",
                    "features": [{ "properties": { "event": "Flood Warning", "areaDesc": "Queens" } }]
                }));
        });

        let cli = NwsRemote::new(server.base_url());
        let doc = cli.fetch_alerts(&RegionCode::normalize("ny")).await.unwrap();
        m.assert();
        assert_eq!(doc.features.len(), 1);
        assert_eq!(doc.features[0].properties.event, Some(json!("Flood Warning")));
    }

    #[tokio::test]
    async fn lower_and_upper_case_send_the_same_request() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/alerts")
                .query_param("area", "CA")
                .header("user-agent", "weather-app/1.0")
                .header("accept", "application/geo+json");
            then.status(200).json_body(json!({ "features": [] }));
        });

        let cli = NwsRemote::new(server.base_url());
        for raw in ["ca", "CA"] {
            let doc = cli.fetch_alerts(&RegionCode::normalize(raw)).await.unwrap();
            assert!(doc.features.is_empty());
        }
        m.assert_hits(2);
    }

    #[tokio::test]
    async fn it_uses_configured_user_agent() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/alerts").header("user-agent", "ops-check/3");
            then.status(200).json_body(json!({ "features": [] }));
        });
        let cfg = NwsConfig {
            user_agent: "ops-check/3".into(),
            ..NwsConfig::default().with_base_url(server.base_url())
        };
        let cli = NwsRemote::from_config(&cfg);
        assert!(cli.fetch_alerts(&RegionCode::normalize("tx")).await.is_ok());
        m.assert();
    }

    #[tokio::test]
    async fn it_returns_upstream_status_on_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/alerts");
            then.status(503).body("unavailable");
        });
        let cli = NwsRemote::new(server.base_url());
        let err = cli.fetch_alerts(&RegionCode::normalize("CA")).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
        assert!(err.to_string().contains("upstream status"));
    }

    #[tokio::test]
    async fn it_does_not_retry() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path("/alerts");
            then.status(500).body("err");
        });
        let cli = NwsRemote::new(server.base_url());
        assert!(cli.fetch_alerts(&RegionCode::normalize("CA")).await.is_err());
        m.assert_hits(1);
    }

    #[tokio::test]
    async fn it_reports_malformed_body_as_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/alerts");
            then.status(200).body("<html>not json</html>");
        });
        let cli = NwsRemote::new(server.base_url());
        let err = cli.fetch_alerts(&RegionCode::normalize("CA")).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn it_reports_connection_failure_as_transport_error() {
        let cli = NwsRemote::new("http://127.0.0.1:9");
        let err = cli.fetch_alerts(&RegionCode::normalize("CA")).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
