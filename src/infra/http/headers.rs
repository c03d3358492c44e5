use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::RequestBuilder;

pub const GEO_JSON: &str = "application/geo+json";

/// Generate a simple request id suitable for log correlation. Never sent upstream.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("wx-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Headers every NWS request carries: a client identifier and the GeoJSON accept type.
pub fn add_standard_headers(builder: RequestBuilder, user_agent: &str) -> RequestBuilder {
    builder
        .header(USER_AGENT, user_agent)
        .header(ACCEPT, GEO_JSON)
}
