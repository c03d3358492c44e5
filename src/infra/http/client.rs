use crate::infra::config::NwsConfig;

/// Build a fresh reqwest client for one upstream call. A timeout is only set when
/// the operator configured one.
pub fn make_http_client(cfg: &NwsConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = cfg.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
