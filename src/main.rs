use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    nws_alerts_mcp::infra::logging::init();
    nws_alerts_mcp::cli::run().await
}
