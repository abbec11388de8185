use std::path::Path;
use std::process::Output;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an unsigned token whose payload carries `claims`.
pub fn unsigned_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

/// Base URL of a mock server, as the CLI expects it.
pub fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Make `/auth/login` accept any credentials and hand out `token`.
pub async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": { "access_token": token }
        })))
        .mount(server)
        .await;
}

/// Run the CLI binary against an isolated data directory.
pub async fn run_cli(args: &[&str], data_dir: &Path, api: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blogadmin"))
        .args(args)
        .env("BLOGADMIN_DATA_DIR", data_dir)
        .env("BLOGADMIN_API_URL", api)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("BLOGADMIN_PASSWORD")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], data_dir: &Path, api: &str) -> String {
    let output = run_cli(args, data_dir, api).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
