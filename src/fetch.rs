use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

/// Location of the published scripting-API manual.
pub const API_URL: &str = "https://teardowngame.com/modding/api.html";

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;

/// Fetch the manual, retrying rate limits and server errors with
/// exponential backoff. Anything else fails the run.
pub async fn fetch_document(url: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let mut attempt = 0;
    loop {
        info!("Fetching {}", url);
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .context("failed to read document body");
        }

        let retryable = status.as_u16() == 429 || status.is_server_error();
        if !retryable || attempt == MAX_RETRIES {
            bail!("fetch of {} failed with status {}", url, status);
        }

        let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
        warn!(
            "Got {} (attempt {}/{}), backing off {:.1}s",
            status,
            attempt + 1,
            MAX_RETRIES,
            backoff.as_secs_f64()
        );
        tokio::time::sleep(backoff).await;
        attempt += 1;
    }
}
