use serde_json::{Map, Value};
use tracing::*;

use super::Upstream;

/// The live StakeDAO strategies endpoint.
pub struct StakeDaoApi {
    url: String,
}

impl StakeDaoApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Upstream for StakeDaoApi {
    async fn fetch_strategies(&self) -> anyhow::Result<Map<String, Value>> {
        debug!("GET {}", self.url);
        let strategies = reqwest::get(&self.url).await?.json().await?;
        Ok(strategies)
    }
}
