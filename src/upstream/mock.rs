//! A mock implementation of the [`Upstream`] trait that serves a fixed
//! in-memory strategies mapping for deterministic testing.

use serde_json::{Map, Value};

use super::Upstream;

pub(crate) struct MockApi {
    strategies: Map<String, Value>,
}

impl MockApi {
    /// Create a new [`MockApi`] serving the given strategies mapping.
    pub(crate) fn new(strategies: Map<String, Value>) -> Self {
        Self { strategies }
    }
}

impl Upstream for MockApi {
    async fn fetch_strategies(&self) -> anyhow::Result<Map<String, Value>> {
        Ok(self.strategies.clone())
    }
}
