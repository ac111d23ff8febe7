//! A layer of abstraction for controlling where the strategies data comes
//! from depending on whether we are running in a test environment or not.

use serde_json::{Map, Value};

#[cfg(test)]
pub mod mock;
pub mod real;

/// A trait for fetching the Curve strategies mapping from the StakeDAO API.
pub(crate) trait Upstream {
    /// Fetch the full strategies mapping, keyed by strategy identifier. The
    /// values are kept untyped since only a handful of fields are read.
    async fn fetch_strategies(&self) -> anyhow::Result<Map<String, Value>>;
}
