//! A CLI tool for fetching Curve yield strategies from the StakeDAO API,
//! filtering the farms deployed on Fraxtal, and saving them to a JSON file
//! and a generated README table.

use chrono::{SecondsFormat, Utc};
use itertools::Itertools;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::*;

pub mod env;
mod render;
pub mod upstream;

use upstream::Upstream;

/// The chain identifier of the Fraxtal network.
pub const FRAXTAL_CHAIN_ID: i64 = 252;

/// The address funds from every Fraxtal farm are deposited into Curve from.
pub const HOLDING_ADDRESS: &str = "0x52f541764e6e90eebc5c21ff570de0e2d63766b6";

/// A Fraxtal farm projected out of a StakeDAO Curve strategy entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Farm {
    pub name: String,
    pub balance_source_address: String,
    pub holding_address: String,
}

/// The document written to the JSON output path.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FarmsDocument {
    pub curve_fraxtal_farms: Vec<Farm>,
    pub last_updated: String,
}

/// Fetch the Curve strategies, filter out the Fraxtal farms, and overwrite
/// the JSON and README output files with the result.
#[allow(private_bounds)]
pub async fn update_farms(
    env: &env::Env,
    upstream: &impl Upstream,
) -> anyhow::Result<()> {
    info!("Fetching Curve strategies data...");
    let strategies = upstream.fetch_strategies().await?;
    debug!("Fetched {} strategy entries", strategies.len());

    info!("Filtering Fraxtal farms...");
    let farms = filter_fraxtal_farms(&strategies);

    let document = FarmsDocument {
        curve_fraxtal_farms: farms,
        last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&env.json_path, json)?;

    let table = render::readme_table(&document.curve_fraxtal_farms);
    std::fs::write(&env.readme_path, table)?;

    info!(
        "Successfully updated {} Fraxtal farms in {} and {}",
        document.curve_fraxtal_farms.len(),
        env.json_path,
        env.readme_path,
    );

    Ok(())
}

/// Select the strategies deployed on Fraxtal that carry a vault address and
/// project them into [`Farm`] records, preserving the order of the source
/// mapping.
pub fn filter_fraxtal_farms(strategies: &Map<String, Value>) -> Vec<Farm> {
    let mut farms = Vec::new();
    let mut chain_ids = BTreeSet::new();

    for (key, strategy) in strategies {
        let chain_id = strategy
            .get("chainId")
            .or_else(|| strategy.get("chain_id"))
            .and_then(Value::as_i64);
        if let Some(chain_id) = chain_id {
            chain_ids.insert(chain_id);
        }

        if chain_id != Some(FRAXTAL_CHAIN_ID) {
            continue;
        }

        let vault = strategy.get("vault").and_then(Value::as_str);
        let Some(vault) = vault.filter(|vault| !vault.is_empty()) else {
            continue;
        };

        let name = strategy
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(key.as_str());

        farms.push(Farm {
            name: name.to_string(),
            balance_source_address: vault.to_string(),
            holding_address: HOLDING_ADDRESS.to_string(),
        });
    }

    info!("Available chain IDs: {}", chain_ids.iter().join(", "));
    farms
}
