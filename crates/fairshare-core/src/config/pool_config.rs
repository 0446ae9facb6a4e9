use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{FairshareError, FairshareResult};
use crate::pool::ResourcePool;

/// Declarative configuration for one resource pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Configured ceiling on allocation, in [0, 100].
    pub limit: f64,
    /// Relative priority when capacity is contested.
    pub weight: f64,
    /// Initial demand.
    pub desired_usage: f64,
    /// Whether the pool participates in allocation.
    pub enabled: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            limit: defaults::DEFAULT_LIMIT,
            weight: defaults::DEFAULT_WEIGHT,
            desired_usage: defaults::DEFAULT_DESIRED_USAGE,
            enabled: defaults::DEFAULT_ENABLED,
        }
    }
}

/// The initialization-time pool set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FairshareConfig {
    /// Ordered pool configurations; order is preserved into the pool
    /// collection, so indices are stable.
    pub pools: Vec<PoolConfig>,
}

impl FairshareConfig {
    /// Parse a TOML document into a config.
    pub fn from_toml_str(input: &str) -> FairshareResult<Self> {
        toml::from_str(input).map_err(|e| FairshareError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Build the pool collection, validating every entry.
    pub fn build_pools(&self) -> FairshareResult<Vec<ResourcePool>> {
        self.pools
            .iter()
            .map(|p| ResourcePool::new(p.limit, p.weight, p.desired_usage, p.enabled))
            .collect()
    }
}
