use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::TOTAL_CAPACITY;
use crate::errors::{FairshareError, FairshareResult};

/// One consumer of the shared capacity.
///
/// Configuration fields (`limit`, `weight`, `desired_usage`, `enabled`) are
/// mutated freely by the caller between recalculations. Computed fields
/// (`real_usage`, `guaranteed`, `new_limit`) are owned by the active
/// allocation strategy and fully overwritten on every `recalculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Configured ceiling on allocation, in [0, 100].
    pub limit: f64,
    /// Relative priority when capacity is contested. Zero-weight pools
    /// receive nothing from proportional division.
    pub weight: f64,
    /// Demand. Not bounded above by the capacity — callers may set arbitrary
    /// demand to probe saturation.
    pub desired_usage: f64,
    /// Disabled pools are excluded from allocation and have their computed
    /// fields reset to zero on recalculation.
    pub enabled: bool,
    /// Realized allocation (computed).
    pub real_usage: f64,
    /// Share this pool would receive at full contention, independent of
    /// demand (computed, schedule strategy only).
    pub guaranteed: f64,
    /// Limit re-derived from proportional division of total capacity
    /// (computed, limit strategy only).
    pub new_limit: f64,
}

impl ResourcePool {
    /// Create a pool, validating its configuration.
    ///
    /// Fails with [`FairshareError::InvalidConfiguration`] when `limit` lies
    /// outside [0, 100], or `weight` or `desired_usage` is negative.
    pub fn new(
        limit: f64,
        weight: f64,
        desired_usage: f64,
        enabled: bool,
    ) -> FairshareResult<Self> {
        if !(0.0..=TOTAL_CAPACITY).contains(&limit) {
            return Err(FairshareError::InvalidConfiguration {
                reason: format!("limit {limit} outside [0, {TOTAL_CAPACITY}]"),
            });
        }
        if weight.is_nan() || weight < 0.0 {
            return Err(FairshareError::InvalidConfiguration {
                reason: format!("negative weight {weight}"),
            });
        }
        if desired_usage.is_nan() || desired_usage < 0.0 {
            return Err(FairshareError::InvalidConfiguration {
                reason: format!("negative desired usage {desired_usage}"),
            });
        }
        Ok(Self {
            limit,
            weight,
            desired_usage,
            enabled,
            real_usage: 0.0,
            guaranteed: 0.0,
            new_limit: 0.0,
        })
    }

    /// Effective cap of the realized-usage pass: demand bounded by the
    /// configured limit.
    pub fn usage_cap(&self) -> f64 {
        self.limit.min(self.desired_usage)
    }
}

impl fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "limit: {} new_limit: {} weight: {} real_usage: {} desired_usage: {} guaranteed: {} enabled: {}",
            self.limit,
            self.new_limit,
            self.weight,
            self.real_usage,
            self.desired_usage,
            self.guaranteed,
            self.enabled
        )
    }
}
