use serde::{Deserialize, Serialize};

use fairshare_core::constants::SWEEP_SAMPLES;
use fairshare_core::errors::FairshareResult;
use fairshare_core::pool::ResourcePool;
use fairshare_core::traits::IAllocator;

use crate::sweep::DemandSweep;

/// One step of a demand sweep.
///
/// The per-pool fields describe the target pool; the `total_*` fields
/// aggregate over all enabled pools (the original "overall" chart).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// The swept demand value (x axis).
    pub desired_usage: f64,
    /// Target pool's realized usage.
    pub real_usage: f64,
    /// Target pool's guarantee (schedule strategy) or re-derived limit
    /// (limit strategy).
    pub entitlement: f64,
    /// Target pool's configured limit.
    pub limit: f64,
    /// Sum of demand over enabled pools.
    pub total_desired_usage: f64,
    /// Sum of realized usage over enabled pools.
    pub total_real_usage: f64,
}

/// A completed sweep: the chart-ready series for one strategy and one target
/// pool, serializable for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSeries {
    /// Strategy label, used as the chart title.
    pub strategy: String,
    /// Index of the swept pool.
    pub target: usize,
    /// 101 samples, one per integer demand value 0..=100.
    pub samples: Vec<SweepSample>,
}

impl SweepSeries {
    /// Run a full sweep to completion.
    ///
    /// Same side-effect contract as [`DemandSweep`]: the target pool's
    /// demand is left at 100.
    pub fn capture(
        allocator: &dyn IAllocator,
        pools: &mut [ResourcePool],
        target: usize,
    ) -> FairshareResult<Self> {
        let samples: Vec<SweepSample> = DemandSweep::new(allocator, pools, target)?.collect();
        debug_assert_eq!(samples.len(), SWEEP_SAMPLES);
        Ok(Self {
            strategy: allocator.name().to_string(),
            target,
            samples,
        })
    }

    /// The realized-usage series (y values).
    pub fn real_usage(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.real_usage)
    }

    /// The entitlement series: guarantee or re-derived limit per step.
    pub fn entitlement(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.entitlement)
    }

    /// The aggregate realized-usage series over enabled pools.
    pub fn total_real_usage(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.total_real_usage)
    }
}
