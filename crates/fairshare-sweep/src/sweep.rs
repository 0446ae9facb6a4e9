use fairshare_core::constants::SWEEP_MAX_DEMAND;
use fairshare_core::errors::{FairshareError, FairshareResult};
use fairshare_core::pool::ResourcePool;
use fairshare_core::traits::IAllocator;

use crate::sample::SweepSample;

/// Lazy demand sweep over one target pool.
///
/// Yields one [`SweepSample`] per integer demand value 0..=100. Each step
/// mutates the target pool's `desired_usage` and recalculates the whole
/// collection, so the sweep is a side-effecting, non-restartable iterator:
/// after a full drain the target pool's demand is left at 100. Callers
/// needing the original state must snapshot and restore it themselves.
pub struct DemandSweep<'a> {
    allocator: &'a dyn IAllocator,
    pools: &'a mut [ResourcePool],
    target: usize,
    next_demand: u32,
}

impl std::fmt::Debug for DemandSweep<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemandSweep")
            .field("allocator", &self.allocator.name())
            .field("target", &self.target)
            .field("next_demand", &self.next_demand)
            .finish()
    }
}

impl<'a> DemandSweep<'a> {
    /// Start a sweep of `pools[target]` under the given allocator.
    ///
    /// Fails with [`FairshareError::InvalidIndex`] when `target` is out of
    /// bounds.
    pub fn new(
        allocator: &'a dyn IAllocator,
        pools: &'a mut [ResourcePool],
        target: usize,
    ) -> FairshareResult<Self> {
        if target >= pools.len() {
            return Err(FairshareError::InvalidIndex {
                index: target,
                len: pools.len(),
            });
        }
        Ok(Self {
            allocator,
            pools,
            target,
            next_demand: 0,
        })
    }

    /// Index of the swept pool.
    pub fn target(&self) -> usize {
        self.target
    }
}

impl Iterator for DemandSweep<'_> {
    type Item = SweepSample;

    fn next(&mut self) -> Option<SweepSample> {
        if self.next_demand > SWEEP_MAX_DEMAND {
            return None;
        }
        let demand = f64::from(self.next_demand);
        self.next_demand += 1;

        self.pools[self.target].desired_usage = demand;
        self.allocator.recalculate(self.pools);

        let mut total_desired = 0.0;
        let mut total_real = 0.0;
        for pool in self.pools.iter().filter(|p| p.enabled) {
            total_desired += pool.desired_usage;
            total_real += pool.real_usage;
        }

        let pool = &self.pools[self.target];
        Some(SweepSample {
            desired_usage: demand,
            real_usage: pool.real_usage,
            entitlement: self.allocator.entitlement(pool),
            limit: pool.limit,
            total_desired_usage: total_desired,
            total_real_usage: total_real,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (SWEEP_MAX_DEMAND + 1).saturating_sub(self.next_demand) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DemandSweep<'_> {}
