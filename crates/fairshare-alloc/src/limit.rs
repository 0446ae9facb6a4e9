use fairshare_core::constants::TOTAL_CAPACITY;
use fairshare_core::pool::ResourcePool;
use fairshare_core::traits::IAllocator;

/// Single-pass proportional-limit allocator.
///
/// Re-derives each demanding pool's limit from its weight share of the total
/// capacity, then realizes usage capped by that new limit. Non-iterative:
/// spare capacity left by an under-demanding pool is NOT redistributed to the
/// others — the key behavioral contrast with [`crate::ScheduleWeightStrategy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LimitWeightStrategy;

impl LimitWeightStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl IAllocator for LimitWeightStrategy {
    fn name(&self) -> &'static str {
        "LimitWeightStrategy"
    }

    fn recalculate(&self, pools: &mut [ResourcePool]) {
        clear_previous_calculations(pools);
        calculate_new_limit(pools);
        calculate_real_usage(pools);
    }

    fn entitlement(&self, pool: &ResourcePool) -> f64 {
        pool.new_limit
    }
}

fn clear_previous_calculations(pools: &mut [ResourcePool]) {
    for pool in pools.iter_mut() {
        pool.real_usage = 0.0;
        pool.guaranteed = 0.0;
        pool.new_limit = 0.0;
    }
}

fn calculate_new_limit(pools: &mut [ResourcePool]) {
    let total_weight: f64 = pools
        .iter()
        .filter(|p| p.desired_usage > 0.0 && p.enabled)
        .map(|p| p.weight)
        .sum();
    if total_weight <= 0.0 {
        // Nothing demands: every new_limit stays 0.
        return;
    }

    for pool in pools.iter_mut() {
        if pool.desired_usage <= 0.0 || !pool.enabled {
            continue;
        }
        pool.new_limit = pool
            .limit
            .min(TOTAL_CAPACITY * pool.weight / total_weight);
    }
}

fn calculate_real_usage(pools: &mut [ResourcePool]) {
    for pool in pools.iter_mut() {
        if pool.desired_usage <= 0.0 || !pool.enabled {
            continue;
        }
        pool.real_usage = pool.desired_usage.min(pool.new_limit);
    }
}
