use fairshare_core::constants::{CONVERGENCE_EPSILON, TOTAL_CAPACITY};
use fairshare_core::pool::ResourcePool;
use fairshare_core::traits::IAllocator;
use tracing::debug;

/// Iterative water-filling allocator.
///
/// Runs two passes over the pool collection:
/// 1. a guarantee pass distributing the full capacity proportionally by
///    weight, capping each pool at its configured `limit` — the share a pool
///    would receive at full contention, independent of demand;
/// 2. a realized-usage pass with the same structure but the tighter per-pool
///    cap `min(limit, desired_usage)`.
///
/// Capacity freed by a pool saturating against its cap is redistributed among
/// the remaining eligible pools on the next round. Each round either
/// saturates at least one pool or exhausts the remaining capacity, so both
/// passes terminate within one round per pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleWeightStrategy;

impl ScheduleWeightStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl IAllocator for ScheduleWeightStrategy {
    fn name(&self) -> &'static str {
        "ScheduleWeightStrategy"
    }

    fn recalculate(&self, pools: &mut [ResourcePool]) {
        clear_previous_calculations(pools);
        calculate_guarantee(pools);
        calculate_real_usage(pools);
    }

    fn entitlement(&self, pool: &ResourcePool) -> f64 {
        pool.guaranteed
    }
}

fn clear_previous_calculations(pools: &mut [ResourcePool]) {
    for pool in pools.iter_mut() {
        pool.real_usage = 0.0;
        pool.guaranteed = 0.0;
    }
}

/// Guarantee pass: water-filling over `limit`.
fn calculate_guarantee(pools: &mut [ResourcePool]) {
    let mut cpu = TOTAL_CAPACITY;
    let mut delta = TOTAL_CAPACITY;
    let mut rounds = 0u32;

    while cpu > CONVERGENCE_EPSILON && delta > 0.0 {
        let total_weight: f64 = pools
            .iter()
            .filter(|p| p.guaranteed < p.limit && p.enabled)
            .map(|p| p.weight)
            .sum();
        if total_weight <= 0.0 {
            break;
        }

        delta = 0.0;
        for pool in pools.iter_mut() {
            if pool.guaranteed >= pool.limit || !pool.enabled {
                continue;
            }
            let before = pool.guaranteed;
            pool.guaranteed =
                (pool.guaranteed + cpu * pool.weight / total_weight).min(pool.limit);
            delta += pool.guaranteed - before;
        }
        cpu -= delta;
        rounds += 1;
    }

    debug!(rounds, remaining = cpu, "guarantee pass converged");
}

/// Realized-usage pass: water-filling over `min(limit, desired_usage)`.
///
/// Eligible weight is recomputed after every round, not just at the top of
/// the pass: pools drop out as they saturate against the demand cap.
fn calculate_real_usage(pools: &mut [ResourcePool]) {
    let mut cpu = TOTAL_CAPACITY;
    let mut total_weight = eligible_usage_weight(pools);
    let mut rounds = 0u32;

    while cpu > CONVERGENCE_EPSILON && total_weight > CONVERGENCE_EPSILON {
        let mut delta = 0.0;
        for pool in pools.iter_mut() {
            if pool.real_usage >= pool.usage_cap() || !pool.enabled {
                continue;
            }
            let before = pool.real_usage;
            pool.real_usage =
                (pool.real_usage + cpu * pool.weight / total_weight).min(pool.usage_cap());
            delta += pool.real_usage - before;
        }
        cpu -= delta;
        total_weight = eligible_usage_weight(pools);
        rounds += 1;
    }

    debug!(rounds, remaining = cpu, "realized-usage pass converged");
}

fn eligible_usage_weight(pools: &[ResourcePool]) -> f64 {
    pools
        .iter()
        .filter(|p| p.real_usage < p.usage_cap() && p.enabled)
        .map(|p| p.weight)
        .sum()
}
