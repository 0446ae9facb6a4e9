use fairshare_alloc::{LimitWeightStrategy, ScheduleWeightStrategy};
use fairshare_core::constants::{CONVERGENCE_EPSILON, TOTAL_CAPACITY};
use fairshare_core::{IAllocator, ResourcePool};
use proptest::prelude::*;

fn arb_pool() -> impl Strategy<Value = ResourcePool> {
    (
        0.0f64..=100.0,
        0.0f64..=500.0,
        0.0f64..=200.0,
        any::<bool>(),
    )
        .prop_map(|(limit, weight, desired, enabled)| {
            ResourcePool::new(limit, weight, desired, enabled).unwrap()
        })
}

fn arb_pools() -> impl Strategy<Value = Vec<ResourcePool>> {
    prop::collection::vec(arb_pool(), 1..8)
}

// ── Capacity conservation ────────────────────────────────────────────────

proptest! {
    #[test]
    fn schedule_conserves_capacity(mut pools in arb_pools()) {
        ScheduleWeightStrategy::new().recalculate(&mut pools);
        let total: f64 = pools.iter().filter(|p| p.enabled).map(|p| p.real_usage).sum();
        prop_assert!(
            total <= TOTAL_CAPACITY + CONVERGENCE_EPSILON,
            "total {} over capacity", total
        );
    }

    #[test]
    fn limit_conserves_capacity(mut pools in arb_pools()) {
        LimitWeightStrategy::new().recalculate(&mut pools);
        let total: f64 = pools.iter().filter(|p| p.enabled).map(|p| p.real_usage).sum();
        prop_assert!(
            total <= TOTAL_CAPACITY + CONVERGENCE_EPSILON,
            "total {} over capacity", total
        );
    }
}

// ── Per-pool output bounds ───────────────────────────────────────────────

proptest! {
    #[test]
    fn schedule_bounds_usage_by_limit_and_demand(mut pools in arb_pools()) {
        ScheduleWeightStrategy::new().recalculate(&mut pools);
        for p in &pools {
            prop_assert!(p.real_usage >= 0.0);
            prop_assert!(
                p.real_usage <= p.usage_cap() + f64::EPSILON,
                "usage {} over cap {}", p.real_usage, p.usage_cap()
            );
            prop_assert!(p.guaranteed >= 0.0);
            prop_assert!(p.guaranteed <= p.limit + f64::EPSILON);
        }
    }

    #[test]
    fn limit_bounds_usage_by_demand_and_new_limit(mut pools in arb_pools()) {
        LimitWeightStrategy::new().recalculate(&mut pools);
        for p in &pools {
            prop_assert!(p.real_usage >= 0.0);
            prop_assert!(p.real_usage <= p.desired_usage.min(p.new_limit) + f64::EPSILON);
            prop_assert!(p.new_limit <= p.limit + f64::EPSILON);
        }
    }
}

// ── Exclusion rules ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn disabled_and_weightless_pools_get_nothing(mut pools in arb_pools()) {
        for strategy in [
            &ScheduleWeightStrategy::new() as &dyn IAllocator,
            &LimitWeightStrategy::new() as &dyn IAllocator,
        ] {
            strategy.recalculate(&mut pools);
            for p in &pools {
                if !p.enabled || p.weight == 0.0 {
                    prop_assert_eq!(p.real_usage, 0.0);
                    prop_assert_eq!(strategy.entitlement(p), 0.0);
                }
            }
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn schedule_is_idempotent(mut pools in arb_pools()) {
        let strategy = ScheduleWeightStrategy::new();
        strategy.recalculate(&mut pools);
        let first = pools.clone();
        strategy.recalculate(&mut pools);
        prop_assert_eq!(&pools, &first);
    }

    #[test]
    fn limit_is_idempotent(mut pools in arb_pools()) {
        let strategy = LimitWeightStrategy::new();
        strategy.recalculate(&mut pools);
        let first = pools.clone();
        strategy.recalculate(&mut pools);
        prop_assert_eq!(&pools, &first);
    }
}
