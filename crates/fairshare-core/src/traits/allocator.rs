use crate::pool::ResourcePool;

/// Weighted fair-share allocation policy over a shared pool collection.
///
/// Both strategies operate on the same borrowed collection: they read the
/// configuration fields and overwrite every pool's computed fields in place.
/// A call either fully completes or is never entered — configuration is
/// validated at pool construction, so `recalculate` cannot fail mid-flight.
pub trait IAllocator: Send + Sync {
    /// Strategy label, used for chart titles and log fields.
    fn name(&self) -> &'static str;

    /// Recompute every pool's outputs from its current configuration.
    /// Idempotent: unchanged inputs yield identical outputs.
    fn recalculate(&self, pools: &mut [ResourcePool]);

    /// The strategy-specific entitlement series for a pool: the guaranteed
    /// share under the schedule policy, the re-derived limit under the limit
    /// policy.
    fn entitlement(&self, pool: &ResourcePool) -> f64;
}
