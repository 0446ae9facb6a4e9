//! # fairshare-sweep
//!
//! Demand sweep over a target pool: drive its `desired_usage` through
//! 0..=100, recalculating after every step, and record the series a chart
//! renderer plots — realized usage, the strategy's entitlement (guarantee or
//! re-derived limit), the configured limit, and the aggregate realized usage
//! across enabled pools.

pub mod sample;
pub mod sweep;

pub use sample::{SweepSample, SweepSeries};
pub use sweep::DemandSweep;
