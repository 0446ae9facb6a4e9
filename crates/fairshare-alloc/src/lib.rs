//! # fairshare-alloc
//!
//! The two weighted fair-share allocation policies over a shared pool
//! collection: iterative water-filling ([`ScheduleWeightStrategy`]) and
//! single-pass proportional limit re-derivation ([`LimitWeightStrategy`]).
//!
//! Both implement [`fairshare_core::IAllocator`] and overwrite every pool's
//! computed fields in place on each `recalculate`.

pub mod limit;
pub mod schedule;

pub use limit::LimitWeightStrategy;
pub use schedule::ScheduleWeightStrategy;
