/// Fairshare system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Total shareable capacity per recalculation, as a percentage of one core.
pub const TOTAL_CAPACITY: f64 = 100.0;

/// Convergence guard for the water-filling loops: a round that moves less
/// than this, or leaves less than this undistributed, terminates the pass.
pub const CONVERGENCE_EPSILON: f64 = 0.01;

/// Upper bound of the demand sweep domain (inclusive).
pub const SWEEP_MAX_DEMAND: u32 = 100;

/// Number of samples produced by a full demand sweep (0..=100 inclusive).
pub const SWEEP_SAMPLES: usize = SWEEP_MAX_DEMAND as usize + 1;
