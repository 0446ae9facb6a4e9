//! # fairshare-core
//!
//! Foundation crate for the fairshare allocation engine.
//! Defines the pool entity, allocator trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod pool;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FairshareConfig;
pub use errors::{FairshareError, FairshareResult};
pub use pool::ResourcePool;
pub use traits::IAllocator;
