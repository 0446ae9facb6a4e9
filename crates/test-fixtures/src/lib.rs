//! Shared test fixtures for the fairshare workspace: canonical pool sets and
//! a TOML fixture loader used by tests and benches across crates.

use std::path::PathBuf;

use fairshare_core::{FairshareConfig, ResourcePool};

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load a TOML fixture file into a [`FairshareConfig`].
///
/// # Panics
/// Panics if the file doesn't exist or can't be parsed.
pub fn load_config(relative_path: &str) -> FairshareConfig {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    FairshareConfig::from_toml_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Shorthand pool builder for tests.
pub fn pool(limit: f64, weight: f64, desired_usage: f64, enabled: bool) -> ResourcePool {
    ResourcePool::new(limit, weight, desired_usage, enabled)
        .unwrap_or_else(|e| panic!("invalid fixture pool: {e}"))
}

/// The canonical five-pool scenario: two enabled pools (one barely demanding,
/// one saturating) and three disabled heavyweight pools.
pub fn default_pools() -> Vec<ResourcePool> {
    load_config("fixtures/default_pools.toml")
        .build_pools()
        .expect("default_pools fixture must validate")
}
