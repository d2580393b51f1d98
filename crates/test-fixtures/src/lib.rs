//! Test fixture loader for Confluence subsystem analyses, performance
//! snapshots, and config files.
//!
//! Fixtures live under this crate's `data/` directory. Loaders panic on
//! missing or malformed files; they are for tests and benches only.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use confluence_core::models::{PerformanceSnapshot, Subsystem};

/// Names of the bundled subsystem fixtures, in a fixed order.
pub const SUBSYSTEMS: [&str; 3] = ["omega-icp", "thunderbase", "ark-lyra"];

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as a string (TOML configs).
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// One subsystem analysis by name, e.g. `"thunderbase"`. The capability set
/// is left empty so extraction runs against the raw analysis.
pub fn load_subsystem(name: &str) -> Subsystem {
    load_fixture(&format!("subsystems/{name}.json"))
}

/// Every bundled subsystem, in [`SUBSYSTEMS`] order.
pub fn load_subsystems() -> Vec<Subsystem> {
    SUBSYSTEMS.iter().map(|name| load_subsystem(name)).collect()
}

/// A performance snapshot by name: `"healthy"` or `"degraded"`.
pub fn load_snapshot(name: &str) -> PerformanceSnapshot {
    load_fixture(&format!("snapshots/{name}.json"))
}
