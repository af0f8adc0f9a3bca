//! JSON configuration for the demo driver.
use crate::viewer::GridOptions;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn default_tile_size() -> usize {
    100
}

/// Demo driver configuration: one mosaic window per input directory.
#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// Directories whose images are shown, one mosaic each.
    pub inputs: Vec<PathBuf>,
    /// Every loaded image is rescaled to this square size before batching.
    #[serde(default = "default_tile_size")]
    pub tile_size: usize,
    #[serde(default)]
    pub grid: GridOptions,
    /// Key wait per mosaic in milliseconds; absent blocks, 0 polls.
    #[serde(default)]
    pub wait_ms: Option<u64>,
    /// When set, each assembled canvas is also written here as a PNG.
    #[serde(default)]
    pub dump_dir: Option<PathBuf>,
}

/// Read and parse a `DemoConfig` from a JSON file.
pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Resolve the config path from the command line.
pub fn parse_cli(program: &str) -> Result<DemoConfig, String> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    if args.next().is_some() {
        return Err(format!("Usage: {program} <config.json>"));
    }
    load_config(Path::new(&path))
}
