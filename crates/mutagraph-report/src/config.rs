//! Configuration structures for the report pipeline.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Explicit color palette passed into every builder - never a process-wide
/// singleton. Colors are hex strings carried through the chart specs and
/// parsed only at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Per-nucleotide cell colors for the sequence track
    pub base_a: String,
    pub base_t: String,
    pub base_c: String,
    pub base_g: String,
    /// Highlight color for BRCA-family genes
    pub highlight: String,
    /// Default bar/marker color
    pub primary: String,
    /// Categorical cycle for pies, grouped bars, pathway bars
    pub categorical: Vec<String>,
    /// Network edge color
    pub edge: String,
    /// Mutation marker glyph color
    pub marker: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base_a: "#FF6B6B".to_string(),
            base_t: "#4ECDC4".to_string(),
            base_c: "#45B7D1".to_string(),
            base_g: "#F9A602".to_string(),
            highlight: "#FF6B6B".to_string(),
            primary: "#45B7D1".to_string(),
            categorical: [
                "#FF6B6B", "#4ECDC4", "#45B7D1", "#F9A602", "#6A0572", "#2A9D8F",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            edge: "#808080".to_string(),
            marker: "#CC0000".to_string(),
        }
    }
}

impl Palette {
    /// Cell color for a nucleotide symbol.
    pub fn nucleotide(&self, base: char) -> &str {
        match base {
            'A' => &self.base_a,
            'T' => &self.base_t,
            'C' => &self.base_c,
            _ => &self.base_g,
        }
    }

    /// Categorical color for index `i`, cycling.
    pub fn cycle(&self, i: usize) -> &str {
        &self.categorical[i % self.categorical.len()]
    }
}

/// Main report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output directory for all artifacts
    pub output_dir: PathBuf,

    /// Overview dashboard dimensions (pixels)
    pub overview_size: (u32, u32),

    /// Advanced dashboard dimensions (pixels)
    pub advanced_size: (u32, u32),

    /// Seed for the heatmap's illustrative noise cells. When `None` the
    /// noise is seeded from OS entropy, matching the source behavior; every
    /// other panel stays deterministic either way.
    pub heatmap_seed: Option<u64>,

    /// Color palette
    pub palette: Palette,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("results"),
            overview_size: (1600, 1200),
            advanced_size: (1800, 1200),
            heatmap_seed: None,
            palette: Palette::default(),
        }
    }
}

impl ReportConfig {
    /// Save config snapshot to JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load config from JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_nucleotide_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.nucleotide('A'), "#FF6B6B");
        assert_eq!(palette.nucleotide('G'), "#F9A602");
    }

    #[test]
    fn test_palette_cycle_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.cycle(0), palette.cycle(6));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        let config = ReportConfig {
            heatmap_seed: Some(42),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = ReportConfig::load(&path).unwrap();
        assert_eq!(loaded.heatmap_seed, Some(42));
        assert_eq!(loaded.palette, config.palette);
    }
}
