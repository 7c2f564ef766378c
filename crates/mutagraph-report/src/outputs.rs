//! Output contract: artifact paths and directory creation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Names and locations of every artifact the pipeline produces.
#[derive(Debug, Clone)]
pub struct OutputContract {
    /// Base output directory
    pub base_dir: PathBuf,
}

impl OutputContract {
    /// Create output contract and ensure the directory exists.
    pub fn new(base_dir: &Path) -> Result<Self> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("Failed to create directory: {}", base_dir.display()))?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// 2×2 overview dashboard
    pub fn overview_svg(&self) -> PathBuf {
        self.base_dir.join("ctag_overview.svg")
    }

    /// 2×3 advanced dashboard
    pub fn advanced_svg(&self) -> PathBuf {
        self.base_dir.join("advanced_genomics.svg")
    }

    /// Textual genomic report
    pub fn report_txt(&self) -> PathBuf {
        self.base_dir.join("report.txt")
    }

    /// Machine-readable report
    pub fn summary_json(&self) -> PathBuf {
        self.base_dir.join("summary.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_contract_creates_base_dir() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("results").join("run1");
        let contract = OutputContract::new(&base).unwrap();

        assert!(base.is_dir());
        assert_eq!(contract.overview_svg(), base.join("ctag_overview.svg"));
        assert_eq!(contract.advanced_svg(), base.join("advanced_genomics.svg"));
    }
}
