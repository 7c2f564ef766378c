//! Dashboard composition: fixed grid layouts over pre-built panels.
//!
//! Composing is pure placement plus export - no panel is recomputed or
//! reordered here. Export is the pipeline's only filesystem side effect;
//! a write failure surfaces as `Export` with the failing path and is never
//! retried.

use crate::chart::ChartSpec;
use crate::config::ReportConfig;
use crate::figures;
use crate::outputs::OutputContract;
use mutagraph_core::MutagraphError;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};

/// Arranges panel outputs into the two fixed dashboard layouts and exports
/// each to an SVG artifact.
pub struct DashboardComposer<'a> {
    config: &'a ReportConfig,
}

impl<'a> DashboardComposer<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Export the 2×2 overview dashboard (frequency bars, type pie,
    /// sequence track, clinical impact).
    pub fn export_overview(
        &self,
        output: &OutputContract,
        panels: &[ChartSpec],
    ) -> Result<PathBuf, MutagraphError> {
        self.export_grid(
            &output.overview_svg(),
            self.config.overview_size,
            (2, 2),
            panels,
            "Breast Cancer Genomic Analysis - CTAG Diagram",
        )
    }

    /// Export the 2×3 advanced dashboard (heatmap, distribution, network,
    /// signatures, pathways, spectrum).
    pub fn export_advanced(
        &self,
        output: &OutputContract,
        panels: &[ChartSpec],
    ) -> Result<PathBuf, MutagraphError> {
        self.export_grid(
            &output.advanced_svg(),
            self.config.advanced_size,
            (2, 3),
            panels,
            "Advanced Genomic Analysis - Breast Cancer",
        )
    }

    /// Place `panels` into a `rows × cols` grid, in the given order, and
    /// write the composed figure to `path`.
    pub fn export_grid(
        &self,
        path: &Path,
        size: (u32, u32),
        (rows, cols): (usize, usize),
        panels: &[ChartSpec],
        suptitle: &str,
    ) -> Result<PathBuf, MutagraphError> {
        if panels.len() != rows * cols {
            return Err(MutagraphError::validation(format!(
                "{suptitle}: expected {} panels for a {rows}x{cols} grid, got {}",
                rows * cols,
                panels.len()
            )));
        }

        // The backend owns the file handle; it is flushed and released by
        // present() on success and dropped on every error path.
        let root = SVGBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| MutagraphError::export(path, e.to_string()))?;

        let body = root
            .titled(suptitle, ("sans-serif", 26))
            .map_err(|e| MutagraphError::export(path, e.to_string()))?;

        let cells = body.split_evenly((rows, cols));
        for (cell, spec) in cells.iter().zip(panels) {
            figures::draw_chart(cell, spec)
                .map_err(|e| MutagraphError::export(path, e.to_string()))?;
        }

        root.present()
            .map_err(|e| MutagraphError::export(path, e.to_string()))?;
        Ok(path.to_path_buf())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crate::panels;
    use mutagraph_core::MutationDataset;
    use tempfile::TempDir;

    fn overview_panels() -> Vec<ChartSpec> {
        let palette = Palette::default();
        let ds = MutationDataset::builtin().unwrap();
        let refs = mutagraph_core::ReferenceStructures::builtin().unwrap();
        vec![
            panels::frequency_bars(&ds, &palette),
            panels::mutation_type_pie(&ds, &palette),
            panels::sequence_track(&refs.sequence, &palette),
            panels::clinical_impact_bars(&ds, &palette),
        ]
    }

    #[test]
    fn test_export_overview_writes_artifact() {
        let tmp = TempDir::new().unwrap();
        let config = ReportConfig {
            output_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        let output = OutputContract::new(&config.output_dir).unwrap();

        let path = DashboardComposer::new(&config)
            .export_overview(&output, &overview_panels())
            .unwrap();

        assert!(path.is_file());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_wrong_panel_count_rejected() {
        let tmp = TempDir::new().unwrap();
        let config = ReportConfig {
            output_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        let output = OutputContract::new(&config.output_dir).unwrap();

        let mut panels = overview_panels();
        panels.pop();
        let result = DashboardComposer::new(&config).export_overview(&output, &panels);
        assert!(matches!(result, Err(MutagraphError::Validation(_))));
    }

    #[test]
    fn test_unwritable_path_surfaces_export_error() {
        let tmp = TempDir::new().unwrap();
        let config = ReportConfig::default();
        // Parent directory does not exist; the backend cannot create the file
        let bad = tmp.path().join("missing").join("out.svg");

        let result = DashboardComposer::new(&config).export_grid(
            &bad,
            (400, 300),
            (2, 2),
            &overview_panels(),
            "test",
        );
        match result {
            Err(MutagraphError::Export { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected Export error, got {other:?}"),
        }
    }
}
