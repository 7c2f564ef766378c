//! Pipeline orchestration: dataset construction, dashboard export, report
//! aggregation.
//!
//! Single-threaded and synchronous. The dataset and reference structures
//! are built once, fed independently into the panel builders, composed into
//! the two dashboards, and aggregated into the report. No builder depends
//! on another builder's output.

use crate::config::ReportConfig;
use crate::dashboard::DashboardComposer;
use crate::outputs::OutputContract;
use crate::panels;
use crate::summary::{GenomicReport, ReportAggregator};
use anyhow::{Context, Result};
use mutagraph_core::{MutationDataset, ReferenceStructures};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Pipeline result
#[derive(Debug)]
pub struct PipelineResult {
    /// Output directory
    pub output_dir: PathBuf,
    /// Number of mutation records analyzed
    pub n_records: usize,
    /// Files generated, in creation order
    pub files_generated: Vec<PathBuf>,
    /// The aggregated report (also written to disk)
    pub report: GenomicReport,
}

/// Run the complete pipeline: build data, export both dashboards, write the
/// textual and JSON report.
pub fn run_pipeline(config: &ReportConfig) -> Result<PipelineResult> {
    log::info!("mutagraph pipeline v{}", crate::VERSION);
    log::info!("Output directory: {}", config.output_dir.display());

    log::info!("[1/4] Building mutation dataset and reference structures...");
    let dataset = MutationDataset::builtin().context("building mutation dataset")?;
    let refs = ReferenceStructures::builtin().context("building reference structures")?;
    log::info!("  {} mutation records, {} graph nodes", dataset.len(), refs.graph.nodes.len());

    let output = OutputContract::new(&config.output_dir)?;
    let composer = DashboardComposer::new(config);
    let palette = &config.palette;
    let mut files = Vec::new();

    log::info!("[2/4] Composing overview dashboard (2x2)...");
    let overview = [
        panels::frequency_bars(&dataset, palette),
        panels::mutation_type_pie(&dataset, palette),
        panels::sequence_track(&refs.sequence, palette),
        panels::clinical_impact_bars(&dataset, palette),
    ];
    files.push(composer.export_overview(&output, &overview)?);

    log::info!("[3/4] Composing advanced dashboard (2x3)...");
    // Illustrative noise only; every other cell and panel is deterministic
    let mut rng = match config.heatmap_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let advanced = [
        panels::mutation_heatmap(&dataset, palette, &mut rng),
        panels::frequency_distribution(&dataset, palette),
        panels::interaction_network(&refs.graph, palette)?,
        panels::signature_comparison(&refs.signatures, palette),
        panels::pathway_counts(&refs.pathways, palette),
        panels::detailed_spectrum(&refs.spectrum, palette),
    ];
    files.push(composer.export_advanced(&output, &advanced)?);

    log::info!("[4/4] Aggregating genomic report...");
    let report = ReportAggregator::generate(&dataset);
    report.write_text(&output.report_txt())?;
    files.push(output.report_txt());
    report.write_json(&output.summary_json())?;
    files.push(output.summary_json());

    log::info!("Done: {} artifacts in {}", files.len(), config.output_dir.display());
    Ok(PipelineResult {
        output_dir: config.output_dir.clone(),
        n_records: dataset.len(),
        files_generated: files,
        report,
    })
}

/// Aggregate the report without rendering any figures.
pub fn run_report_only() -> Result<GenomicReport> {
    let dataset = MutationDataset::builtin().context("building mutation dataset")?;
    Ok(ReportAggregator::generate(&dataset))
}
