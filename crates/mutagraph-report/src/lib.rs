//! Mutagraph report: dashboard rendering and report aggregation.
//!
//! Single-pass batch pipeline over the immutable entities from
//! `mutagraph-core`:
//!
//! ```text
//! MutationDataset + ReferenceStructures
//!     │
//!     ├─ panels (pure builders) ──► ChartSpec (declarative, backend-free)
//!     │                                  │
//!     │                                  ▼
//!     │                          DashboardComposer
//!     │                             ├─ overview  (2×2) ─► ctag_overview.svg
//!     │                             └─ advanced  (2×3) ─► advanced_genomics.svg
//!     │
//!     └─ ReportAggregator ──► GenomicReport ─► report.txt / summary.json
//! ```
//!
//! Panel builders never draw; rendering lives in [`figures`] and is the only
//! impure step besides artifact export.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod figures;
pub mod outputs;
pub mod panels;
pub mod pipeline;
pub mod summary;

pub use chart::ChartSpec;
pub use config::{Palette, ReportConfig};
pub use dashboard::DashboardComposer;
pub use outputs::OutputContract;
pub use pipeline::{run_pipeline, run_report_only, PipelineResult};
pub use summary::{GenomicReport, ReportAggregator, ReportSection, SummaryStats};

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
