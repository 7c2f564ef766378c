//! Report aggregation: ranked and grouped summary statistics formatted as a
//! structured textual report.
//!
//! Aggregation is pure over the dataset; rendering the report to a console
//! or file is the caller's concern. Sections 3 and 4 are static clinical
//! reference content, not derived from the data.

use crate::chart::percent_label;
use anyhow::Result;
use mutagraph_core::{ClinicalSignificance, MutationDataset};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many genes the ranked section lists.
pub const TOP_GENE_COUNT: usize = 5;

/// Static therapeutic reference content (external knowledge, not computed).
const THERAPEUTIC_IMPLICATIONS: [&str; 4] = [
    "PARP inhibitors: indicated for BRCA1/2 mutations",
    "PI3K inhibitors: for PIK3CA mutations",
    "Immunotherapy: high tumor mutational burden",
    "Targeted therapy: guided by the mutational profile",
];

/// Static screening reference content.
const SCREENING_RECOMMENDATIONS: [&str; 3] = [
    "NGS panel sequencing: BRCA1, BRCA2, TP53, PALB2, and related genes",
    "Genetic counseling: for familial history",
    "Enhanced surveillance: carriers of high-risk mutations",
];

/// One ordered report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

/// Headline statistics, also exposed in machine-readable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_genes: usize,
    /// Arithmetic mean of all frequencies, as a percentage
    pub mean_frequency_pct: f64,
    pub pathogenic: usize,
    pub oncogenic: usize,
}

/// The aggregated genomic report: ordered sections of formatted lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomicReport {
    pub sections: Vec<ReportSection>,
    pub stats: SummaryStats,
}

impl GenomicReport {
    /// Render the report as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("GENOMIC ANALYSIS REPORT - BREAST CANCER PANEL\n");
        out.push_str(&"=".repeat(60));
        out.push('\n');

        for (i, section) in self.sections.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", i + 1, section.title));
            for line in &section.lines {
                out.push_str("   - ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Write the text rendering to a file.
    pub fn write_text(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render_text())?;
        Ok(())
    }

    /// Write the structured report as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Computes the report purely from the dataset.
pub struct ReportAggregator;

impl ReportAggregator {
    pub fn generate(dataset: &MutationDataset) -> GenomicReport {
        let stats = Self::stats(dataset);
        let sections = vec![
            Self::top_genes_section(dataset),
            Self::brca_section(dataset),
            ReportSection {
                title: "THERAPEUTIC IMPLICATIONS".to_string(),
                lines: THERAPEUTIC_IMPLICATIONS.iter().map(|s| s.to_string()).collect(),
            },
            ReportSection {
                title: "SCREENING RECOMMENDATIONS".to_string(),
                lines: SCREENING_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
            },
            Self::stats_section(&stats),
        ];

        GenomicReport { sections, stats }
    }

    fn top_genes_section(dataset: &MutationDataset) -> ReportSection {
        let lines = dataset
            .top_by_frequency(TOP_GENE_COUNT)
            .iter()
            .map(|r| {
                format!(
                    "{}: {} ({}) - {}",
                    r.gene,
                    percent_label(r.frequency * 100.0),
                    r.mutation_type,
                    r.clinical_significance
                )
            })
            .collect();

        ReportSection {
            title: "MOST FREQUENTLY MUTATED GENES".to_string(),
            lines,
        }
    }

    fn brca_section(dataset: &MutationDataset) -> ReportSection {
        let lines = dataset
            .genes_containing("BRCA")
            .iter()
            .map(|r| format!("{}: frequency {}", r.gene, percent_label(r.frequency * 100.0)))
            .collect();

        ReportSection {
            title: "BRCA GENE ANALYSIS".to_string(),
            lines,
        }
    }

    fn stats(dataset: &MutationDataset) -> SummaryStats {
        let by_significance = dataset.count_by_significance();
        let count_of = |sig: ClinicalSignificance| {
            by_significance
                .iter()
                .find(|(s, _)| *s == sig)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        SummaryStats {
            total_genes: dataset.len(),
            mean_frequency_pct: dataset.mean_frequency() * 100.0,
            pathogenic: count_of(ClinicalSignificance::Pathogenic),
            oncogenic: count_of(ClinicalSignificance::Oncogenic),
        }
    }

    fn stats_section(stats: &SummaryStats) -> ReportSection {
        ReportSection {
            title: "GLOBAL STATISTICS".to_string(),
            lines: vec![
                format!("Total genes analyzed: {}", stats.total_genes),
                format!(
                    "Mean mutation frequency: {}",
                    percent_label(stats.mean_frequency_pct)
                ),
                format!("Pathogenic genes: {}", stats.pathogenic),
                format!("Oncogenic genes: {}", stats.oncogenic),
            ],
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mutagraph_core::{ClinicalSignificance::*, MutationType::*};

    #[test]
    fn test_example_scenario() {
        let ds = MutationDataset::from_columns(
            &["BRCA1", "TP53", "PTEN"],
            &[0.25, 0.35, 0.08],
            &[Frameshift, Missense, Deletion],
            &[Pathogenic, Pathogenic, Pathogenic],
        )
        .unwrap();

        let report = ReportAggregator::generate(&ds);

        // Top section: TP53 first, then BRCA1
        assert!(report.sections[0].lines[0].starts_with("TP53: 35.0%"));
        assert!(report.sections[0].lines[1].starts_with("BRCA1: 25.0%"));

        // BRCA filter
        assert_eq!(report.sections[1].lines.len(), 1);
        assert!(report.sections[1].lines[0].starts_with("BRCA1"));

        assert_eq!(report.stats.pathogenic, 3);
        assert_eq!(report.stats.oncogenic, 0);
        assert_eq!(report.stats.total_genes, 3);
    }

    #[test]
    fn test_builtin_panel_stats() {
        let ds = MutationDataset::builtin().unwrap();
        let report = ReportAggregator::generate(&ds);

        assert_eq!(report.stats.total_genes, 14);
        assert_eq!(report.stats.pathogenic, 8);
        assert_eq!(report.stats.oncogenic, 6);

        let expected_mean =
            ds.records().iter().map(|r| r.frequency).sum::<f64>() / ds.len() as f64 * 100.0;
        assert!((report.stats.mean_frequency_pct - expected_mean).abs() < 1e-9);
    }

    #[test]
    fn test_top_five_ranking_of_builtin_panel() {
        let ds = MutationDataset::builtin().unwrap();
        let report = ReportAggregator::generate(&ds);

        let top: Vec<&str> = report.sections[0]
            .lines
            .iter()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(top, vec!["TP53", "PIK3CA", "BRCA1", "BRCA2", "ERBB2"]);
    }

    #[test]
    fn test_report_has_five_ordered_sections() {
        let ds = MutationDataset::builtin().unwrap();
        let report = ReportAggregator::generate(&ds);

        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "MOST FREQUENTLY MUTATED GENES",
                "BRCA GENE ANALYSIS",
                "THERAPEUTIC IMPLICATIONS",
                "SCREENING RECOMMENDATIONS",
                "GLOBAL STATISTICS",
            ]
        );
    }

    #[test]
    fn test_static_sections_are_dataset_independent() {
        let a = ReportAggregator::generate(&MutationDataset::builtin().unwrap());
        let b = ReportAggregator::generate(
            &MutationDataset::from_columns(
                &["TP53"],
                &[0.5],
                &[Missense],
                &[Pathogenic],
            )
            .unwrap(),
        );
        assert_eq!(a.sections[2], b.sections[2]);
        assert_eq!(a.sections[3], b.sections[3]);
    }

    #[test]
    fn test_render_text_is_deterministic() {
        let ds = MutationDataset::builtin().unwrap();
        let first = ReportAggregator::generate(&ds).render_text();
        let second = ReportAggregator::generate(&ds).render_text();
        assert_eq!(first, second);
        // Builtin frequencies sum to 2.01 over 14 genes -> 14.357..%
        assert!(first.contains("Mean mutation frequency: 14.4%"));
    }
}
