//! Mutation record table with validated construction and grouping helpers.
//!
//! The dataset is an ordered sequence of records; insertion order is
//! significant for display (bar order, tie-breaks) but not for aggregate
//! correctness. Grouping is a single explicit pass that records first-seen
//! order, so every downstream ordering is deterministic.

use crate::errors::MutagraphError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Mutation type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationType {
    Frameshift,
    Nonsense,
    Missense,
    Deletion,
    #[serde(rename = "Splice_Site")]
    SpliceSite,
    Amplification,
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MutationType::Frameshift => "Frameshift",
            MutationType::Nonsense => "Nonsense",
            MutationType::Missense => "Missense",
            MutationType::Deletion => "Deletion",
            MutationType::SpliceSite => "Splice_Site",
            MutationType::Amplification => "Amplification",
        };
        f.write_str(s)
    }
}

impl FromStr for MutationType {
    type Err = MutagraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frameshift" => Ok(MutationType::Frameshift),
            "Nonsense" => Ok(MutationType::Nonsense),
            "Missense" => Ok(MutationType::Missense),
            "Deletion" => Ok(MutationType::Deletion),
            "Splice_Site" => Ok(MutationType::SpliceSite),
            "Amplification" => Ok(MutationType::Amplification),
            other => Err(MutagraphError::validation(format!(
                "unknown mutation type '{other}'"
            ))),
        }
    }
}

/// Clinical classification of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicalSignificance {
    Pathogenic,
    Oncogenic,
}

impl fmt::Display for ClinicalSignificance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClinicalSignificance::Pathogenic => "Pathogenic",
            ClinicalSignificance::Oncogenic => "Oncogenic",
        };
        f.write_str(s)
    }
}

impl FromStr for ClinicalSignificance {
    type Err = MutagraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pathogenic" => Ok(ClinicalSignificance::Pathogenic),
            "Oncogenic" => Ok(ClinicalSignificance::Oncogenic),
            other => Err(MutagraphError::validation(format!(
                "unknown clinical significance '{other}'"
            ))),
        }
    }
}

/// One row: a gene's observed mutation frequency, type, and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    pub gene: String,
    /// Observed/assumed mutation frequency in [0, 1]
    pub frequency: f64,
    pub mutation_type: MutationType,
    pub clinical_significance: ClinicalSignificance,
}

/// Ordered, validated table of mutation records.
///
/// Invariants (enforced at construction):
/// - gene names are unique
/// - every frequency lies in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationDataset {
    records: Vec<MutationRecord>,
}

impl MutationDataset {
    /// Build a dataset from four parallel columns.
    ///
    /// Fails with `ShapeMismatch` when the columns disagree in length (never
    /// silently truncates) and with `Validation` on out-of-range frequencies
    /// or duplicate gene names.
    pub fn from_columns(
        genes: &[&str],
        frequencies: &[f64],
        mutation_types: &[MutationType],
        significance: &[ClinicalSignificance],
    ) -> Result<Self, MutagraphError> {
        let expected = genes.len();
        if frequencies.len() != expected {
            return Err(MutagraphError::shape_mismatch(
                "frequency column",
                expected,
                frequencies.len(),
            ));
        }
        if mutation_types.len() != expected {
            return Err(MutagraphError::shape_mismatch(
                "mutation type column",
                expected,
                mutation_types.len(),
            ));
        }
        if significance.len() != expected {
            return Err(MutagraphError::shape_mismatch(
                "clinical significance column",
                expected,
                significance.len(),
            ));
        }

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(expected);
        for i in 0..expected {
            let gene = genes[i];
            let frequency = frequencies[i];
            if !seen.insert(gene) {
                return Err(MutagraphError::validation(format!(
                    "duplicate gene name '{gene}'"
                )));
            }
            if !(0.0..=1.0).contains(&frequency) || !frequency.is_finite() {
                return Err(MutagraphError::validation(format!(
                    "frequency {frequency} for gene '{gene}' outside [0, 1]"
                )));
            }
            records.push(MutationRecord {
                gene: gene.to_string(),
                frequency,
                mutation_type: mutation_types[i],
                clinical_significance: significance[i],
            });
        }

        Ok(Self { records })
    }

    /// The built-in 14-gene breast cancer mutation panel.
    pub fn builtin() -> Result<Self, MutagraphError> {
        use ClinicalSignificance::{Oncogenic, Pathogenic};
        use MutationType::*;

        Self::from_columns(
            &[
                "BRCA1", "BRCA2", "TP53", "PTEN", "PALB2", "CHEK2", "ATM", "CDH1", "PIK3CA",
                "AKT1", "GATA3", "MAP3K1", "ESR1", "ERBB2",
            ],
            &[
                0.25, 0.20, 0.35, 0.08, 0.12, 0.09, 0.07, 0.08, 0.28, 0.04, 0.11, 0.13, 0.06,
                0.15,
            ],
            &[
                Frameshift,
                Nonsense,
                Missense,
                Deletion,
                Frameshift,
                Missense,
                Missense,
                SpliceSite,
                Missense,
                Missense,
                Missense,
                Frameshift,
                Missense,
                Amplification,
            ],
            &[
                Pathogenic, Pathogenic, Pathogenic, Pathogenic, Pathogenic, Pathogenic,
                Pathogenic, Pathogenic, Oncogenic, Oncogenic, Oncogenic, Oncogenic, Oncogenic,
                Oncogenic,
            ],
        )
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[MutationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutationRecord> {
        self.records.iter()
    }

    /// Count records per mutation type, in first-seen order.
    pub fn count_by_type(&self) -> Vec<(MutationType, usize)> {
        count_by(&self.records, |r| r.mutation_type)
    }

    /// Count records per clinical significance, in first-seen order.
    pub fn count_by_significance(&self) -> Vec<(ClinicalSignificance, usize)> {
        count_by(&self.records, |r| r.clinical_significance)
    }

    /// Distinct mutation types in first-seen order.
    pub fn distinct_types(&self) -> Vec<MutationType> {
        self.count_by_type().into_iter().map(|(t, _)| t).collect()
    }

    /// Arithmetic mean of all frequencies; 0.0 for an empty dataset.
    pub fn mean_frequency(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.iter().map(|r| r.frequency).sum();
        sum / self.records.len() as f64
    }

    /// Top `n` records by frequency, descending.
    ///
    /// Uses a stable sort so ties keep their original insertion order.
    pub fn top_by_frequency(&self, n: usize) -> Vec<&MutationRecord> {
        let mut ordered: Vec<&MutationRecord> = self.records.iter().collect();
        ordered.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
        ordered.truncate(n);
        ordered
    }

    /// Records whose gene name contains `needle`, in insertion order.
    pub fn genes_containing(&self, needle: &str) -> Vec<&MutationRecord> {
        self.records
            .iter()
            .filter(|r| r.gene.contains(needle))
            .collect()
    }
}

/// Single-pass grouping: key -> count, preserving first-seen key order.
fn count_by<K, F>(records: &[MutationRecord], key: F) -> Vec<(K, usize)>
where
    K: PartialEq,
    F: Fn(&MutationRecord) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for record in records {
        let k = key(record);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, n)) => *n += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

// =============================================================================
// TESTS
// =============================================================================
