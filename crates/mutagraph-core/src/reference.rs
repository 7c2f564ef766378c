//! Fixed auxiliary reference data consumed by the panel builders.
//!
//! None of this is derived from the mutation dataset: the sequence track,
//! interaction graph, signature tables, pathway map, and spectrum counts are
//! illustrative fixtures, validated at construction and immutable afterward.

use crate::errors::MutagraphError;
use serde::{Deserialize, Serialize};

/// The six base-substitution context categories shared by signature tables
/// and spectrum counts.
pub const SUBSTITUTION_CONTEXTS: [&str; 6] = ["C>A", "C>G", "C>T", "T>A", "T>C", "T>G"];

/// A nucleotide sequence with marked mutation positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceTrack {
    bases: Vec<char>,
    markers: Vec<usize>,
}

impl SequenceTrack {
    /// Validates that every symbol is one of A/T/C/G and every marker is a
    /// valid index into the sequence.
    pub fn new(sequence: &str, markers: Vec<usize>) -> Result<Self, MutagraphError> {
        let bases: Vec<char> = sequence.chars().collect();
        for (i, base) in bases.iter().enumerate() {
            if !matches!(base, 'A' | 'T' | 'C' | 'G') {
                return Err(MutagraphError::validation(format!(
                    "invalid nucleotide '{base}' at position {i}"
                )));
            }
        }
        for &pos in &markers {
            if pos >= bases.len() {
                return Err(MutagraphError::validation(format!(
                    "mutation marker {pos} outside sequence of length {}",
                    bases.len()
                )));
            }
        }
        Ok(Self { bases, markers })
    }

    /// The built-in 60-base demo sequence with five marked mutations.
    pub fn builtin() -> Result<Self, MutagraphError> {
        Self::new(
            "ATGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGCTAGC",
            vec![5, 12, 25, 38, 45],
        )
    }

    pub fn bases(&self) -> &[char] {
        &self.bases
    }

    pub fn markers(&self) -> &[usize] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

/// A named graph node with a fixed 2D layout coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Gene-interaction graph: named nodes with coordinates plus undirected
/// edges referencing node names.
///
/// Edge endpoints are resolved lazily by the network panel builder, which
/// fails with `UnknownNode` rather than silently dropping a dangling edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<(String, String)>,
}

impl InteractionGraph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<(String, String)>) -> Self {
        Self { nodes, edges }
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// The built-in 8-gene interaction network.
    pub fn builtin() -> Self {
        let node = |name: &str, x: f64, y: f64| GraphNode {
            name: name.to_string(),
            x,
            y,
        };
        let edge = |a: &str, b: &str| (a.to_string(), b.to_string());

        Self::new(
            vec![
                node("BRCA1", 2.0, 3.0),
                node("BRCA2", 4.0, 3.0),
                node("TP53", 3.0, 1.0),
                node("PTEN", 1.0, 2.0),
                node("PALB2", 5.0, 2.0),
                node("CHEK2", 2.0, 4.0),
                node("ATM", 4.0, 4.0),
                node("PIK3CA", 3.0, 5.0),
            ],
            vec![
                edge("BRCA1", "BRCA2"),
                edge("BRCA1", "TP53"),
                edge("BRCA2", "PALB2"),
                edge("TP53", "PTEN"),
                edge("BRCA1", "CHEK2"),
                edge("BRCA2", "ATM"),
                edge("PIK3CA", "TP53"),
                edge("CHEK2", "ATM"),
            ],
        )
    }
}

/// One named relative-frequency series over the six substitution contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub weights: [f64; 6],
}

/// Mutational signature table: named series aligned on
/// [`SUBSTITUTION_CONTEXTS`]. Each series sums to approximately 1.0 (not
/// strictly enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureTable {
    pub signatures: Vec<Signature>,
}

impl SignatureTable {
    /// The two built-in illustrative signatures.
    pub fn builtin() -> Self {
        Self {
            signatures: vec![
                Signature {
                    name: "Aging signature".to_string(),
                    weights: [0.1, 0.05, 0.4, 0.1, 0.2, 0.15],
                },
                Signature {
                    name: "BRCA signature".to_string(),
                    weights: [0.3, 0.1, 0.2, 0.2, 0.1, 0.1],
                },
            ],
        }
    }
}

/// A named signaling pathway grouping of genes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pathway {
    pub name: String,
    pub genes: Vec<String>,
}

/// Pathway name -> gene set mapping, order-preserving. Gene names need not
/// appear in the mutation dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayMap {
    pub pathways: Vec<Pathway>,
}

impl PathwayMap {
    pub fn builtin() -> Self {
        let pathway = |name: &str, genes: &[&str]| Pathway {
            name: name.to_string(),
            genes: genes.iter().map(|g| g.to_string()).collect(),
        };

        Self {
            pathways: vec![
                pathway("DNA Repair", &["BRCA1", "BRCA2", "PALB2", "ATM", "CHEK2"]),
                pathway("PI3K/AKT", &["PIK3CA", "PTEN", "AKT1"]),
                pathway("Cell Cycle", &["TP53", "CDH1"]),
                pathway("Hormone Signaling", &["ESR1", "GATA3"]),
            ],
        }
    }
}

/// Fixed transition/transversion count table for the detailed spectrum
/// panel, independent of the mutation dataset. Carries its own context
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumCounts {
    pub contexts: Vec<String>,
    pub counts: Vec<u32>,
}

impl SpectrumCounts {
    pub fn new(contexts: Vec<String>, counts: Vec<u32>) -> Result<Self, MutagraphError> {
        if counts.len() != contexts.len() {
            return Err(MutagraphError::shape_mismatch(
                "spectrum counts",
                contexts.len(),
                counts.len(),
            ));
        }
        Ok(Self { contexts, counts })
    }

    pub fn builtin() -> Result<Self, MutagraphError> {
        Self::new(
            ["C>T", "C>G", "C>A", "T>C", "T>G", "T>A"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vec![150, 45, 60, 80, 35, 55],
        )
    }
}

/// All fixed auxiliary structures, bundled for the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceStructures {
    pub sequence: SequenceTrack,
    pub graph: InteractionGraph,
    pub signatures: SignatureTable,
    pub pathways: PathwayMap,
    pub spectrum: SpectrumCounts,
}

impl ReferenceStructures {
    pub fn builtin() -> Result<Self, MutagraphError> {
        Ok(Self {
            sequence: SequenceTrack::builtin()?,
            graph: InteractionGraph::builtin(),
            signatures: SignatureTable::builtin(),
            pathways: PathwayMap::builtin(),
            spectrum: SpectrumCounts::builtin()?,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_track_validation() {
        assert!(SequenceTrack::new("ATCG", vec![0, 3]).is_ok());
        assert!(matches!(
            SequenceTrack::new("ATXG", vec![]),
            Err(MutagraphError::Validation(_))
        ));
        assert!(matches!(
            SequenceTrack::new("ATCG", vec![4]),
            Err(MutagraphError::Validation(_))
        ));
    }

    #[test]
    fn test_builtin_sequence_track() {
        let track = SequenceTrack::builtin().unwrap();
        assert_eq!(track.len(), 60);
        assert_eq!(track.markers(), &[5, 12, 25, 38, 45]);
    }

    #[test]
    fn test_builtin_graph_edges_resolve() {
        let graph = InteractionGraph::builtin();
        assert_eq!(graph.nodes.len(), 8);
        assert_eq!(graph.edges.len(), 8);
        for (a, b) in &graph.edges {
            assert!(graph.node(a).is_some(), "missing node {a}");
            assert!(graph.node(b).is_some(), "missing node {b}");
        }
    }

    #[test]
    fn test_builtin_signatures_normalized() {
        for sig in SignatureTable::builtin().signatures {
            let sum: f64 = sig.weights.iter().sum();
            assert!((sum - 1.0).abs() < 0.05, "{} sums to {sum}", sig.name);
        }
    }

    #[test]
    fn test_spectrum_counts_shape_checked() {
        let result = SpectrumCounts::new(
            vec!["C>T".to_string(), "C>G".to_string()],
            vec![150],
        );
        assert!(matches!(result, Err(MutagraphError::ShapeMismatch { .. })));
    }
}
