//! Panel builders: pure functions from the data model to chart specs.
//!
//! Each builder consumes the dataset and/or reference structures by shared
//! reference and emits a declarative [`ChartSpec`]; no builder draws, no
//! builder depends on another builder's output. The only injected state is
//! the palette and, for the heatmap, an explicit RNG for its illustrative
//! noise cells.

use crate::chart::{
    count_label, percent_label, Bar, BarSeries, ChartSpec, HeatmapMatrix, HistogramBin,
    NetworkEdge, NetworkNode, SequenceCell, Wedge,
};
use crate::config::Palette;
use mutagraph_core::{
    InteractionGraph, MutagraphError, MutationDataset, PathwayMap, SequenceTrack, SignatureTable,
    SpectrumCounts, SUBSTITUTION_CONTEXTS,
};
use rand::Rng;

/// Gene-name substring that selects the highlight color.
const HIGHLIGHT_SUBSTRING: &str = "BRCA";

/// Fixed bin count for the frequency histogram.
const HISTOGRAM_BINS: usize = 10;

fn gene_color<'a>(palette: &'a Palette, gene: &str) -> &'a str {
    if gene.contains(HIGHLIGHT_SUBSTRING) {
        &palette.highlight
    } else {
        &palette.primary
    }
}

/// Horizontal bars: one per gene, value = frequency × 100, BRCA highlight,
/// one-decimal percentage annotations.
pub fn frequency_bars(dataset: &MutationDataset, palette: &Palette) -> ChartSpec {
    let bars = dataset
        .iter()
        .map(|record| {
            let pct = record.frequency * 100.0;
            Bar {
                label: record.gene.clone(),
                value: pct,
                color: gene_color(palette, &record.gene).to_string(),
                annotation: percent_label(pct),
            }
        })
        .collect();

    ChartSpec::HorizontalBars {
        title: "Mutation Frequency by Gene".to_string(),
        x_label: "Mutation frequency (%)".to_string(),
        bars,
    }
}

/// Pie of mutation-type counts. Wedges ordered by descending count, ties
/// broken by first-seen order in the grouping pass.
pub fn mutation_type_pie(dataset: &MutationDataset, palette: &Palette) -> ChartSpec {
    let mut counts = dataset.count_by_type();
    // count_by_type preserves first-seen order; the stable sort keeps it as
    // the tie-break.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let wedges = counts
        .iter()
        .enumerate()
        .map(|(i, (mutation_type, count))| Wedge {
            label: mutation_type.to_string(),
            count: *count,
            fraction: if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            },
            color: palette.cycle(i).to_string(),
        })
        .collect();

    ChartSpec::Pie {
        title: "Mutation Type Distribution".to_string(),
        wedges,
    }
}

/// Colored cell per nucleotide plus a marker glyph above every mutation
/// position.
pub fn sequence_track(track: &SequenceTrack, palette: &Palette) -> ChartSpec {
    let cells = track
        .bases()
        .iter()
        .map(|&base| SequenceCell {
            base,
            color: palette.nucleotide(base).to_string(),
        })
        .collect();

    ChartSpec::SequenceTrack {
        title: "CTAG Diagram - Genomic Sequence with Mutations".to_string(),
        x_label: "Position in sequence".to_string(),
        cells,
        markers: track.markers().to_vec(),
        marker_color: palette.marker.clone(),
    }
}

/// Vertical bars of counts per clinical significance, integer annotations.
pub fn clinical_impact_bars(dataset: &MutationDataset, palette: &Palette) -> ChartSpec {
    let bars = dataset
        .count_by_significance()
        .iter()
        .enumerate()
        .map(|(i, (significance, count))| Bar {
            label: significance.to_string(),
            value: *count as f64,
            color: palette.cycle(i).to_string(),
            annotation: count_label(*count),
        })
        .collect();

    ChartSpec::VerticalBars {
        title: "Clinical Impact of Mutations".to_string(),
        y_label: "Gene count".to_string(),
        bars,
    }
}

/// Gene × mutation-type frequency matrix. Base fill is illustrative noise in
/// [0, 0.3) from the supplied RNG; BRCA genes force column 0 to 0.8 and PIK3
/// genes force column 2 to 0.9. Column order is first-seen order of the
/// dataset's mutation types.
pub fn mutation_heatmap<R: Rng>(
    dataset: &MutationDataset,
    palette: &Palette,
    rng: &mut R,
) -> ChartSpec {
    let _ = palette; // heatmap colors come from the value ramp, not the palette
    let col_types = dataset.distinct_types();
    let col_labels: Vec<String> = col_types.iter().map(|t| t.to_string()).collect();

    let mut row_labels = Vec::with_capacity(dataset.len());
    let mut values = Vec::with_capacity(dataset.len());
    for record in dataset.iter() {
        let mut row: Vec<f64> = (0..col_types.len())
            .map(|_| rng.gen::<f64>() * 0.3)
            .collect();
        if record.gene.contains(HIGHLIGHT_SUBSTRING) && !row.is_empty() {
            row[0] = 0.8;
        }
        if record.gene.contains("PIK3") && row.len() > 2 {
            row[2] = 0.9;
        }
        row_labels.push(record.gene.clone());
        values.push(row);
    }

    ChartSpec::Heatmap {
        title: "Mutation Heatmap by Gene and Type".to_string(),
        matrix: HeatmapMatrix {
            row_labels,
            col_labels,
            values,
        },
    }
}

/// Histogram of frequency × 100 over ten bins, with the arithmetic mean as
/// a labeled vertical reference marker.
pub fn frequency_distribution(dataset: &MutationDataset, palette: &Palette) -> ChartSpec {
    let _ = palette;
    let percents: Vec<f64> = dataset.iter().map(|r| r.frequency * 100.0).collect();
    let mean = dataset.mean_frequency() * 100.0;

    let bins = if percents.is_empty() {
        Vec::new()
    } else {
        let lo = percents.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = percents.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        // Degenerate span (all values equal) still gets a nonzero bin width
        let span = if hi > lo { hi - lo } else { 1.0 };
        let width = span / HISTOGRAM_BINS as f64;

        let mut counts = vec![0usize; HISTOGRAM_BINS];
        for &p in &percents {
            let bin = (((p - lo) / width) as usize).min(HISTOGRAM_BINS - 1);
            counts[bin] += 1;
        }

        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| HistogramBin {
                lo: lo + i as f64 * width,
                hi: lo + (i + 1) as f64 * width,
                count,
            })
            .collect()
    };

    ChartSpec::Histogram {
        title: "Mutation Frequency Distribution".to_string(),
        x_label: "Mutation frequency (%)".to_string(),
        y_label: "Gene count".to_string(),
        bins,
        mean,
        mean_label: format!("Mean: {}", percent_label(mean)),
    }
}

/// Line segment per edge (endpoint coordinates looked up by node name) and
/// a marker per node, with the BRCA highlight rule.
///
/// Fails with `UnknownNode` if an edge references a missing node; dangling
/// edges are never silently dropped.
pub fn interaction_network(
    graph: &InteractionGraph,
    palette: &Palette,
) -> Result<ChartSpec, MutagraphError> {
    let mut edges = Vec::with_capacity(graph.edges.len());
    for (a, b) in &graph.edges {
        let from = graph
            .node(a)
            .ok_or_else(|| MutagraphError::unknown_node(a, a, b))?;
        let to = graph
            .node(b)
            .ok_or_else(|| MutagraphError::unknown_node(b, a, b))?;
        edges.push(NetworkEdge {
            from: (from.x, from.y),
            to: (to.x, to.y),
        });
    }

    let nodes: Vec<NetworkNode> = graph
        .nodes
        .iter()
        .map(|node| NetworkNode {
            name: node.name.clone(),
            x: node.x,
            y: node.y,
            color: gene_color(palette, &node.name).to_string(),
        })
        .collect();

    let bound = |f: fn(&NetworkNode) -> f64| {
        nodes.iter().map(f).fold(0.0f64, f64::max) + 1.0
    };
    let bounds = (bound(|n| n.x), bound(|n| n.y));

    Ok(ChartSpec::Network {
        title: "Gene Interaction Network".to_string(),
        edges,
        nodes,
        edge_color: palette.edge.clone(),
        bounds,
    })
}

/// Grouped bars: one series per named signature, aligned on the shared
/// six-context axis.
pub fn signature_comparison(table: &SignatureTable, palette: &Palette) -> ChartSpec {
    let series = table
        .signatures
        .iter()
        .enumerate()
        .map(|(i, signature)| BarSeries {
            name: signature.name.clone(),
            values: signature.weights.to_vec(),
            color: palette.cycle(i).to_string(),
        })
        .collect();

    ChartSpec::GroupedBars {
        title: "Mutational Signatures".to_string(),
        x_label: "Mutation type".to_string(),
        y_label: "Relative frequency".to_string(),
        categories: SUBSTITUTION_CONTEXTS.iter().map(|s| s.to_string()).collect(),
        series,
    }
}

/// One bar per pathway, height = gene count, integer annotation.
pub fn pathway_counts(map: &PathwayMap, palette: &Palette) -> ChartSpec {
    let bars = map
        .pathways
        .iter()
        .enumerate()
        .map(|(i, pathway)| Bar {
            label: pathway.name.clone(),
            value: pathway.genes.len() as f64,
            color: palette.cycle(i).to_string(),
            annotation: count_label(pathway.genes.len()),
        })
        .collect();

    ChartSpec::VerticalBars {
        title: "Signaling Pathway Analysis".to_string(),
        y_label: "Gene count".to_string(),
        bars,
    }
}

/// Fixed bars over the substitution contexts from the supplied count table,
/// integer annotations.
pub fn detailed_spectrum(spectrum: &SpectrumCounts, palette: &Palette) -> ChartSpec {
    let bars = spectrum
        .contexts
        .iter()
        .zip(&spectrum.counts)
        .enumerate()
        .map(|(i, (context, &count))| Bar {
            label: context.clone(),
            value: count as f64,
            color: palette.cycle(i).to_string(),
            annotation: count_label(count as usize),
        })
        .collect();

    ChartSpec::VerticalBars {
        title: "CTAG Mutation Spectrum (Transitions/Transversions)".to_string(),
        y_label: "Mutation count".to_string(),
        bars,
    }
}

// =============================================================================
// TESTS
// =============================================================================
