//! Declarative chart specifications.
//!
//! A `ChartSpec` fully describes one panel - chart kind, data series, axis
//! labels, per-element annotations - without referencing any drawing
//! backend. Builders in [`crate::panels`] produce these; [`crate::figures`]
//! consumes them. The split keeps the data shaping pure and testable.

use serde::{Deserialize, Serialize};

/// One bar with its formatted annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Pre-formatted annotation placed adjacent to the bar's extremal edge
    pub annotation: String,
}

/// One pie wedge. `fraction` is count / total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    pub color: String,
}

/// One colored cell of the sequence track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceCell {
    pub base: char,
    pub color: String,
}

/// Row-major gene × mutation-type value matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `values[row][col]`, rows aligned with `row_labels`
    pub values: Vec<Vec<f64>>,
}

/// One histogram bin over `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// One positioned network node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// One resolved network edge (endpoint coordinates already looked up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// One grouped-bar series aligned on the shared category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// Backend-agnostic description of a single panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    HorizontalBars {
        title: String,
        x_label: String,
        bars: Vec<Bar>,
    },
    Pie {
        title: String,
        wedges: Vec<Wedge>,
    },
    SequenceTrack {
        title: String,
        x_label: String,
        cells: Vec<SequenceCell>,
        markers: Vec<usize>,
        marker_color: String,
    },
    VerticalBars {
        title: String,
        y_label: String,
        bars: Vec<Bar>,
    },
    Heatmap {
        title: String,
        matrix: HeatmapMatrix,
    },
    Histogram {
        title: String,
        x_label: String,
        y_label: String,
        bins: Vec<HistogramBin>,
        /// X position of the mean reference marker
        mean: f64,
        mean_label: String,
    },
    Network {
        title: String,
        edges: Vec<NetworkEdge>,
        nodes: Vec<NetworkNode>,
        edge_color: String,
        /// Upper bounds of the layout coordinate space (origin is 0,0)
        bounds: (f64, f64),
    },
    GroupedBars {
        title: String,
        x_label: String,
        y_label: String,
        categories: Vec<String>,
        series: Vec<BarSeries>,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::HorizontalBars { title, .. }
            | ChartSpec::Pie { title, .. }
            | ChartSpec::SequenceTrack { title, .. }
            | ChartSpec::VerticalBars { title, .. }
            | ChartSpec::Heatmap { title, .. }
            | ChartSpec::Histogram { title, .. }
            | ChartSpec::Network { title, .. }
            | ChartSpec::GroupedBars { title, .. } => title,
        }
    }
}

/// Percentage annotation: one decimal place plus "%".
pub fn percent_label(value: f64) -> String {
    format!("{value:.1}%")
}

/// Count annotation: plain integer, no decimals.
pub fn count_label(count: usize) -> String {
    format!("{count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_formats() {
        assert_eq!(percent_label(25.0), "25.0%");
        assert_eq!(percent_label(14.285), "14.3%");
        assert_eq!(count_label(8), "8");
    }

    #[test]
    fn test_specs_serialize() {
        let spec = ChartSpec::VerticalBars {
            title: "Clinical Impact".to_string(),
            y_label: "Gene count".to_string(),
            bars: vec![Bar {
                label: "Pathogenic".to_string(),
                value: 8.0,
                color: "#E76F51".to_string(),
                annotation: "8".to_string(),
            }],
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: ChartSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
        assert_eq!(back.title(), "Clinical Impact");
    }
}
