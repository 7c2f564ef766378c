//! Integration tests for mutagraph-report.
//!
//! Verifies the output contract is satisfied by a complete pipeline run.

use mutagraph_report::{run_pipeline, ReportConfig};
use tempfile::TempDir;

fn config_for(tmp: &TempDir, seed: Option<u64>) -> ReportConfig {
    ReportConfig {
        output_dir: tmp.path().join("results"),
        heatmap_seed: seed,
        ..Default::default()
    }
}

#[test]
fn test_pipeline_writes_all_artifacts() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(&tmp, Some(7));

    let result = run_pipeline(&config).unwrap();

    assert_eq!(result.n_records, 14);
    assert_eq!(result.files_generated.len(), 4);

    for expected in [
        "ctag_overview.svg",
        "advanced_genomics.svg",
        "report.txt",
        "summary.json",
    ] {
        let path = config.output_dir.join(expected);
        assert!(path.is_file(), "{expected} missing");
        assert!(
            std::fs::metadata(&path).unwrap().len() > 0,
            "{expected} is empty"
        );
    }
}

#[test]
fn test_report_text_structure() {
    let tmp = TempDir::new().unwrap();
    let result = run_pipeline(&config_for(&tmp, Some(1))).unwrap();

    let text = std::fs::read_to_string(result.output_dir.join("report.txt")).unwrap();
    assert!(text.contains("MOST FREQUENTLY MUTATED GENES"));
    assert!(text.contains("BRCA GENE ANALYSIS"));
    assert!(text.contains("THERAPEUTIC IMPLICATIONS"));
    assert!(text.contains("SCREENING RECOMMENDATIONS"));
    assert!(text.contains("GLOBAL STATISTICS"));
    assert!(text.contains("TP53: 35.0%"));
    assert!(text.contains("Total genes analyzed: 14"));
}

#[test]
fn test_summary_json_is_machine_readable() {
    let tmp = TempDir::new().unwrap();
    let result = run_pipeline(&config_for(&tmp, Some(1))).unwrap();

    let json = std::fs::read_to_string(result.output_dir.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["stats"]["total_genes"], 14);
    assert_eq!(value["stats"]["pathogenic"], 8);
    assert_eq!(value["stats"]["oncogenic"], 6);
    assert_eq!(value["sections"].as_array().unwrap().len(), 5);
}

#[test]
fn test_unwritable_output_dir_fails() {
    let tmp = TempDir::new().unwrap();
    // A plain file where the output directory should be
    let blocked = tmp.path().join("blocked");
    std::fs::write(&blocked, b"not a directory").unwrap();

    let config = ReportConfig {
        output_dir: blocked.join("results"),
        ..Default::default()
    };
    assert!(run_pipeline(&config).is_err());
}
