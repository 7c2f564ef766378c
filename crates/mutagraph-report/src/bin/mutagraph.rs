//! Mutagraph CLI entry point.
//!
//! ```bash
//! # Render both dashboards and write the report:
//! mutagraph run --out results/ [--seed 42]
//!
//! # Print the textual report without rendering figures:
//! mutagraph report
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mutagraph_report::{run_pipeline, run_report_only, ReportConfig};
use std::path::PathBuf;

/// Gene-mutation dashboard and report generator
#[derive(Parser, Debug)]
#[command(name = "mutagraph")]
#[command(version)]
#[command(about = "Breast cancer mutation panel dashboards and report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render both dashboards and write the textual report
    Run(RunArgs),
    /// Print the textual report without rendering figures
    Report,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Output directory for all artifacts
    #[arg(long, default_value = "results")]
    out: PathBuf,

    /// Seed for the heatmap's illustrative noise cells
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let config = ReportConfig {
                output_dir: args.out,
                heatmap_seed: args.seed,
                ..Default::default()
            };

            let result = run_pipeline(&config)?;
            println!("{}", result.report.render_text());
            println!("Generated files:");
            for file in &result.files_generated {
                println!("   - {}", file.display());
            }
            Ok(())
        }
        Commands::Report => {
            let report = run_report_only()?;
            print!("{}", report.render_text());
            Ok(())
        }
    }
}
