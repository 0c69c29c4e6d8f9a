//
// cli.rs
// Dicom-Summary-rs
//
// Defines the CLI surface with Clap and wires the scanner, extractor, and report writer together.
//
// Thales Matheus Mendonça Santos - December 2025

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{report, scan};

/// Command-line interface glue code: resolves paths and drives the pipeline.
#[derive(Parser)]
#[command(name = "dicom-summary")]
#[command(about = "Sumariza metadados DICOM de um diretório em relatórios CSV", long_about = None)]
pub struct Cli {
    /// Root directory scanned recursively for DICOM files
    pub input_directory: PathBuf,

    /// Directory that receives the generated reports (defaults to the working directory)
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    // Parse the raw CLI arguments once, then hand explicit values to each stage.
    let cli = Cli::parse();
    let output_directory = cli
        .output_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    println!("Diretório de entrada: {:?}", cli.input_directory);
    println!("Diretório de saída:   {:?}", output_directory);

    let files = scan::collect_files(&cli.input_directory)?;
    println!("Encontrados {} arquivos.", files.len());

    // Worker count is resolved here, once, and passed down instead of living
    // in process-wide state.
    let workers = num_cpus::get();
    let outcomes = scan::scan_files(&files, workers)?;
    let records = report::records_from_outcomes(outcomes);

    let (summary_path, grouped_path) = report::write_reports(&records, &output_directory)?;
    println!("Relatório por arquivo salvo em: {:?}", summary_path);
    println!("Relatório agrupado salvo em:    {:?}", grouped_path);

    Ok(())
}
