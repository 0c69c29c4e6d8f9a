//
// main.rs
// Dicom-Summary-rs
//
// Entry point that hands off execution to the CLI layer.
//
// Thales Matheus Mendonça Santos - December 2025

use dicom_summary::cli;

fn main() -> anyhow::Result<()> {
    // Delegate all argument parsing and dispatching to the CLI module.
    cli::run()
}
