//
// lib.rs
// Dicom-Summary-rs
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//
// Thales Matheus Mendonça Santos - December 2025

// Public surface of the library: each module mirrors one stage of the pipeline.
pub mod cli;
pub mod dicom_access;
pub mod extract;
pub mod models;
pub mod report;
pub mod scan;

pub use cli::{run as run_cli, Cli};
