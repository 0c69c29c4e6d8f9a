//
// report.rs
// Dicom-Summary-rs
//
// Builds the per-file and grouped CSV reports from the collected scan outcomes.
//
// Thales Matheus Mendonça Santos - December 2025

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::models::{FileRecord, GroupKey, GroupedRow, ScanOutcome};

pub const SUMMARY_FILE_NAME: &str = "summary1.csv";
pub const GROUPED_FILE_NAME: &str = "grouped1.csv";

const SUMMARY_HEADER: [&str; 6] = [
    "PatientID",
    "AccessionNumber",
    "StudyDescription",
    "SeriesDescription",
    "InstanceNumber",
    "KVP",
];
const GROUPED_HEADER: [&str; 5] = [
    "PatientID",
    "AccessionNumber",
    "StudyDescription",
    "SeriesDescription",
    "count",
];

/// Drop the skip markers, keeping records in collection order.
pub fn records_from_outcomes(outcomes: Vec<ScanOutcome>) -> Vec<FileRecord> {
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            ScanOutcome::Record(record) => Some(record),
            ScanOutcome::Skipped => None,
        })
        .collect()
}

/// Count records per [`GroupKey`]. The map is ordered so repeat runs over the
/// same input produce identical rows.
pub fn group_records(records: &[FileRecord]) -> Vec<GroupedRow> {
    let mut counts: BTreeMap<GroupKey, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.group_key()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(
            |((patient_id, accession_number, study_description, series_description), count)| {
                GroupedRow {
                    patient_id,
                    accession_number,
                    study_description,
                    series_description,
                    count,
                }
            },
        )
        .collect()
}

/// Write both reports into `output_dir`, creating it if needed.
///
/// Returns the paths of the summary and grouped files, in that order.
pub fn write_reports(records: &[FileRecord], output_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Falha ao criar diretório de saída {:?}", output_dir))?;

    let summary_path = output_dir.join(SUMMARY_FILE_NAME);
    write_summary(records, &summary_path)?;

    let grouped_path = output_dir.join(GROUPED_FILE_NAME);
    write_grouped(&group_records(records), &grouped_path)?;

    Ok((summary_path, grouped_path))
}

fn write_summary(records: &[FileRecord], path: &Path) -> Result<()> {
    // The header is written by hand so an empty batch still yields a header-only file.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Falha ao criar {:?}", path))?;
    writer.write_record(SUMMARY_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_grouped(rows: &[GroupedRow], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Falha ao criar {:?}", path))?;
    writer.write_record(GROUPED_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
