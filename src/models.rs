//
// models.rs
// Dicom-Summary-rs
//
// Defines the record, outcome, and grouping structures shared by the scanner and the report writer.
//
// Thales Matheus Mendonça Santos - December 2025

use serde::{Deserialize, Serialize};

/// Composite identity used to aggregate records in the grouped report.
pub type GroupKey = (String, String, String, String);

/// Fields extracted from one DICOM file, one row of the per-file report.
///
/// Every field is optional: an attribute missing from the dataset becomes an
/// empty CSV cell, never a dropped row. InstanceNumber and KVP keep the
/// textual form decoded from their IS/DS elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "PatientID")]
    pub patient_id: Option<String>,
    #[serde(rename = "AccessionNumber")]
    pub accession_number: Option<String>,
    #[serde(rename = "StudyDescription")]
    pub study_description: Option<String>,
    #[serde(rename = "SeriesDescription")]
    pub series_description: Option<String>,
    #[serde(rename = "InstanceNumber")]
    pub instance_number: Option<String>,
    #[serde(rename = "KVP")]
    pub kvp: Option<String>,
}

impl FileRecord {
    /// Key the grouped report aggregates on; absent fields count as empty.
    pub fn group_key(&self) -> GroupKey {
        (
            self.patient_id.clone().unwrap_or_default(),
            self.accession_number.clone().unwrap_or_default(),
            self.study_description.clone().unwrap_or_default(),
            self.series_description.clone().unwrap_or_default(),
        )
    }
}

/// Result of trying to read one file: a record, or a marker that the file is
/// not DICOM and must not produce a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Record(FileRecord),
    Skipped,
}

/// One row of the grouped report: a distinct [`GroupKey`] and how many
/// records share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedRow {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "AccessionNumber")]
    pub accession_number: String,
    #[serde(rename = "StudyDescription")]
    pub study_description: String,
    #[serde(rename = "SeriesDescription")]
    pub series_description: String,
    #[serde(rename = "count")]
    pub count: u64,
}
