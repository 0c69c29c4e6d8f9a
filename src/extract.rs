use std::path::Path;

use anyhow::{Context, Result};
use dicom::core::Tag;
use dicom::object::{open_file, ReadError};

use crate::dicom_access::ElementAccess;
use crate::models::{FileRecord, ScanOutcome};

/// Pull the six report attributes out of an already decoded dataset.
pub fn extract_record<T: ElementAccess>(obj: &T) -> FileRecord {
    FileRecord {
        patient_id: obj.element_str(Tag(0x0010, 0x0020)),
        accession_number: obj.element_str(Tag(0x0008, 0x0050)),
        study_description: obj.element_str(Tag(0x0008, 0x1030)),
        series_description: obj.element_str(Tag(0x0008, 0x103E)),
        instance_number: obj.element_str(Tag(0x0020, 0x0013)),
        kvp: obj.element_str(Tag(0x0018, 0x0060)),
    }
}

/// Read one file as a full DICOM dataset, pixel data section included, and
/// extract its record.
///
/// A file that is not DICOM at all yields `ScanOutcome::Skipped`; any other
/// decode failure is an error for the caller, so a malformed dataset aborts
/// the batch instead of being silently dropped.
pub fn read_record(path: &Path) -> Result<ScanOutcome> {
    match open_file(path) {
        Ok(obj) => Ok(ScanOutcome::Record(extract_record(&obj))),
        Err(err) if is_format_mismatch(&err) => Ok(ScanOutcome::Skipped),
        Err(err) => {
            Err(err).with_context(|| format!("Falha ao ler arquivo DICOM {:?}", path))
        }
    }
}

/// True when the file simply is not DICOM: the meta group cannot be parsed
/// (no `DICM` magic code) or the file is shorter than the 128-byte preamble.
fn is_format_mismatch(err: &ReadError) -> bool {
    matches!(
        err,
        ReadError::ParseMetaDataSet { .. } | ReadError::ReadPreambleBytes { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::{DataElement, PrimitiveValue, VR};
    use dicom::dictionary_std::StandardDataDictionary;
    use dicom::object::InMemDicomObject;

    fn dataset_with_all_fields() -> InMemDicomObject<StandardDataDictionary> {
        let mut obj = InMemDicomObject::new_empty_with_dict(StandardDataDictionary);
        obj.put(DataElement::new(
            Tag(0x0010, 0x0020),
            VR::LO,
            PrimitiveValue::from("PAT123"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x0050),
            VR::SH,
            PrimitiveValue::from("ACC001"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x1030),
            VR::LO,
            PrimitiveValue::from("CT Thorax"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x103E),
            VR::LO,
            PrimitiveValue::from("Axial"),
        ));
        obj.put(DataElement::new(
            Tag(0x0020, 0x0013),
            VR::IS,
            PrimitiveValue::from("7"),
        ));
        obj.put(DataElement::new(
            Tag(0x0018, 0x0060),
            VR::DS,
            PrimitiveValue::from("120"),
        ));
        obj
    }

    #[test]
    fn extracts_all_six_attributes() {
        let record = extract_record(&dataset_with_all_fields());
        assert_eq!(record.patient_id.as_deref(), Some("PAT123"));
        assert_eq!(record.accession_number.as_deref(), Some("ACC001"));
        assert_eq!(record.study_description.as_deref(), Some("CT Thorax"));
        assert_eq!(record.series_description.as_deref(), Some("Axial"));
        assert_eq!(record.instance_number.as_deref(), Some("7"));
        assert_eq!(record.kvp.as_deref(), Some("120"));
    }

    #[test]
    fn missing_attributes_become_none_not_errors() {
        let obj = InMemDicomObject::new_empty_with_dict(StandardDataDictionary);
        let record = extract_record(&obj);
        assert_eq!(record.patient_id, None);
        assert_eq!(record.accession_number, None);
        assert_eq!(record.study_description, None);
        assert_eq!(record.series_description, None);
        assert_eq!(record.instance_number, None);
        assert_eq!(record.kvp, None);
    }
}
