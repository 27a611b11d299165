//! One-shot document extraction pipeline.
//!
//! Composes the segmenter and the field extractor into the batch operation
//! that turns a guidelines document into structured records. This runs once,
//! single-threaded, before the resolver ever sees a query; it is not part of
//! the live request path.

use crate::fields::extract_fields;
use crate::record::GuidelineRecord;
use crate::segmenter::segment;

/// Extracts one [`GuidelineRecord`] per section of `document`, in document order.
///
/// A section whose body contains none of the recognized labels still yields a
/// record; its fields are simply empty. Extraction never aborts on a single
/// malformed section.
pub fn extract_records(document: &str) -> Vec<GuidelineRecord> {
    let records: Vec<GuidelineRecord> = segment(document)
        .into_iter()
        .map(|section| {
            let fields = extract_fields(&section.body);
            GuidelineRecord {
                section_code: section.code,
                condition: section.title,
                definition: fields.definition,
                investigations: fields.investigations,
                treatment: fields.treatment,
            }
        })
        .collect();

    tracing::info!("extracted {} guideline records", records.len());

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_records_round_trip() {
        let document = "\
National Standard Treatment Guidelines

5.2.1 Tuberculosis
Definition:
A chronic infectious disease.
Investigations:
Sputum smear
Chest X-ray
Treatment:
Isoniazid 300mg daily

7.3 Urinary Tract Infection
Description: Bacterial infection of the urinary tract.
Investigations:
Urinalysis
Management:
Nitrofurantoin 100mg

12.1.4 Appendicitis
Overview: Acute inflammation of the appendix.
Investigation:
Abdominal ultrasound
Treatment:
Appendicectomy
";
        let records = extract_records(document);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].section_code.as_str(), "5.2.1");
        assert_eq!(records[0].condition, "Tuberculosis");
        assert_eq!(records[0].definition, "A chronic infectious disease.");
        assert_eq!(records[0].investigations, vec!["Sputum smear", "Chest X-ray"]);
        assert_eq!(records[0].treatment, vec!["Isoniazid 300mg daily"]);

        assert_eq!(records[1].section_code.as_str(), "7.3");
        assert_eq!(records[1].definition, "Bacterial infection of the urinary tract.");
        assert_eq!(records[1].treatment, vec!["Nitrofurantoin 100mg"]);

        // The last section is bounded by end of input, not a following code.
        assert_eq!(records[2].section_code.as_str(), "12.1.4");
        assert_eq!(records[2].treatment, vec!["Appendicectomy"]);
    }

    #[test]
    fn test_extract_records_tolerates_label_free_sections() {
        let document = "3.3 Scabies\nnarrative only, no labels\n3.4 Impetigo\nTreatment:\nFlucloxacillin\n";
        let records = extract_records(document);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].definition, "");
        assert!(records[0].investigations.is_empty());
        assert!(records[0].treatment.is_empty());
        assert_eq!(records[1].treatment, vec!["Flucloxacillin"]);
    }

    #[test]
    fn test_extract_records_empty_document() {
        assert!(extract_records("").is_empty());
    }
}
