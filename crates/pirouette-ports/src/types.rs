use serde::{Deserialize, Serialize};

use pirouette_core::conflict::{ConflictKind, ConflictingClass, ValidationResult};
use pirouette_core::ids::{ClassId, RoomId};
use pirouette_core::schedule::DayOfWeek;
use pirouette_core::time::TimeRange;

/// An existing slot as returned by the store, annotated with its owning
/// class so conflict messages and the edit post-filter can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSlot {
    pub class_id: ClassId,
    pub class_name: String,
    pub day: DayOfWeek,
    pub time: TimeRange,
    pub room_id: Option<RoomId>,
}

impl From<&BookedSlot> for ConflictingClass {
    fn from(booked: &BookedSlot) -> Self {
        Self {
            class_id: booked.class_id.clone(),
            class_name: booked.class_name.clone(),
            time_range: booked.time.to_string(),
        }
    }
}

/// One candidate weekly slot as submitted by the class editor, before
/// domain validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDraft {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// The full validation request: candidate slots in submission order, the
/// instructor (absent or empty means unassigned), and the id of the class
/// being edited, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub schedules: Vec<SlotDraft>,
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub exclude_class_id: Option<String>,
}

/// Caller-facing verdict. `valid: false` means conflicts were found;
/// a failed call (store error, malformed draft) is reported separately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ReportedConflict>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedConflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub schedule_index: usize,
    pub message: String,
    pub conflicting_class: String,
}

impl From<ValidationResult> for ValidationReport {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            errors: result
                .findings
                .into_iter()
                .map(|finding| ReportedConflict {
                    kind: finding.kind,
                    schedule_index: finding.schedule_index,
                    message: finding.message,
                    conflicting_class: finding.conflicting.class_name,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pirouette_core::conflict::ConflictFinding;

    #[test]
    fn draft_deserializes_from_editor_payload() {
        let body = r#"{
            "schedules": [
                {"dayOfWeek": 1, "startTime": "18:00", "endTime": "19:30",
                 "roomId": "7b4f9d52-4a0c-4a0e-9d8e-0a1b2c3d4e5f"},
                {"dayOfWeek": 3, "startTime": "10:00", "endTime": "11:00"}
            ],
            "instructorId": "f4f7a1f0-33c2-4cf5-9d3c-2b1a0c9d8e7f",
            "excludeClassId": null
        }"#;

        let draft: ScheduleDraft = serde_json::from_str(body).unwrap();
        assert_eq!(draft.schedules.len(), 2);
        assert_eq!(draft.schedules[0].day_of_week, 1);
        assert_eq!(draft.schedules[1].room_id, None);
        assert!(draft.instructor_id.is_some());
        assert!(draft.exclude_class_id.is_none());
    }

    #[test]
    fn report_serializes_with_contract_keys() {
        let finding = ConflictFinding {
            kind: ConflictKind::Room,
            schedule_index: 1,
            message: "room is booked by 'Ballet II' on this day at 17:00 - 18:30".into(),
            conflicting: ConflictingClass {
                class_id: ClassId::new(),
                class_name: "Ballet II".into(),
                time_range: "17:00 - 18:30".into(),
            },
        };
        let report = ValidationReport::from(ValidationResult::from_findings(vec![finding]));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["type"], "room");
        assert_eq!(json["errors"][0]["scheduleIndex"], 1);
        assert_eq!(json["errors"][0]["conflictingClass"], "Ballet II");
    }

    #[test]
    fn clean_result_maps_to_empty_report() {
        let report = ValidationReport::from(ValidationResult::from_findings(vec![]));
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }
}
