use serde::{Deserialize, Serialize};

use crate::ids::ClassId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Instructor,
    Room,
}

/// The class a candidate slot collided with, precise enough for an editor
/// UI to highlight: id, display name and the booked range as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingClass {
    pub class_id: ClassId,
    pub class_name: String,
    pub time_range: String,
}

/// One detected collision, attributed to the candidate slot by its position
/// in the submitted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictFinding {
    pub kind: ConflictKind,
    pub schedule_index: usize,
    pub message: String,
    pub conflicting: ConflictingClass,
}

/// Aggregate verdict for one validation call. Findings keep slot submission
/// order, with the instructor finding before the room finding per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub findings: Vec<ConflictFinding>,
}

impl ValidationResult {
    pub fn from_findings(findings: Vec<ConflictFinding>) -> Self {
        Self {
            valid: findings.is_empty(),
            findings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(kind: ConflictKind, schedule_index: usize) -> ConflictFinding {
        ConflictFinding {
            kind,
            schedule_index,
            message: "overlap".into(),
            conflicting: ConflictingClass {
                class_id: ClassId::new(),
                class_name: "Ballet II".into(),
                time_range: "17:00 - 18:30".into(),
            },
        }
    }

    #[test]
    fn no_findings_means_valid() {
        let result = ValidationResult::from_findings(vec![]);
        assert!(result.valid);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn any_finding_means_invalid() {
        let result = ValidationResult::from_findings(vec![finding(ConflictKind::Room, 0)]);
        assert!(!result.valid);
        assert_eq!(result.findings.len(), 1);
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConflictKind::Instructor).unwrap(),
            "\"instructor\""
        );
        assert_eq!(serde_json::to_string(&ConflictKind::Room).unwrap(), "\"room\"");
    }
}
