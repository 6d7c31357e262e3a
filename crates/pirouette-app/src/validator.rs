use pirouette_core::conflict::{ConflictFinding, ConflictKind, ValidationResult};
use pirouette_core::error::DomainError;
use pirouette_core::ids::{ClassId, InstructorId, RoomId};
use pirouette_core::schedule::{DayOfWeek, Slot};
use pirouette_core::time::TimeOfDay;
use pirouette_ports::outbound::ScheduleStore;
use pirouette_ports::types::{ScheduleDraft, SlotDraft, ValidationReport};

use crate::detector::ConflictDetector;
use crate::error::ValidationError;

/// Validates the candidate slots of one class against every existing
/// commitment of the same instructor and rooms. Stateless per call: safe to
/// invoke on every editor keystroke.
pub struct ScheduleValidationService<S: ScheduleStore> {
    store: S,
}

impl<S: ScheduleStore> ScheduleValidationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parses a raw editor draft at the boundary, then validates. A draft
    /// that cannot be parsed fails the whole call; no partial results.
    pub async fn validate(&self, draft: &ScheduleDraft) -> Result<ValidationResult, ValidationError> {
        let instructor = parse_optional(draft.instructor_id.as_deref(), InstructorId::parse)?;
        let exclude_class = parse_optional(draft.exclude_class_id.as_deref(), ClassId::parse)?;
        let slots = draft
            .schedules
            .iter()
            .map(parse_slot)
            .collect::<Result<Vec<_>, _>>()?;
        self.validate_slots(&slots, instructor.as_ref(), exclude_class.as_ref())
            .await
    }

    /// Same as [`validate`](Self::validate), rendered as the wire report
    /// consumed by the class editor.
    pub async fn validate_to_report(
        &self,
        draft: &ScheduleDraft,
    ) -> Result<ValidationReport, ValidationError> {
        Ok(self.validate(draft).await?.into())
    }

    /// Validates already-parsed slots in submission order. Findings keep
    /// that order, instructor before room within one slot.
    pub async fn validate_slots(
        &self,
        slots: &[Slot],
        instructor: Option<&InstructorId>,
        exclude_class: Option<&ClassId>,
    ) -> Result<ValidationResult, ValidationError> {
        let detector = ConflictDetector::new(&self.store);
        let mut findings = Vec::new();

        for (index, slot) in slots.iter().enumerate() {
            if let Some(conflicting) = detector
                .check_instructor(instructor, slot.day(), slot.time(), exclude_class)
                .await?
            {
                findings.push(ConflictFinding {
                    kind: ConflictKind::Instructor,
                    schedule_index: index,
                    message: format!(
                        "instructor already teaches '{}' on this day at {}",
                        conflicting.class_name, conflicting.time_range
                    ),
                    conflicting,
                });
            }

            if let Some(room) = slot.room_id() {
                if let Some(conflicting) = detector
                    .check_room(Some(room), slot.day(), slot.time())
                    .await?
                {
                    // The room query never excludes the edited class; a hit
                    // against it is suppressed here, not in the detector.
                    let edited_class = exclude_class.is_some_and(|ex| ex == &conflicting.class_id);
                    if !edited_class {
                        findings.push(ConflictFinding {
                            kind: ConflictKind::Room,
                            schedule_index: index,
                            message: format!(
                                "room is booked by '{}' on this day at {}",
                                conflicting.class_name, conflicting.time_range
                            ),
                            conflicting,
                        });
                    }
                }
            }
        }

        Ok(ValidationResult::from_findings(findings))
    }
}

fn parse_optional<T>(
    raw: Option<&str>,
    parse: impl Fn(&str) -> Result<T, DomainError>,
) -> Result<Option<T>, DomainError> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse(s).map(Some),
    }
}

fn parse_slot(draft: &SlotDraft) -> Result<Slot, DomainError> {
    let day = DayOfWeek::from_index(draft.day_of_week)?;
    let start = TimeOfDay::parse(&draft.start_time)?;
    let end = TimeOfDay::parse(&draft.end_time)?;
    let room = parse_optional(draft.room_id.as_deref(), RoomId::parse)?;
    Slot::new(day, start, end, room)
}
