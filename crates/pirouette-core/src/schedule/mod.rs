pub mod day;
pub mod slot;

use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, InstructorId};

pub use day::DayOfWeek;
pub use slot::Slot;

/// The weekly schedule of one class offering: its slots plus the identity
/// used to exclude the class from conflict search when it is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSchedule {
    class_id: ClassId,
    name: String,
    instructor_id: Option<InstructorId>,
    slots: Vec<Slot>,
}

impl ClassSchedule {
    pub fn new(name: String, instructor_id: Option<InstructorId>, slots: Vec<Slot>) -> Self {
        Self {
            class_id: ClassId::new(),
            name,
            instructor_id,
            slots,
        }
    }

    /// Rehydrates a schedule with a known id, for edits and store round-trips.
    pub fn from_parts(
        class_id: ClassId,
        name: String,
        instructor_id: Option<InstructorId>,
        slots: Vec<Slot>,
    ) -> Self {
        Self {
            class_id,
            name,
            instructor_id,
            slots,
        }
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructor_id(&self) -> Option<&InstructorId> {
        self.instructor_id.as_ref()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeOfDay;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn class_without_slots_is_allowed() {
        // A class that has not been scheduled yet simply has nothing to conflict
        let class = ClassSchedule::new("Salsa Beginners".into(), Some(InstructorId::new()), vec![]);
        assert!(class.slots().is_empty());
    }

    #[test]
    fn class_may_have_no_instructor() {
        let day = DayOfWeek::from_index(2).unwrap();
        let slot = Slot::new(day, t("17:00"), t("18:30"), None).unwrap();
        let class = ClassSchedule::new("Open Practice".into(), None, vec![slot]);
        assert!(class.instructor_id().is_none());
        assert_eq!(class.slots().len(), 1);
    }
}
