use pirouette_core::conflict::ConflictingClass;
use pirouette_core::ids::{ClassId, InstructorId, RoomId};
use pirouette_core::schedule::DayOfWeek;
use pirouette_core::time::TimeRange;
use pirouette_ports::error::StoreError;
use pirouette_ports::outbound::ScheduleStore;

/// Resource-scoped conflict lookup against the schedule store. Each check
/// returns the first overlapping booking in the store's natural return
/// order, or `None` when the slot is clean.
pub struct ConflictDetector<'a, S: ScheduleStore> {
    store: &'a S,
}

impl<'a, S: ScheduleStore> ConflictDetector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// An unassigned instructor cannot conflict; the store is not queried.
    /// Exclusion of the edited class is applied at query time here.
    pub async fn check_instructor(
        &self,
        instructor: Option<&InstructorId>,
        day: DayOfWeek,
        time: &TimeRange,
        exclude_class: Option<&ClassId>,
    ) -> Result<Option<ConflictingClass>, StoreError> {
        let Some(instructor) = instructor else {
            return Ok(None);
        };
        let booked = self
            .store
            .find_slots_by_instructor_and_day(instructor, day, exclude_class)
            .await?;
        Ok(booked
            .iter()
            .find(|b| time.overlaps(&b.time))
            .map(ConflictingClass::from))
    }

    /// The room lookup runs across all classes, including the one being
    /// edited; suppressing hits against that class is the caller's job.
    pub async fn check_room(
        &self,
        room: Option<&RoomId>,
        day: DayOfWeek,
        time: &TimeRange,
    ) -> Result<Option<ConflictingClass>, StoreError> {
        let Some(room) = room else {
            return Ok(None);
        };
        let booked = self.store.find_slots_by_room_and_day(room, day).await?;
        Ok(booked
            .iter()
            .find(|b| time.overlaps(&b.time))
            .map(ConflictingClass::from))
    }
}
