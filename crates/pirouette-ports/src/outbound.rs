use async_trait::async_trait;

use pirouette_core::ids::{ClassId, InstructorId, RoomId};
use pirouette_core::schedule::DayOfWeek;

use crate::error::StoreError;
use crate::types::BookedSlot;

/// Read-only access to the existing weekly schedule grid. The validation
/// core never writes through this port.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// All slots on `day` belonging to classes taught by `instructor`,
    /// optionally excluding one class (edit-in-place).
    async fn find_slots_by_instructor_and_day(
        &self,
        instructor: &InstructorId,
        day: DayOfWeek,
        exclude_class: Option<&ClassId>,
    ) -> Result<Vec<BookedSlot>, StoreError>;

    /// All slots on `day` assigned to `room`, across all classes. There is
    /// deliberately no exclusion parameter here: suppressing hits against
    /// the class being edited is the validator's post-filter.
    async fn find_slots_by_room_and_day(
        &self,
        room: &RoomId,
        day: DayOfWeek,
    ) -> Result<Vec<BookedSlot>, StoreError>;
}
