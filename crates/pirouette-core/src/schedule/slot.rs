use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::RoomId;
use crate::time::{TimeOfDay, TimeRange};

use super::DayOfWeek;

/// One weekly recurring time block for a class. A slot without a room is
/// exempt from room-conflict checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    day: DayOfWeek,
    time: TimeRange,
    room_id: Option<RoomId>,
}

impl Slot {
    pub fn new(
        day: DayOfWeek,
        start: TimeOfDay,
        end: TimeOfDay,
        room_id: Option<RoomId>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            day,
            time: TimeRange::new(start, end)?,
            room_id,
        })
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn time(&self) -> &TimeRange {
        &self.time
    }

    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }
}
