use async_trait::async_trait;

use pirouette_core::ids::{ClassId, InstructorId, RoomId};
use pirouette_core::schedule::{ClassSchedule, DayOfWeek};
use pirouette_core::time::{TimeOfDay, TimeRange};
use pirouette_ports::error::StoreError;
use pirouette_ports::outbound::ScheduleStore;
use pirouette_ports::types::BookedSlot;

use super::{store_err, SqliteDb};

type SlotRow = (String, String, i64, i64, i64, Option<String>);

#[async_trait]
impl ScheduleStore for SqliteDb {
    async fn find_slots_by_instructor_and_day(
        &self,
        instructor: &InstructorId,
        day: DayOfWeek,
        exclude_class: Option<&ClassId>,
    ) -> Result<Vec<BookedSlot>, StoreError> {
        let rows: Vec<SlotRow> = match exclude_class {
            Some(exclude) => {
                sqlx::query_as(
                    "SELECT c.id, c.name, s.day, s.start_min, s.end_min, s.room_id
                     FROM slots s JOIN classes c ON c.id = s.class_id
                     WHERE c.instructor_id = ? AND s.day = ? AND c.id != ?
                     ORDER BY s.id",
                )
                .bind(instructor.to_string())
                .bind(day.index() as i64)
                .bind(exclude.to_string())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(
                    "SELECT c.id, c.name, s.day, s.start_min, s.end_min, s.room_id
                     FROM slots s JOIN classes c ON c.id = s.class_id
                     WHERE c.instructor_id = ? AND s.day = ?
                     ORDER BY s.id",
                )
                .bind(instructor.to_string())
                .bind(day.index() as i64)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(store_err)?;

        tracing::debug!(
            instructor = %instructor,
            day = day.index(),
            slots = rows.len(),
            "instructor slot lookup"
        );
        rows.into_iter().map(booked_from_row).collect()
    }

    async fn find_slots_by_room_and_day(
        &self,
        room: &RoomId,
        day: DayOfWeek,
    ) -> Result<Vec<BookedSlot>, StoreError> {
        // Spans all classes by contract; the edited class is filtered out
        // by the validator, never here.
        let rows: Vec<SlotRow> = sqlx::query_as(
            "SELECT c.id, c.name, s.day, s.start_min, s.end_min, s.room_id
             FROM slots s JOIN classes c ON c.id = s.class_id
             WHERE s.room_id = ? AND s.day = ?
             ORDER BY s.id",
        )
        .bind(room.to_string())
        .bind(day.index() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        tracing::debug!(room = %room, day = day.index(), slots = rows.len(), "room slot lookup");
        rows.into_iter().map(booked_from_row).collect()
    }
}

impl SqliteDb {
    /// Seeds or replaces one class's schedule. This is the write path of the
    /// surrounding application and of tests; the store port stays read-only.
    pub async fn insert_class(&self, class: &ClassSchedule) -> Result<(), StoreError> {
        let id = class.class_id().to_string();

        sqlx::query(
            "INSERT INTO classes (id, name, instructor_id) VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE
             SET name = excluded.name, instructor_id = excluded.instructor_id",
        )
        .bind(&id)
        .bind(class.name())
        .bind(class.instructor_id().map(ToString::to_string))
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        sqlx::query("DELETE FROM slots WHERE class_id = ?")
            .bind(&id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        for slot in class.slots() {
            sqlx::query(
                "INSERT INTO slots (class_id, day, start_min, end_min, room_id)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(slot.day().index() as i64)
            .bind(slot.time().start().minutes() as i64)
            .bind(slot.time().end().minutes() as i64)
            .bind(slot.room_id().map(ToString::to_string))
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        }

        Ok(())
    }
}

fn booked_from_row(row: SlotRow) -> Result<BookedSlot, StoreError> {
    let (class_id, class_name, day, start_min, end_min, room_id) = row;
    let invalid = |what: String| StoreError::Persistence(format!("corrupt slot row: {what}"));

    let class_id = ClassId::parse(&class_id).map_err(|e| invalid(e.to_string()))?;
    let day = u8::try_from(day)
        .ok()
        .and_then(|d| DayOfWeek::from_index(d).ok())
        .ok_or_else(|| invalid(format!("day {day}")))?;
    let start = time_from_minutes(start_min).ok_or_else(|| invalid(format!("start {start_min}")))?;
    let end = time_from_minutes(end_min).ok_or_else(|| invalid(format!("end {end_min}")))?;
    let time = TimeRange::new(start, end).map_err(|e| invalid(e.to_string()))?;
    let room_id = room_id
        .map(|r| RoomId::parse(&r))
        .transpose()
        .map_err(|e| invalid(e.to_string()))?;

    Ok(BookedSlot {
        class_id,
        class_name,
        day,
        time,
        room_id,
    })
}

fn time_from_minutes(minutes: i64) -> Option<TimeOfDay> {
    u16::try_from(minutes)
        .ok()
        .and_then(|m| TimeOfDay::from_minutes(m).ok())
}
