use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::screening::{
    CreateScreeningRequest, PersonNameInfo, PublicDocumentaryInfo, PublicScreeningEntry,
};
use crate::error::{Result, StorageError};
use crate::models::Screening;

#[derive(FromRow)]
struct PublishedRow {
    screening_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
    room: String,
    documentary_id: Uuid,
    code: String,
    title: String,
    subject: String,
    director_first_name: String,
    director_last_name: String,
    producer_first_name: String,
    producer_last_name: String,
}

/// Repository for screenings. Owns the room/time conflict rule: the
/// (date, time, room) triple is checked before insert and backed by a
/// unique constraint for concurrent writers.
pub struct ScreeningRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScreeningRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Screening>> {
        let screenings = sqlx::query_as::<_, Screening>(
            r#"
            SELECT screening_id, documentary_id, date, time, room, is_published, created_at
            FROM screenings
            ORDER BY date, time
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(screenings)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Screening> {
        let screening = sqlx::query_as::<_, Screening>(
            r#"
            SELECT screening_id, documentary_id, date, time, room, is_published, created_at
            FROM screenings
            WHERE screening_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(screening)
    }

    /// Exact-match conflict detection: two screenings collide only when
    /// they share the identical (date, time, room) triple. There is no
    /// duration field, so wall-clock overlap is not considered.
    pub async fn create(&self, req: &CreateScreeningRequest) -> Result<Screening> {
        let documentary_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM documentaries WHERE documentary_id = $1)",
        )
        .bind(req.documentary_id)
        .fetch_one(self.pool)
        .await?;

        if !documentary_exists {
            return Err(StorageError::NotFound);
        }

        let slot_taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM screenings
                WHERE date = $1 AND time = $2 AND room = $3
            )
            "#,
        )
        .bind(req.date)
        .bind(req.time)
        .bind(&req.room)
        .fetch_one(self.pool)
        .await?;

        if slot_taken {
            return Err(StorageError::ScheduleConflict(
                "This room is already booked at that date and time".to_string(),
            ));
        }

        let screening = sqlx::query_as::<_, Screening>(
            r#"
            INSERT INTO screenings (documentary_id, date, time, room, is_published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING screening_id, documentary_id, date, time, room, is_published, created_at
            "#,
        )
        .bind(req.documentary_id)
        .bind(req.date)
        .bind(req.time)
        .bind(&req.room)
        .bind(req.is_published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // The unique constraint is the backstop for concurrent creates.
            if let sqlx::Error::Database(ref db_err) = e {
                match db_err.code().as_deref() {
                    Some("23505") => {
                        return StorageError::ScheduleConflict(
                            "This room is already booked at that date and time".to_string(),
                        );
                    }
                    Some("23503") => return StorageError::NotFound,
                    _ => {}
                }
            }
            StorageError::from(e)
        })?;

        Ok(screening)
    }

    /// Flips the publication flag and nothing else; idempotent.
    pub async fn set_published(&self, id: Uuid, published: bool) -> Result<Screening> {
        let screening = sqlx::query_as::<_, Screening>(
            r#"
            UPDATE screenings
            SET is_published = $2
            WHERE screening_id = $1
            RETURNING screening_id, documentary_id, date, time, room, is_published, created_at
            "#,
        )
        .bind(id)
        .bind(published)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(screening)
    }

    /// Deleting a screening removes its ratings through the cascade.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM screenings WHERE screening_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn list_published(&self) -> Result<Vec<PublicScreeningEntry>> {
        let rows: Vec<PublishedRow> = sqlx::query_as(
            r#"
            SELECT s.screening_id, s.date, s.time, s.room,
                   d.documentary_id, d.code, d.title, d.subject,
                   r.first_name AS director_first_name,
                   r.last_name AS director_last_name,
                   p.first_name AS producer_first_name,
                   p.last_name AS producer_last_name
            FROM screenings s
            INNER JOIN documentaries d ON s.documentary_id = d.documentary_id
            INNER JOIN directors r ON d.director_id = r.director_id
            INNER JOIN producers p ON d.producer_id = p.producer_id
            WHERE s.is_published = TRUE
            ORDER BY s.date, s.time
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PublicScreeningEntry::from).collect())
    }
}

impl From<PublishedRow> for PublicScreeningEntry {
    fn from(row: PublishedRow) -> Self {
        Self {
            id: row.screening_id,
            date: row.date,
            time: row.time,
            room: row.room,
            documentary: PublicDocumentaryInfo {
                id: row.documentary_id,
                code: row.code,
                title: row.title,
                subject: row.subject,
                director: PersonNameInfo {
                    first_name: row.director_first_name,
                    last_name: row.director_last_name,
                },
                producer: PersonNameInfo {
                    first_name: row.producer_first_name,
                    last_name: row.producer_last_name,
                },
            },
        }
    }
}
