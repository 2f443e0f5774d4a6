use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::rating::{BulkRatingRequest, CreateRatingRequest};
use crate::error::{Result, StorageError};
use crate::models::Rating;

/// Repository for jury ratings. Owns the one-rating-per-member rule:
/// the (screening, jury member) pair is checked before insert and backed
/// by a unique constraint for concurrent writers.
pub struct RatingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RatingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Rating>> {
        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT rating_id, screening_id, jury_member_id, score, comment, created_at
            FROM ratings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(ratings)
    }

    pub async fn list_for_screening(&self, screening_id: Uuid) -> Result<Vec<Rating>> {
        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT rating_id, screening_id, jury_member_id, score, comment, created_at
            FROM ratings
            WHERE screening_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(screening_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ratings)
    }

    pub async fn scores_for_screening(&self, screening_id: Uuid) -> Result<Vec<Decimal>> {
        let screening_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM screenings WHERE screening_id = $1)",
        )
        .bind(screening_id)
        .fetch_one(self.pool)
        .await?;

        if !screening_exists {
            return Err(StorageError::NotFound);
        }

        let scores =
            sqlx::query_scalar::<_, Decimal>("SELECT score FROM ratings WHERE screening_id = $1")
                .bind(screening_id)
                .fetch_all(self.pool)
                .await?;

        Ok(scores)
    }

    /// A member rates a screening at most once; an existing rating is
    /// never overwritten.
    pub async fn create(&self, req: &CreateRatingRequest) -> Result<Rating> {
        let screening_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM screenings WHERE screening_id = $1)",
        )
        .bind(req.screening_id)
        .fetch_one(self.pool)
        .await?;

        if !screening_exists {
            return Err(StorageError::NotFound);
        }

        let member_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM jury_members WHERE jury_member_id = $1)",
        )
        .bind(req.jury_member_id)
        .fetch_one(self.pool)
        .await?;

        if !member_exists {
            return Err(StorageError::NotFound);
        }

        let already_rated = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM ratings
                WHERE screening_id = $1 AND jury_member_id = $2
            )
            "#,
        )
        .bind(req.screening_id)
        .bind(req.jury_member_id)
        .fetch_one(self.pool)
        .await?;

        if already_rated {
            return Err(StorageError::DuplicateRating(
                "This jury member has already rated this screening".to_string(),
            ));
        }

        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (screening_id, jury_member_id, score, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING rating_id, screening_id, jury_member_id, score, comment, created_at
            "#,
        )
        .bind(req.screening_id)
        .bind(req.jury_member_id)
        .bind(Decimal::from_f64_retain(req.score).unwrap_or_default())
        .bind(&req.comment)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // The unique constraint is the backstop for concurrent submits.
            if let sqlx::Error::Database(ref db_err) = e {
                match db_err.code().as_deref() {
                    Some("23505") => {
                        return StorageError::DuplicateRating(
                            "This jury member has already rated this screening".to_string(),
                        );
                    }
                    Some("23503") => return StorageError::NotFound,
                    _ => {}
                }
            }
            StorageError::from(e)
        })?;

        Ok(rating)
    }

    /// Bulk submission for one screening inside a single transaction.
    /// Members who already rated the screening are skipped silently;
    /// only the newly created ratings are returned.
    pub async fn create_bulk(&self, req: &BulkRatingRequest) -> Result<Vec<Rating>> {
        let mut tx = self.pool.begin().await?;

        let screening_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM screenings WHERE screening_id = $1)",
        )
        .bind(req.screening_id)
        .fetch_one(&mut *tx)
        .await?;

        if !screening_exists {
            return Err(StorageError::NotFound);
        }

        let mut created = Vec::new();

        for entry in &req.ratings {
            let member_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM jury_members WHERE jury_member_id = $1)",
            )
            .bind(entry.jury_member_id)
            .fetch_one(&mut *tx)
            .await?;

            if !member_exists {
                return Err(StorageError::NotFound);
            }

            let rating = sqlx::query_as::<_, Rating>(
                r#"
                INSERT INTO ratings (screening_id, jury_member_id, score, comment)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (screening_id, jury_member_id) DO NOTHING
                RETURNING rating_id, screening_id, jury_member_id, score, comment, created_at
                "#,
            )
            .bind(req.screening_id)
            .bind(entry.jury_member_id)
            .bind(Decimal::from_f64_retain(entry.score).unwrap_or_default())
            .bind(&entry.comment)
            .fetch_optional(&mut *tx)
            .await?;

            if let Some(rating) = rating {
                created.push(rating);
            }
        }

        tx.commit().await?;

        Ok(created)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM ratings WHERE rating_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
