use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::documentary::{CreateDocumentaryRequest, DocumentaryResponse, PersonResponse};
use crate::error::{Result, StorageError};
use crate::models::{Director, Documentary, Producer};

#[derive(FromRow)]
struct DocumentaryRow {
    documentary_id: Uuid,
    code: String,
    title: String,
    date: NaiveDate,
    subject: String,
    director_code: String,
    director_first_name: String,
    director_last_name: String,
    director_birth_date: NaiveDate,
    producer_code: String,
    producer_first_name: String,
    producer_last_name: String,
    producer_birth_date: NaiveDate,
}

/// Repository for documentaries and their owned director/producer
/// records.
pub struct DocumentaryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DocumentaryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DocumentaryResponse>> {
        let rows: Vec<DocumentaryRow> = sqlx::query_as(
            r#"
            SELECT d.documentary_id, d.code, d.title, d.date, d.subject,
                   r.code AS director_code,
                   r.first_name AS director_first_name,
                   r.last_name AS director_last_name,
                   r.birth_date AS director_birth_date,
                   p.code AS producer_code,
                   p.first_name AS producer_first_name,
                   p.last_name AS producer_last_name,
                   p.birth_date AS producer_birth_date
            FROM documentaries d
            INNER JOIN directors r ON d.director_id = r.director_id
            INNER JOIN producers p ON d.producer_id = p.producer_id
            ORDER BY d.created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(DocumentaryResponse::from).collect())
    }

    /// Creates the director, the producer and the documentary inside one
    /// transaction; a failure on any row persists nothing.
    pub async fn create(&self, req: &CreateDocumentaryRequest) -> Result<DocumentaryResponse> {
        let mut tx = self.pool.begin().await?;

        let director = sqlx::query_as::<_, Director>(
            r#"
            INSERT INTO directors (code, first_name, last_name, birth_date)
            VALUES ($1, $2, $3, $4)
            RETURNING director_id, code, first_name, last_name, birth_date, created_at
            "#,
        )
        .bind(&req.director.code)
        .bind(&req.director.first_name)
        .bind(&req.director.last_name)
        .bind(req.director.birth_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_code_violation)?;

        let producer = sqlx::query_as::<_, Producer>(
            r#"
            INSERT INTO producers (code, first_name, last_name, birth_date)
            VALUES ($1, $2, $3, $4)
            RETURNING producer_id, code, first_name, last_name, birth_date, created_at
            "#,
        )
        .bind(&req.producer.code)
        .bind(&req.producer.first_name)
        .bind(&req.producer.last_name)
        .bind(req.producer.birth_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_code_violation)?;

        let documentary = sqlx::query_as::<_, Documentary>(
            r#"
            INSERT INTO documentaries (code, title, date, subject, director_id, producer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING documentary_id, code, title, date, subject,
                      director_id, producer_id, created_at
            "#,
        )
        .bind(&req.code)
        .bind(&req.title)
        .bind(req.date)
        .bind(&req.subject)
        .bind(director.director_id)
        .bind(producer.producer_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_code_violation)?;

        tx.commit().await?;

        Ok(DocumentaryResponse::from_parts(
            documentary,
            director,
            producer,
        ))
    }
}

fn map_code_violation(e: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.code().as_deref() == Some("23505") {
            return StorageError::ConstraintViolation("Code already exists".to_string());
        }
    }
    StorageError::from(e)
}

impl From<DocumentaryRow> for DocumentaryResponse {
    fn from(row: DocumentaryRow) -> Self {
        Self {
            id: row.documentary_id,
            code: row.code,
            title: row.title,
            date: row.date,
            subject: row.subject,
            director: PersonResponse {
                code: row.director_code,
                first_name: row.director_first_name,
                last_name: row.director_last_name,
                birth_date: row.director_birth_date,
            },
            producer: PersonResponse {
                code: row.producer_code,
                first_name: row.producer_first_name,
                last_name: row.producer_last_name,
                birth_date: row.producer_birth_date,
            },
        }
    }
}
