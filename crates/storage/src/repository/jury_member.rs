use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::jury_member::{CreateJuryMemberRequest, UpdateJuryMemberRequest};
use crate::error::{Result, StorageError};
use crate::models::JuryMember;

/// Repository for jury members.
pub struct JuryMemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> JuryMemberRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<JuryMember>> {
        let members = sqlx::query_as::<_, JuryMember>(
            r#"
            SELECT jury_member_id, first_name, last_name, expertise, role,
                   email, phone, bio, created_at
            FROM jury_members
            ORDER BY first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<JuryMember> {
        let member = sqlx::query_as::<_, JuryMember>(
            r#"
            SELECT jury_member_id, first_name, last_name, expertise, role,
                   email, phone, bio, created_at
            FROM jury_members
            WHERE jury_member_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    pub async fn create(&self, req: &CreateJuryMemberRequest) -> Result<JuryMember> {
        let member = sqlx::query_as::<_, JuryMember>(
            r#"
            INSERT INTO jury_members (first_name, last_name, expertise, role, email, phone, bio)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING jury_member_id, first_name, last_name, expertise, role,
                      email, phone, bio, created_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.expertise)
        .bind(&req.role)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.bio)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation("Email already exists".to_string());
                }
            }
            StorageError::from(e)
        })?;

        Ok(member)
    }

    /// Absent fields keep the stored values.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &JuryMember,
        req: &UpdateJuryMemberRequest,
    ) -> Result<JuryMember> {
        let first_name = req
            .first_name
            .clone()
            .unwrap_or_else(|| existing.first_name.clone());
        let last_name = req
            .last_name
            .clone()
            .unwrap_or_else(|| existing.last_name.clone());
        let expertise = req
            .expertise
            .clone()
            .unwrap_or_else(|| existing.expertise.clone());
        let role = req.role.clone().or_else(|| existing.role.clone());
        let email = req.email.clone().or_else(|| existing.email.clone());
        let phone = req.phone.clone().or_else(|| existing.phone.clone());
        let bio = req.bio.clone().or_else(|| existing.bio.clone());

        let member = sqlx::query_as::<_, JuryMember>(
            r#"
            UPDATE jury_members
            SET first_name = $2, last_name = $3, expertise = $4, role = $5,
                email = $6, phone = $7, bio = $8
            WHERE jury_member_id = $1
            RETURNING jury_member_id, first_name, last_name, expertise, role,
                      email, phone, bio, created_at
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(expertise)
        .bind(role)
        .bind(email)
        .bind(phone)
        .bind(bio)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation("Email already exists".to_string());
                }
            }
            StorageError::from(e)
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    /// Deleting a jury member removes their ratings through the cascade.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM jury_members WHERE jury_member_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
