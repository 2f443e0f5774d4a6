use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::{AuthToken, Role, User};

/// Repository for staff accounts and their login tokens.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, first_name, last_name, email, password_hash, role, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, first_name, last_name, email, password_hash, role, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, first_name, last_name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Accounts are created without a password; the first login sets it.
    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, first_name, last_name, email, password_hash, role, created_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(req.role)
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

        Ok(user)
    }

    pub async fn create_admin(&self, email: &str, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, role)
            VALUES ('Admin', NULL, $1, $2, $3)
            RETURNING user_id, first_name, last_name, email, password_hash, role, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(Role::Admin)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, role = $5
            WHERE user_id = $1
            RETURNING user_id, first_name, last_name, email, password_hash, role, created_at
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(req.role)
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

        Ok(user)
    }

    /// Deleting a user revokes all of their tokens through the cascade.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn set_password(&self, id: Uuid, password_hash: &str) -> Result<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE user_id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn create_token(&self, user_id: Uuid, token: &str) -> Result<AuthToken> {
        let auth_token = sqlx::query_as::<_, AuthToken>(
            r#"
            INSERT INTO auth_tokens (user_id, token)
            VALUES ($1, $2)
            RETURNING token_id, user_id, token, created_at
            "#,
        )
        .bind(user_id)
        .bind(token)
        .fetch_one(self.pool)
        .await?;

        Ok(auth_token)
    }

    pub async fn find_user_by_token(&self, token: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.user_id, u.first_name, u.last_name, u.email,
                   u.password_hash, u.role, u.created_at
            FROM users u
            INNER JOIN auth_tokens t ON t.user_id = u.user_id
            WHERE t.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete_token(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM auth_tokens WHERE token = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
