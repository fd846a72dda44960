//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shiftlog_core::error::{AppError, ErrorKind};
use shiftlog_core::result::AppResult;
use shiftlog_entity::user::{CreateUser, User};

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, employee_id, password_hash, department, section, job, shift, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.employee_id)
        .bind(&data.password_hash)
        .bind(&data.department)
        .bind(&data.section)
        .bind(&data.job)
        .bind(&data.shift)
        .bind(data.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by employee ID (the login identifier).
    pub async fn find_by_employee_id(&self, employee_id: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE employee_id = $1")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// List all users, favorites first, then by name.
    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY is_favorite DESC, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Search users by name, employee ID, or department.
    pub async fn search(&self, term: &str) -> AppResult<Vec<User>> {
        let pattern = format!("%{term}%");
        sqlx::query_as::<_, User>(
            "SELECT * FROM users \
             WHERE name ILIKE $1 OR employee_id ILIKE $1 OR department ILIKE $1 \
             ORDER BY name",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search users", e))
    }

    /// Overwrite a user's mutable profile fields.
    pub async fn update(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET name = $2, employee_id = $3, department = $4, section = $5, \
             job = $6, shift = $7, is_admin = $8 WHERE id = $1",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.employee_id)
        .bind(&user.department)
        .bind(&user.section)
        .bind(&user.job)
        .bind(&user.shift)
        .bind(user.is_admin)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?;
        Ok(())
    }

    /// Replace a user's password hash.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;
        Ok(())
    }

    /// Flip the favorite flag, returning the new value.
    pub async fn toggle_favorite(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "UPDATE users SET is_favorite = NOT is_favorite WHERE id = $1 RETURNING is_favorite",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle favorite", e))
    }

    /// Delete a user together with their reports, templates, and sessions,
    /// inside one transaction. Audit entries keep their rows; the schema
    /// nulls their user references.
    pub async fn delete_cascade(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM reports WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user reports", e)
            })?;

        sqlx::query("DELETE FROM report_templates WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user templates", e)
            })?;

        sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user sessions", e)
            })?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user", e)
            })?;

        if result.rows_affected() == 0 {
            tx.rollback().await.ok();
            return Err(AppError::not_found("User not found"));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit user deletion", e)
        })?;
        Ok(())
    }

    /// Count all users.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
