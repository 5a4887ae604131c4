//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cms_core::entities::User;
use cms_core::error::DomainError;
use cms_core::traits::{RepoResult, UserRepository};
use cms_core::value_objects::Snowflake;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, email, password_hash, fullname, phone, address, city, state, \
                            country, pincode, is_active, is_staff, is_superuser, role, \
                            created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE phone = $1)
            ",
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let insert = UserInsert::new(user, password_hash);

        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, fullname, phone, address, city, state,
                               country, pincode, is_active, is_staff, is_superuser, role,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ",
        )
        .bind(insert.id)
        .bind(insert.email)
        .bind(insert.password_hash)
        .bind(insert.fullname)
        .bind(insert.phone)
        .bind(insert.address)
        .bind(insert.city)
        .bind(insert.state)
        .bind(insert.country)
        .bind(insert.pincode)
        .bind(insert.is_active)
        .bind(insert.is_staff)
        .bind(insert.is_superuser)
        .bind(insert.role)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| {
                if constraint.contains("phone") {
                    DomainError::PhoneAlreadyExists
                } else {
                    DomainError::EmailAlreadyExists
                }
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET fullname = $2, phone = $3, address = $4, city = $5, state = $6, country = $7,
                pincode = $8, is_active = $9, is_staff = $10, is_superuser = $11, role = $12,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.fullname)
        .bind(user.phone.as_deref())
        .bind(user.address.as_deref())
        .bind(user.city.as_deref())
        .bind(user.state.as_deref())
        .bind(user.country.as_deref())
        .bind(user.pincode)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| {
                if constraint.contains("phone") {
                    DomainError::PhoneAlreadyExists
                } else {
                    DomainError::EmailAlreadyExists
                }
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
