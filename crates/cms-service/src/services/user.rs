//! User service
//!
//! The account factory and profile reads. `create_user` normalizes the
//! email and hashes the password before anything touches the store;
//! `create_superuser` runs the same pipeline and then forces the elevated
//! flags and `Admin` role.

use cms_common::auth::{hash_password, validate_password_strength};
use cms_core::entities::User;
use cms_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, NewUser};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new user account.
    ///
    /// # Errors
    /// `ValidationError` for empty/malformed input, `EmailAlreadyExists` /
    /// `PhoneAlreadyExists` on duplicates.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> ServiceResult<User> {
        let email = User::normalize_email(&new_user.email);
        if email.is_empty() {
            return Err(ServiceError::Domain(DomainError::InvalidEmail));
        }

        validate_password_strength(&new_user.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        if let Some(phone) = new_user.phone.as_deref() {
            if self.ctx.user_repo().phone_exists(phone).await? {
                return Err(ServiceError::Domain(DomainError::PhoneAlreadyExists));
            }
        }

        let password_hash =
            hash_password(&new_user.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut user = User::new(self.ctx.generate_id(), email, new_user.fullname);
        user.phone = new_user.phone;
        user.address = new_user.address;
        user.city = new_user.city;
        user.state = new_user.state;
        user.country = new_user.country;
        user.pincode = new_user.pincode;

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// Create a superuser account.
    ///
    /// Runs the regular creation pipeline, then forces `is_staff`,
    /// `is_superuser` and `role = Admin`. Not exposed over REST.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_superuser(&self, new_user: NewUser) -> ServiceResult<User> {
        let mut user = self.create_user(new_user).await?;

        user.elevate_to_superuser();
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user.id, "Superuser created");

        Ok(user)
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}
