//! Authentication service
//!
//! Handles user registration, login, and token refresh.

use cms_common::auth::verify_password;
use cms_core::entities::User;
use cms_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and issue a token pair
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let user = UserService::new(self.ctx)
            .create_user(request.into())
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_tokens(&user)
    }

    /// Login with email and password.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller: both fail with `InvalidCredentials`.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = User::normalize_email(&request.email);

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(cms_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(cms_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid || !user.is_active() {
            warn!(user_id = %user.id, "Login failed: invalid credentials");
            return Err(ServiceError::App(cms_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user)
    }

    /// Issue a fresh token pair from a valid refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user)
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}
