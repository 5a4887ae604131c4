//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Content, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a phone number is already taken
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields and flags of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Content Repository
// ============================================================================

/// Owner-scoped access to content rows.
///
/// Every method takes the owning user's id; the effective row set of any
/// call is `{c : c.user_id == owner}`. There is no unscoped accessor.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Find a content row by id, visible only to its owner.
    ///
    /// Returns `None` both for unknown ids and for ids owned by someone
    /// else.
    async fn find_owned(&self, owner: Snowflake, id: Snowflake) -> RepoResult<Option<Content>>;

    /// List all content owned by `owner`, newest first (descending id)
    async fn list_owned(&self, owner: Snowflake) -> RepoResult<Vec<Content>>;

    /// Create a new content row; `content.user_id` is the owner
    async fn create(&self, content: &Content) -> RepoResult<()>;

    /// Update a row if and only if `owner` owns it.
    ///
    /// Fails with `ContentNotFound` when the row is missing or owned by
    /// another user.
    async fn update_owned(&self, owner: Snowflake, content: &Content) -> RepoResult<()>;

    /// Delete a row if and only if `owner` owns it
    async fn delete_owned(&self, owner: Snowflake, id: Snowflake) -> RepoResult<()>;
}
