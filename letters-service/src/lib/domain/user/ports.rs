use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for the authentication gateway.
///
/// Every protected operation goes through `authorize` before touching any
/// owned resource; the resolved identity is the only owner downstream code
/// may use.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// The password is hashed before storage; no token is issued on success,
    /// registration and login are distinct steps.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (detected either
    ///   by pre-check or by the storage uniqueness constraint)
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `email` - Login email address
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Signed bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch; the two
    ///   causes are indistinguishable to the caller
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<String, UserError>;

    /// Verify a bearer token and resolve the user identity it asserts.
    ///
    /// # Arguments
    /// * `token` - Bearer token string
    ///
    /// # Returns
    /// The user ID embedded in the token
    ///
    /// # Errors
    /// * `InvalidToken` - Signature invalid, token expired, or token
    ///   malformed; the specific cause is logged, not returned
    async fn authorize(&self, token: &str) -> Result<UserId, UserError>;
}

/// Persistence operations for user records (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// The check-then-insert sequence in registration is not atomic, so this
    /// operation itself must enforce email uniqueness: of two concurrent
    /// inserts with the same email at most one may succeed.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
}
