use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Authentication gateway implementation.
///
/// Orchestrates registration (validate, hash, store), login (lookup, verify,
/// issue token), and the authorization check every protected operation runs
/// through. Detailed token and password failures are translated into the
/// coarse client-facing taxonomy here; the cause stays in the logs.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication gateway with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `token_service` - Token issuance and verification
    pub fn new(repository: Arc<UR>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Pre-check for a friendlier error; the storage uniqueness constraint
        // remains the authority under concurrent registration
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, UserError> {
        // An unknown email and a wrong password produce the same outcome so
        // the response never reveals whether the email is registered
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify(password, &user.password_hash)?;

        if !matches {
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(user.id)
            .map_err(|e| UserError::Unknown(format!("Token issuance failed: {}", e)))?;

        tracing::debug!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    async fn authorize(&self, token: &str) -> Result<UserId, UserError> {
        let subject = self.token_service.verify(token).map_err(|e| {
            tracing::warn!(cause = %e, "Token verification failed");
            UserError::InvalidToken
        })?;

        UserId::from_string(&subject).map_err(|e| {
            tracing::warn!(cause = %e, "Token subject is not a user ID");
            UserError::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
        }
    }

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET, Duration::hours(1)))
    }

    fn stored_user(email: &str, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn register_command(email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .with(eq("test@example.com"))
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(repository), token_service());

        let result = service.register(register_command("test@example.com")).await;
        assert!(result.is_ok());

        let user = result.unwrap();
        assert_eq!(user.username.as_str(), "testuser");
        // Plaintext never survives registration
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_precheck() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(stored_user(email, "password123"))));

        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), token_service());

        let result = service.register(register_command("test@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_from_storage_conflict() {
        let mut repository = MockTestUserRepository::new();

        // The pre-check missed a concurrent registration; the storage
        // constraint reports the conflict instead
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = AuthService::new(Arc::new(repository), token_service());

        let result = service.register(register_command("test@example.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_issues_token_resolving_to_user() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user("test@example.com", "password123");
        let user_id = user.id;

        repository
            .expect_find_by_email()
            .with(eq("test@example.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), token_service());

        let token = service
            .login("test@example.com", "password123")
            .await
            .expect("Login failed");

        let resolved = service.authorize(&token).await.expect("Authorize failed");
        assert_eq!(resolved, user_id);
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password_are_indistinguishable() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .with(eq("missing@example.com"))
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_find_by_email()
            .with(eq("test@example.com"))
            .times(1)
            .returning(|_| Ok(Some(stored_user("test@example.com", "password123"))));

        let service = AuthService::new(Arc::new(repository), token_service());

        let not_found = service
            .login("missing@example.com", "password123")
            .await
            .unwrap_err();
        let mismatch = service
            .login("test@example.com", "wrong_password")
            .await
            .unwrap_err();

        assert!(matches!(not_found, UserError::InvalidCredentials));
        assert!(matches!(mismatch, UserError::InvalidCredentials));
        assert_eq!(not_found.to_string(), mismatch.to_string());
    }

    #[tokio::test]
    async fn test_authorize_rejects_garbage_token() {
        let repository = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(repository), token_service());

        let result = service.authorize("garbage-token").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn test_authorize_rejects_expired_token() {
        let repository = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(repository), token_service());

        // Same secret, negative lifetime: a well-signed but expired token
        let expired_issuer = TokenService::new(SECRET, Duration::hours(-2));
        let token = expired_issuer.issue(UserId::new()).unwrap();

        let result = service.authorize(&token).await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn test_authorize_rejects_non_uuid_subject() {
        let repository = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(repository), token_service());

        let token = token_service().issue("not-a-uuid").unwrap();

        let result = service.authorize(&token).await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }
}
