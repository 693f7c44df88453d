use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenService;
use chrono::Duration;
use letters_service::domain::letter::errors::LetterError;
use letters_service::domain::letter::models::Letter;
use letters_service::domain::letter::ports::LetterRepository;
use letters_service::domain::letter::service::LetterService;
use letters_service::domain::user::models::User;
use letters_service::domain::user::models::UserId;
use letters_service::domain::user::ports::UserRepository;
use letters_service::domain::user::service::AuthService;
use letters_service::inbound::http::router::create_router;
use letters_service::user::errors::UserError;

/// Signing secret shared by the spawned app and by tests that mint tokens
/// directly.
pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_token_ttl(Duration::hours(1)).await
    }

    /// Spawn with an explicit token lifetime (a negative lifetime makes the
    /// app issue already-expired tokens)
    pub async fn spawn_with_token_ttl(ttl: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::new(JWT_SECRET, ttl));
        let user_repo = Arc::new(InMemoryUserRepository::default());
        let letter_repo = Arc::new(InMemoryLetterRepository::default());

        let auth_service = Arc::new(AuthService::new(user_repo, token_service));
        let letter_service = Arc::new(LetterService::new(letter_repo));

        let router = create_router(auth_service, letter_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return the assigned user ID string
    pub async fn register_user(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_str().expect("Missing id").to_string()
    }

    /// Log a user in and return the bearer token
    pub async fn login_user(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}

/// Credential store kept in memory so the suite runs without Postgres.
///
/// Check and insert happen under one lock, mirroring the atomicity the
/// database unique constraint provides.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().expect("store poisoned");
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().expect("store poisoned");
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().expect("store poisoned");
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }
}

/// Letter store kept in memory.
#[derive(Default)]
pub struct InMemoryLetterRepository {
    letters: Mutex<Vec<Letter>>,
}

#[async_trait]
impl LetterRepository for InMemoryLetterRepository {
    async fn create(&self, letter: Letter) -> Result<Letter, LetterError> {
        let mut letters = self.letters.lock().expect("store poisoned");
        letters.push(letter.clone());
        Ok(letter)
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Letter>, LetterError> {
        let letters = self.letters.lock().expect("store poisoned");
        let mut owned: Vec<Letter> = letters
            .iter()
            .filter(|l| l.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
