//! Authentication infrastructure library
//!
//! Provides the security primitives the letters service builds its
//! authentication boundary on:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-limited bearer tokens (JWT, HS256)
//!
//! The service defines its own authentication semantics on top; this crate
//! only owns the cryptographic primitives and their failure taxonomy.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("other_password", &digest).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = tokens.issue("user123").unwrap();
//! let subject = tokens.verify(&token).unwrap();
//! assert_eq!(subject, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
