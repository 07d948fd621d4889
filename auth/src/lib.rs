//! Authentication primitives for the SSO service
//!
//! Provides the two cryptographic building blocks the service composes:
//! - Password hashing and verification (Argon2id, PHC string format)
//! - Application-scoped session tokens (HS256 signed claims)
//!
//! The crate is storage- and transport-agnostic. The service layer decides
//! which application's secret signs a token; nothing here holds a global key.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{SessionClaims, TokenHandler};
//! use chrono::Duration;
//!
//! let handler = TokenHandler::new(b"app_secret_at_least_32_bytes_long!");
//! let claims = SessionClaims::new(42, "alice@example.com", 7, Duration::hours(1));
//! let token = handler.issue(&claims).unwrap();
//! let decoded = handler.verify(&token).unwrap();
//! assert_eq!(decoded.uid, 42);
//! assert_eq!(decoded.app_id, 7);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionClaims;
pub use token::TokenError;
pub use token::TokenHandler;
