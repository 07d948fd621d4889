use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::SessionClaims;
use super::errors::TokenError;

/// Signs and verifies session tokens for one application secret.
///
/// Uses HS256 (HMAC with SHA-256). A handler is bound to a single secret;
/// multi-tenant isolation comes from constructing it with the secret of the
/// application the token targets. A token issued under application A's
/// secret is cryptographically unverifiable by a handler built for B's.
pub struct TokenHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenHandler {
    /// Create a handler bound to one application's signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Serialize and sign claims into a token string.
    ///
    /// # Errors
    /// * `IssueFailed` - serialization or signing failed
    pub fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Parse a token, check its signature, and reject expired claims.
    ///
    /// The `exp` claim is required; expiry is checked with zero leeway.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `InvalidToken` - signature mismatch or malformed token
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let handler = TokenHandler::new(b"app_secret_at_least_32_bytes_long!");
        let claims = SessionClaims::new(1, "alice@example.com", 2, Duration::hours(1));

        let token = handler.issue(&claims).expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = handler.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_verify_with_other_applications_secret_fails() {
        let app_a = TokenHandler::new(b"secret_for_app_a_32_bytes_long_ok!");
        let app_b = TokenHandler::new(b"secret_for_app_b_32_bytes_long_ok!");

        let claims = SessionClaims::new(1, "alice@example.com", 1, Duration::hours(1));
        let token = app_a.issue(&claims).expect("Failed to issue token");

        let result = app_b.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let handler = TokenHandler::new(b"app_secret_at_least_32_bytes_long!");
        let claims = SessionClaims::new(1, "alice@example.com", 1, Duration::seconds(-10));

        let token = handler.issue(&claims).expect("Failed to issue token");

        let result = handler.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_tampered_token() {
        let handler = TokenHandler::new(b"app_secret_at_least_32_bytes_long!");
        let claims = SessionClaims::new(1, "alice@example.com", 1, Duration::hours(1));

        let mut token = handler.issue(&claims).expect("Failed to issue token");
        // Flip a character in the payload segment.
        let payload_start = token.find('.').unwrap() + 1;
        let replacement = if token.as_bytes()[payload_start] == b'A' {
            "B"
        } else {
            "A"
        };
        token.replace_range(payload_start..payload_start + 1, replacement);

        assert!(handler.verify(&token).is_err());
    }

    #[test]
    fn test_verify_garbage_token() {
        let handler = TokenHandler::new(b"app_secret_at_least_32_bytes_long!");
        let result = handler.verify("not.a.token");
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }
}
