//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use shiftlog_core::config::AuthConfig;
use shiftlog_core::error::AppError;

use super::claims::Claims;

/// Validates JWT access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use shiftlog_core::config::AuthConfig;
    use shiftlog_entity::user::User;

    use super::*;
    use crate::jwt::JwtEncoder;

    fn test_config() -> AuthConfig {
        AuthConfig {
            secret_key: "unit-test-secret-key".to_string(),
            token_ttl_hours: 12,
            session_ttl_hours: 12,
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test Operator".to_string(),
            employee_id: "EMP-001".to_string(),
            password_hash: "x".to_string(),
            department: None,
            section: None,
            job: None,
            shift: None,
            is_admin: false,
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user = test_user();
        let session_id = Uuid::new_v4();

        let issued = encoder.generate_access_token(&user, session_id).unwrap();
        let claims = decoder.decode_access_token(&issued.access_token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.sid, session_id);
        assert_eq!(claims.employee_id, "EMP-001");
        assert!(!claims.is_admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            secret_key: "a-different-secret".to_string(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let issued = encoder
            .generate_access_token(&test_user(), Uuid::new_v4())
            .unwrap();
        let err = decoder.decode_access_token(&issued.access_token);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_garbage_token() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_access_token("not.a.token").is_err());
    }
}
