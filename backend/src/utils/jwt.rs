//! JWT token utilities for authentication and authorization.
//!
//! Provides token creation and validation for stateless staff
//! authentication. The codec is constructed once at startup from the
//! process-wide secret; tokens are signed with HS256 and any other
//! algorithm is rejected on decode.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};

/// JWT claims: the authenticated username plus the standard time bounds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username of the authenticated user
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn username(&self) -> &str {
        &self.sub
    }
}

/// JWT token utility for creating and validating tokens.
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtUtils {
    /// Creates a codec for the given signing secret and token lifetime.
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issues a signed token carrying the username, expiring after the
    /// configured lifetime.
    pub fn issue_token(&self, username: &str) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + self.ttl;

        let claims = Claims {
            sub: username.to_owned(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("token generation failed: {}", e)))
    }

    /// Validates and decodes a token.
    ///
    /// Fails with `InvalidToken` when the signature does not verify, the
    /// payload is malformed, the algorithm is not HS256, or the token has
    /// expired.
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::invalid_token(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;

    fn codec() -> JwtUtils {
        JwtUtils::new("test-secret", 15)
    }

    #[test]
    fn issue_and_validate_round_trip() {
        let token = codec().issue_token("drhouse").unwrap();
        let claims = codec().validate_token(&token).unwrap();

        assert_eq!(claims.username(), "drhouse");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = JwtUtils::new("other-secret", 15)
            .issue_token("drhouse")
            .unwrap();

        let result = codec().validate_token(&token);
        assert!(matches!(result, Err(ServiceError::InvalidToken { .. })));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let claims = Claims {
            sub: "drhouse".to_string(),
            exp: (now - Duration::hours(1)).timestamp() as usize,
            iat: (now - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let result = codec().validate_token(&token);
        assert!(matches!(result, Err(ServiceError::InvalidToken { .. })));
    }

    #[test]
    fn rejects_other_signing_algorithms() {
        let now = Utc::now();
        let claims = Claims {
            sub: "drhouse".to_string(),
            exp: (now + Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let result = codec().validate_token(&token);
        assert!(matches!(result, Err(ServiceError::InvalidToken { .. })));
    }

    #[test]
    fn rejects_garbage_input() {
        let result = codec().validate_token("definitely.not.a.token");
        assert!(matches!(result, Err(ServiceError::InvalidToken { .. })));
    }
}
