// Session token generation and validation

use crate::auth::{error::AuthError, models::Role};
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session tokens are valid for 24 hours from issuance
const TOKEN_DURATION_SECS: i64 = 86_400;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user_id
    pub role: Role,
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for signed session tokens
///
/// Tokens are self-contained and stateless; there is no revocation list.
/// A leaked token stays valid until expiry, mitigated only by rotating the
/// secret.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    /// Create a new TokenService with the server-held signing secret
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a session token asserting `{user_id, role}`
    pub fn generate_token(&self, user_id: i32, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role,
            iat: now,
            exp: now + TOKEN_DURATION_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate a session token, failing closed
    ///
    /// Signature, parse, and expiry failures all reject the token; nothing
    /// in an unverified token is ever trusted.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn token_expiration_is_24_hours() {
        let service = test_token_service();
        let token = service.generate_token(1, Role::User).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn token_round_trips_identity_and_role() {
        let service = test_token_service();

        let token = service.generate_token(42, Role::Doctor).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Doctor);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.validate_token("").is_err());
        assert!(service.validate_token("not.a.token").is_err());
        assert!(service.validate_token("invalid_token_format").is_err());
        assert!(service
            .validate_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let service = test_token_service();
        let token = service.generate_token(1, Role::User).unwrap();

        // Flip the last signature character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(service.validate_token(&tampered).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.generate_token(1, Role::Admin).unwrap();
        assert!(service1.validate_token(&token).is_ok());
        assert!(service2.validate_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = test_token_service();
        let now = Utc::now().timestamp();

        // Expired well past the default validation leeway
        let claims = Claims {
            sub: 1,
            role: Role::User,
            iat: now - 90_000,
            exp: now - 3_600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let result = service.validate_token(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    proptest! {
        #[test]
        fn prop_token_round_trip(user_id in 1i32..1_000_000) {
            let service = test_token_service();
            for role in [Role::User, Role::Admin, Role::Doctor] {
                let token = service.generate_token(user_id, role)?;
                let claims = service.validate_token(&token)?;
                prop_assert_eq!(claims.sub, user_id);
                prop_assert_eq!(claims.role, role);
                prop_assert_eq!(claims.exp - claims.iat, 86_400);
            }
        }

        #[test]
        fn prop_random_strings_are_rejected(junk in "[a-zA-Z0-9]{10,60}") {
            let service = test_token_service();
            prop_assert!(service.validate_token(&junk).is_err());
        }
    }
}
