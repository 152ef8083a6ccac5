use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const INVALID_TOKEN: &str = "Invalid or expired token";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
}

impl JwtService {
    pub fn new(secret: &str, expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }

    pub fn generate_token(&self, user_id: i64) -> AppResult<String> {
        self.generate_token_at(user_id, Utc::now())
    }

    /// Issues a token as if it were `now`; expiry is `now + expires_in`.
    pub fn generate_token_at(&self, user_id: i64, now: DateTime<Utc>) -> AppResult<String> {
        let exp = now + Duration::seconds(self.expires_in);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AppError::JwtError)
    }

    /// Returns the user id carried by a valid, unexpired token.
    pub fn verify_token(&self, token: &str) -> AppResult<i64> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Token rejected: {e}");
                AppError::AuthError(INVALID_TOKEN.to_string())
            })?;

        claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::AuthError(INVALID_TOKEN.to_string()))
    }

    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let jwt = JwtService::new("test-secret", 3600);
        let token = jwt.generate_token(42).unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt = JwtService::new("test-secret", 60);
        let issued = Utc::now() - Duration::seconds(120);
        let token = jwt.generate_token_at(7, issued).unwrap();
        match jwt.verify_token(&token) {
            Err(AppError::AuthError(msg)) => assert_eq!(msg, "Invalid or expired token"),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let issuer = JwtService::new("secret-a", 3600);
        let verifier = JwtService::new("secret-b", 3600);
        let token = issuer.generate_token(1).unwrap();
        for bad in [token.as_str(), "not-a-token"] {
            match verifier.verify_token(bad) {
                Err(AppError::AuthError(msg)) => assert_eq!(msg, "Invalid or expired token"),
                other => panic!("expected auth error, got {other:?}"),
            }
        }
    }
}
