use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::auth::AuthUser;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
}

/// HS256 access tokens. The signing key comes from configuration, never from
/// a literal.
pub struct JwtService {
    secret_key: String,
    expiration: u64,
}

impl JwtService {
    pub fn new(secret_key: String, expiration: u64) -> Self {
        Self {
            secret_key,
            expiration,
        }
    }

    pub fn sign(&self, username: &str) -> Result<String> {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before unix epoch")?
            .as_secs()
            + self.expiration;

        encode(
            &Header::default(),
            &Claims {
                sub: username.to_owned(),
                exp,
            },
            &EncodingKey::from_secret(self.secret_key.as_ref()),
        )
        .context("failed to encode access token")
    }

    pub fn verify(&self, token: &str) -> Result<AuthUser> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_key.as_ref()),
            &Validation::new(Algorithm::HS256),
        )
        .context("failed to decode access token")?;

        Ok(AuthUser {
            username: token_data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_roundtrips_identity() {
        let service = JwtService::new("test-secret".to_owned(), 3600);
        let token = service.sign("admin").unwrap();
        let user = service.verify(&token).unwrap();
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn verify_rejects_token_signed_with_other_key() {
        let signer = JwtService::new("key-a".to_owned(), 3600);
        let verifier = JwtService::new("key-b".to_owned(), 3600);
        let token = signer.sign("admin").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let service = JwtService::new("test-secret".to_owned(), 3600);
        assert!(service.verify("not-a-token").is_err());
    }
}
