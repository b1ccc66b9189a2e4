//! HS256 JWT implementation of `TokenIssuer`

use async_trait::async_trait;
use chrono::{Duration, Utc};
use expense_shared::config::JwtConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::Token;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::traits::TokenIssuer;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    pub role: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
    pub iss: String,
    /// Unique token id
    pub jti: String,
}

impl Claims {
    /// Claims for `user` expiring `config.ttl_minutes` from now
    ///
    /// Fails with `TokenGenerationFailed` when the lifetime does not fit a
    /// timestamp.
    pub fn for_user(user: &User, config: &JwtConfig) -> DomainResult<Self> {
        let now = Utc::now();
        let expires_at = Duration::try_minutes(config.ttl_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                tracing::error!(
                    ttl_minutes = config.ttl_minutes,
                    "Token lifetime out of range"
                );
                DomainError::Auth(AuthError::TokenGenerationFailed)
            })?;

        Ok(Self {
            sub: user.id().value(),
            email: user.email().value().to_string(),
            role: user.role().as_str().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: config.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}

/// Token issuer signing claims with a shared secret
pub struct JwtTokenIssuer {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        if config.is_using_default_secret() {
            tracing::warn!("JWT issuer is using the default development secret");
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Auth(AuthError::TokenGenerationFailed)
        })
    }

    /// Verify signature, issuer and expiry, returning the claims
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected access token");
                DomainError::Auth(AuthError::InvalidToken)
            })
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn create(&self, user: &User) -> DomainResult<Token> {
        let claims = Claims::for_user(user, &self.config)?;
        let jwt = self.encode_jwt(&claims)?;

        Ok(Token::new(
            jwt,
            self.config.token_type.clone(),
            self.config.ttl_seconds(),
        )?)
    }
}
