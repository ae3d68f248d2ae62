use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

use crate::modules::session::application::ports::outgoing::session_gate::{
    AdminClaims, SessionGate, SessionGateError,
};

//
// ──────────────────────────────────────────────────────────
// Config
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret_key: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio".to_string()),
            secret_key: env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY is not set in .env file"),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    exp: i64,
    iat: i64,
    iss: String,
    #[serde(default)]
    is_admin: bool,
}

#[derive(Clone)]
pub struct JwtSessionGate {
    config: JwtConfig,
}

impl JwtSessionGate {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl SessionGate for JwtSessionGate {
    fn verify(&self, token: &str) -> Result<AdminClaims, SessionGateError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key.as_bytes()),
            &validation,
        )
        .map_err(|_| SessionGateError::InvalidToken)?;

        Ok(AdminClaims {
            sub: data.claims.sub,
            exp: data.claims.exp,
            iat: data.claims.iat,
            is_admin: data.claims.is_admin,
        })
    }
}
