use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Session Gate port
// ──────────────────────────────────────────────────────────
// Token issuance, sign-in and sign-out all live with the external identity
// provider; this port only answers "is this bearer an administrator".
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub is_admin: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionGateError {
    #[error("Invalid or expired token")]
    InvalidToken,
}

pub trait SessionGate: Send + Sync {
    fn verify(&self, token: &str) -> Result<AdminClaims, SessionGateError>;
}
