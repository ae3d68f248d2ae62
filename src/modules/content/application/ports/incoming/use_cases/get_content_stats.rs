use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Dashboard counts
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContentStats {
    pub projects: u64,
    pub skills: u64,
    pub experience: u64,
    pub testimonials: u64,
    pub messages: u64,
    pub unread_messages: u64,
}

#[derive(Debug, Clone)]
pub enum GetContentStatsError {
    QueryFailed(String),
}

impl fmt::Display for GetContentStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetContentStatsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetContentStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContentStats, GetContentStatsError>;
}
