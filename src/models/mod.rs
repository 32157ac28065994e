use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One feed-eligible content item with engagement metrics and a timestamp.
///
/// Candidates are produced and owned by the candidate provider; the assembly
/// core reads them and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    /// Likes + comments combined.
    pub interaction_count: u64,
    pub comment_count: u64,
    pub posted_at: DateTime<Utc>,
}

/// Page request parameters.
///
/// Pagination is fully stateless: every call is recomputed from scratch and
/// no cursor is retained between pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based page index.
    pub page_number: u32,
    pub page_size: usize,
}

/// Display-ready feed entry (matches the client feed contract)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub interaction_count: u64,
    pub comment_count: u64,
    pub posted_at: i64,
    pub ranking_score: f64,
}

/// Assembled feed page, handed to the transport layer for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub has_next: bool,
    pub page_number: u32,
}
