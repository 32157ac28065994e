//! Candidate provider seam.
//!
//! The assembly core consumes pre-fetched, pre-sorted candidate lists; this
//! trait is the contract those lists arrive through. Storage- and
//! RPC-backed implementations live with their owning services, outside this
//! crate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Candidate;

/// Ordered candidate sources for one user.
///
/// Contract: `fetch_own` and `fetch_followed` return candidates sorted by
/// `posted_at` descending; `fetch_recommended` by `interaction_count`
/// descending with ties broken by `posted_at` descending. The assembly core
/// re-sorts explicitly where it depends on ordering, so a provider bug here
/// degrades relevance, not correctness.
#[async_trait]
pub trait CandidateProvider: Send + Sync {
    async fn fetch_own(&self, user_id: Uuid) -> Result<Vec<Candidate>>;
    async fn fetch_followed(&self, user_id: Uuid) -> Result<Vec<Candidate>>;
    async fn fetch_recommended(&self, user_id: Uuid) -> Result<Vec<Candidate>>;
}

/// In-memory provider over fixed lists.
///
/// Used by tests and by hosts that already fetched candidates elsewhere and
/// only need the assembly step.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateProvider {
    pub own: Vec<Candidate>,
    pub followed: Vec<Candidate>,
    pub recommended: Vec<Candidate>,
}

#[async_trait]
impl CandidateProvider for StaticCandidateProvider {
    async fn fetch_own(&self, _user_id: Uuid) -> Result<Vec<Candidate>> {
        Ok(self.own.clone())
    }

    async fn fetch_followed(&self, _user_id: Uuid) -> Result<Vec<Candidate>> {
        Ok(self.followed.clone())
    }

    async fn fetch_recommended(&self, _user_id: Uuid) -> Result<Vec<Candidate>> {
        Ok(self.recommended.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_static_provider_returns_fixed_lists() {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            interaction_count: 5,
            comment_count: 2,
            posted_at: Utc::now(),
        };
        let provider = StaticCandidateProvider {
            own: vec![candidate.clone()],
            followed: vec![],
            recommended: vec![],
        };

        let own = tokio_test::block_on(provider.fetch_own(Uuid::new_v4())).unwrap();
        assert_eq!(own, vec![candidate]);

        let followed = tokio_test::block_on(provider.fetch_followed(Uuid::new_v4())).unwrap();
        assert!(followed.is_empty());
    }
}
