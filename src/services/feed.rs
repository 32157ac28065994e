//! Provider-facing feed orchestration.
//!
//! Fetches the three candidate streams and runs the pure assembly core over
//! them. Fetch failures on secondary sources degrade that source to empty
//! so the feed stays available; the followed stream is the primary
//! relevance signal and its failure propagates.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{FeedPage, PageRequest};
use crate::provider::CandidateProvider;

use super::assembly::FeedAssembler;

pub struct FeedService {
    provider: Arc<dyn CandidateProvider>,
    assembler: FeedAssembler,
}

impl FeedService {
    pub fn new(provider: Arc<dyn CandidateProvider>, assembler: FeedAssembler) -> Self {
        Self {
            provider,
            assembler,
        }
    }

    /// Fetch all three candidate streams and assemble one page.
    pub async fn get_feed(&self, user_id: Uuid, page: PageRequest) -> Result<FeedPage> {
        let page = PageRequest {
            page_number: page.page_number,
            page_size: page
                .page_size
                .min(self.assembler.config().max_page_size)
                .max(1),
        };

        let (own, followed, recommended) = futures::join!(
            self.provider.fetch_own(user_id),
            self.provider.fetch_followed(user_id),
            self.provider.fetch_recommended(user_id),
        );

        let followed = followed?;
        let own = own.unwrap_or_else(|e| {
            warn!(
                "Own-content fetch failed for user {} (continuing without): {}",
                user_id, e
            );
            Vec::new()
        });
        let recommended = recommended.unwrap_or_else(|e| {
            warn!(
                "Recommendation fetch failed for user {} (continuing without): {}",
                user_id, e
            );
            Vec::new()
        });

        let feed_page = self
            .assembler
            .assemble(user_id, page, &own, &followed, &recommended);

        info!(
            "Feed page ready: user={} page={} items={} has_next={}",
            user_id,
            feed_page.page_number,
            feed_page.items.len(),
            feed_page.has_next
        );

        Ok(feed_page)
    }
}
