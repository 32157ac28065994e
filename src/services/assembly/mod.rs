//! Personalized feed assembly.
//!
//! Merges three independently-sourced, independently-paginated candidate
//! streams (own content, followed-network content, recommended content)
//! into one bounded, page-stable, semi-randomized page:
//!
//!   offsets -> windows -> seeded weighted interleave -> fallback fill
//!
//! The pipeline is a pure, terminating function of its inputs: no I/O, no
//! shared state, no retained cursor between pages. Randomness comes from a
//! generator seeded per call with `hash(user_id) ^ page_number`, so
//! identical requests reproduce identical pages.

pub mod availability;
pub mod fallback_fill;
pub mod interleave;
pub mod offsets;
pub mod windows;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{Candidate, FeedItem, FeedPage, PageRequest};

use availability::has_next_page;
use fallback_fill::fill_shortfall;
use interleave::{derive_seed, interleave, DrawTable};
use offsets::SourceOffsets;
use windows::SourceWindows;

/// Own-content pagination advances at 1/10th of the global page offset, so
/// self-authored posts surface sparsely across many pages.
pub const OWN_PACING_DIVISOR: usize = 10;

/// At most this many own items are surfaced on any single page.
pub const OWN_PAGE_CAP: usize = 3;

/// Draw weight split: ~10% self-content, ~60% network content, ~30% discovery.
pub const OWN_WEIGHT: f64 = 0.10;
pub const FOLLOWED_WEIGHT: f64 = 0.60;
pub const RECOMMENDED_WEIGHT: f64 = 0.30;

/// Ceiling the orchestration layer applies to requested page sizes.
pub const MAX_PAGE_SIZE: usize = 100;

/// Candidate stream a feed entry is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Own,
    Followed,
    Recommended,
}

/// Product tunables for the assembly pipeline.
///
/// The defaults are the shipped heuristics. Deployments may tune them, but
/// the values encode product decisions, not structural requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyConfig {
    pub own_pacing_divisor: usize,
    pub own_page_cap: usize,
    pub own_weight: f64,
    pub followed_weight: f64,
    pub recommended_weight: f64,
    pub max_page_size: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            own_pacing_divisor: OWN_PACING_DIVISOR,
            own_page_cap: OWN_PAGE_CAP,
            own_weight: OWN_WEIGHT,
            followed_weight: FOLLOWED_WEIGHT,
            recommended_weight: RECOMMENDED_WEIGHT,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Stateless per-page feed assembler.
pub struct FeedAssembler {
    config: AssemblyConfig,
    draw_table: DrawTable,
}

impl FeedAssembler {
    /// Validate the tunables once and build the draw table.
    pub fn new(config: AssemblyConfig) -> Result<Self> {
        let weight_sum = config.own_weight + config.followed_weight + config.recommended_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(AppError::Validation(format!(
                "Source weights must sum to 1.0, got {}",
                weight_sum
            )));
        }
        if config.own_pacing_divisor == 0 {
            return Err(AppError::Validation(
                "Own pacing divisor must be at least 1".to_string(),
            ));
        }
        if config.max_page_size == 0 {
            return Err(AppError::Validation(
                "Max page size must be at least 1".to_string(),
            ));
        }

        let draw_table = DrawTable::from_weights(
            config.own_weight,
            config.followed_weight,
            config.recommended_weight,
        );
        Ok(Self { config, draw_table })
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Assemble one feed page from pre-fetched candidate lists.
    ///
    /// Pure and infallible: exhausted or empty sources shrink the page,
    /// they never fail it. Candidate ids are unique within the returned
    /// page even when sources overlap.
    pub fn assemble(
        &self,
        user_id: Uuid,
        page: PageRequest,
        own: &[Candidate],
        followed: &[Candidate],
        recommended: &[Candidate],
    ) -> FeedPage {
        let offsets = SourceOffsets::for_page(
            &self.config,
            page,
            own.len(),
            followed.len(),
            recommended.len(),
        );
        let mut windows = SourceWindows::select(
            &self.config,
            page.page_size,
            &offsets,
            own,
            followed,
            recommended,
        );

        let seed = derive_seed(user_id, page.page_number);
        let mut seen: HashSet<Uuid> = HashSet::new();
        let mut picked = interleave(seed, page.page_size, &self.draw_table, &mut windows, &mut seen);
        let interleaved = picked.len();

        if picked.len() < page.page_size {
            fill_shortfall(page.page_size, &windows, &mut picked, &mut seen);
            let filled = picked.len() - interleaved;
            if filled > 0 {
                metrics::record_fallback_items(filled as u64);
            }
        }

        let has_next = has_next_page(
            page.page_size,
            &offsets,
            own.len(),
            followed.len(),
            recommended.len(),
        );

        let outcome = if picked.is_empty() {
            "empty"
        } else if picked.len() > interleaved {
            "backfilled"
        } else {
            "interleaved"
        };
        metrics::record_page_assembled(outcome);
        metrics::observe_page_items(picked.len());

        debug!(
            "Assembled feed page: user={} page={} items={} interleaved={} has_next={}",
            user_id,
            page.page_number,
            picked.len(),
            interleaved,
            has_next
        );

        let items = picked
            .into_iter()
            .enumerate()
            .map(|(idx, candidate)| FeedItem {
                id: candidate.id.to_string(),
                interaction_count: candidate.interaction_count,
                comment_count: candidate.comment_count,
                posted_at: candidate.posted_at.timestamp(),
                ranking_score: 1.0 - (idx as f64 * 0.01),
            })
            .collect();

        FeedPage {
            items,
            has_next,
            page_number: page.page_number,
        }
    }
}

/// Assemble one feed page with the default tuning.
///
/// Entry point for callers that do not hold a configured [`FeedAssembler`].
pub fn assemble_feed(
    user_id: Uuid,
    page_number: u32,
    page_size: usize,
    own: &[Candidate],
    followed: &[Candidate],
    recommended: &[Candidate],
) -> FeedPage {
    let config = AssemblyConfig::default();
    let draw_table = DrawTable::from_weights(
        config.own_weight,
        config.followed_weight,
        config.recommended_weight,
    );
    let assembler = FeedAssembler { config, draw_table };

    assembler.assemble(
        user_id,
        PageRequest {
            page_number,
            page_size,
        },
        own,
        followed,
        recommended,
    )
}
