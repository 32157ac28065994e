//! Per-source offset calculation.

use crate::models::PageRequest;

use super::AssemblyConfig;

/// Per-source starting indices for one page.
///
/// Own content paces at a fraction of the global page offset so
/// self-authored posts spread sparsely across many pages instead of
/// front-loading. Every offset is clamped to its source length, is monotone
/// in the page number, and can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOffsets {
    pub own: usize,
    pub followed: usize,
    pub recommended: usize,
}

impl SourceOffsets {
    pub fn for_page(
        config: &AssemblyConfig,
        page: PageRequest,
        own_len: usize,
        followed_len: usize,
        recommended_len: usize,
    ) -> Self {
        let offset = (page.page_number as usize).saturating_mul(page.page_size);

        Self {
            // Integer division: own content advances one index per
            // `own_pacing_divisor` global indices.
            own: (offset / config.own_pacing_divisor).min(own_len),
            followed: offset.min(followed_len),
            recommended: offset.min(recommended_len),
        }
    }
}
