//! Seeded weighted interleaving.
//!
//! One uniform draw per output slot is consulted against an ordered
//! threshold table. Roughly 10% of slots go to own content, 60% to the
//! followed network, 30% to discovery; when the drawn source is exhausted
//! the slot degrades to the next non-empty source.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::models::Candidate;

use super::windows::SourceWindows;
use super::SourceKind;

/// When a draw lands on an exhausted source, the first non-empty source in
/// this order takes the slot. Network content is the most durable fallback;
/// self-content goes last.
const EXHAUSTION_ORDER: [SourceKind; 3] = [
    SourceKind::Recommended,
    SourceKind::Followed,
    SourceKind::Own,
];

/// Derive the per-call generator seed.
///
/// Identical `(user_id, page_number)` pairs reproduce the identical draw
/// sequence, which keeps pages cache-friendly and tests reproducible. The
/// seed is not adversarial-safe and does not need to be. A nil user id
/// contributes a constant 0 hash term instead of failing.
pub(crate) fn derive_seed(user_id: Uuid, page_number: u32) -> u64 {
    let user_hash = if user_id.is_nil() {
        0
    } else {
        let mut hasher = DefaultHasher::new();
        user_id.hash(&mut hasher);
        hasher.finish()
    };

    user_hash ^ page_number as u64
}

/// Ordered `(threshold, source)` pairs consulted against one uniform draw.
#[derive(Debug, Clone)]
pub(crate) struct DrawTable {
    entries: [(f64, SourceKind); 3],
}

impl DrawTable {
    /// Build cumulative thresholds from the weight split.
    pub fn from_weights(own: f64, followed: f64, recommended: f64) -> Self {
        Self {
            entries: [
                (own, SourceKind::Own),
                (own + followed, SourceKind::Followed),
                (own + followed + recommended, SourceKind::Recommended),
            ],
        }
    }

    /// Pick the source for one draw.
    ///
    /// The first table entry whose threshold exceeds the draw and whose
    /// window still holds items wins; otherwise the first non-empty source
    /// in exhaustion order takes the slot. `None` means every window is
    /// drained.
    pub fn select(
        &self,
        draw: f64,
        has_remaining: impl Fn(SourceKind) -> bool,
    ) -> Option<SourceKind> {
        for (threshold, kind) in self.entries {
            if draw < threshold && has_remaining(kind) {
                return Some(kind);
            }
        }

        EXHAUSTION_ORDER.into_iter().find(|kind| has_remaining(*kind))
    }
}

/// Weighted random merge of the three windows, capped at `page_size`.
///
/// Window items are consumed front to back. A candidate whose id was already
/// emitted is dropped without taking a page slot.
pub(crate) fn interleave<'a>(
    seed: u64,
    page_size: usize,
    table: &DrawTable,
    windows: &mut SourceWindows<'a>,
    seen: &mut HashSet<Uuid>,
) -> Vec<&'a Candidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked: Vec<&'a Candidate> = Vec::new();

    while picked.len() < page_size {
        let draw = rng.gen::<f64>();
        let kind = match table.select(draw, |k| windows.has_remaining(k)) {
            Some(kind) => kind,
            None => break,
        };

        if let Some(candidate) = windows.get_mut(kind).take_next() {
            if seen.insert(candidate.id) {
                picked.push(candidate);
            }
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::assembly::offsets::SourceOffsets;
    use crate::services::assembly::AssemblyConfig;
    use chrono::{TimeZone, Utc};

    fn candidates(count: usize) -> Vec<Candidate> {
        (0..count)
            .map(|i| Candidate {
                id: Uuid::new_v4(),
                interaction_count: i as u64,
                comment_count: 0,
                posted_at: Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
            })
            .collect()
    }

    fn default_table() -> DrawTable {
        DrawTable::from_weights(0.10, 0.60, 0.30)
    }

    fn full_windows<'a>(
        own: &'a [Candidate],
        followed: &'a [Candidate],
        recommended: &'a [Candidate],
        page_size: usize,
    ) -> SourceWindows<'a> {
        let offsets = SourceOffsets {
            own: 0,
            followed: 0,
            recommended: 0,
        };
        SourceWindows::select(
            &AssemblyConfig::default(),
            page_size,
            &offsets,
            own,
            followed,
            recommended,
        )
    }

    #[test]
    fn test_seed_is_deterministic() {
        let user = Uuid::new_v4();
        assert_eq!(derive_seed(user, 3), derive_seed(user, 3));
        assert_ne!(derive_seed(user, 3), derive_seed(user, 4));
    }

    #[test]
    fn test_nil_user_id_degrades_to_constant_seed() {
        assert_eq!(derive_seed(Uuid::nil(), 0), 0);
        assert_eq!(derive_seed(Uuid::nil(), 5), 5);
    }

    #[test]
    fn test_select_low_draw_prefers_own() {
        let table = default_table();
        assert_eq!(table.select(0.05, |_| true), Some(SourceKind::Own));
    }

    #[test]
    fn test_select_mid_draw_prefers_followed() {
        let table = default_table();
        assert_eq!(table.select(0.10, |_| true), Some(SourceKind::Followed));
        assert_eq!(table.select(0.69, |_| true), Some(SourceKind::Followed));
    }

    #[test]
    fn test_select_high_draw_prefers_recommended() {
        let table = default_table();
        assert_eq!(table.select(0.75, |_| true), Some(SourceKind::Recommended));
        assert_eq!(table.select(0.999, |_| true), Some(SourceKind::Recommended));
    }

    #[test]
    fn test_select_skips_empty_own_window() {
        let table = default_table();
        let selected = table.select(0.05, |kind| kind != SourceKind::Own);
        assert_eq!(selected, Some(SourceKind::Followed));
    }

    #[test]
    fn test_select_degrades_recommended_then_followed_then_own() {
        let table = default_table();

        // Recommended drawn but empty -> followed.
        let selected = table.select(0.9, |kind| kind == SourceKind::Followed);
        assert_eq!(selected, Some(SourceKind::Followed));

        // Recommended and followed empty -> own.
        let selected = table.select(0.9, |kind| kind == SourceKind::Own);
        assert_eq!(selected, Some(SourceKind::Own));
    }

    #[test]
    fn test_select_returns_none_when_all_drained() {
        let table = default_table();
        assert_eq!(table.select(0.5, |_| false), None);
    }

    #[test]
    fn test_interleave_caps_output_at_page_size() {
        let own = candidates(5);
        let followed = candidates(20);
        let recommended = candidates(15);
        let mut windows = full_windows(&own, &followed, &recommended, 7);
        let mut seen = HashSet::new();

        let picked = interleave(42, 7, &default_table(), &mut windows, &mut seen);
        assert_eq!(picked.len(), 7);
    }

    #[test]
    fn test_interleave_single_source_preserves_window_order() {
        let followed = candidates(3);
        let mut windows = full_windows(&[], &followed, &[], 7);
        let mut seen = HashSet::new();

        let picked = interleave(7, 7, &default_table(), &mut windows, &mut seen);
        let ids: Vec<Uuid> = picked.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![followed[0].id, followed[1].id, followed[2].id]);
    }

    #[test]
    fn test_interleave_is_deterministic_for_identical_inputs() {
        let own = candidates(5);
        let followed = candidates(20);
        let recommended = candidates(15);
        let seed = derive_seed(Uuid::new_v4(), 0);

        let mut first_windows = full_windows(&own, &followed, &recommended, 7);
        let mut seen = HashSet::new();
        let first = interleave(seed, 7, &default_table(), &mut first_windows, &mut seen);

        let mut second_windows = full_windows(&own, &followed, &recommended, 7);
        let mut seen = HashSet::new();
        let second = interleave(seed, 7, &default_table(), &mut second_windows, &mut seen);

        let first_ids: Vec<Uuid> = first.iter().map(|c| c.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|c| c.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_interleave_drops_duplicate_ids() {
        let shared = candidates(1);
        let own = shared.clone();
        let followed = shared;
        let mut windows = full_windows(&own, &followed, &[], 7);
        let mut seen = HashSet::new();

        let picked = interleave(99, 7, &default_table(), &mut windows, &mut seen);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_interleave_empty_windows_yield_empty_page() {
        let mut windows = full_windows(&[], &[], &[], 7);
        let mut seen = HashSet::new();

        let picked = interleave(0, 7, &default_table(), &mut windows, &mut seen);
        assert!(picked.is_empty());
    }
}
