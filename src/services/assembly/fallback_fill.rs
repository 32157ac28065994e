//! Fallback filling for short pages.
//!
//! When every window drains before the page target is met (typical near the
//! end of all lists, not merely one), leftover candidates across all three
//! full sources compete for the remaining slots on engagement then recency.
//! Provider ordering is not assumed to survive this far; the leftovers are
//! re-sorted explicitly.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::Candidate;

use super::windows::SourceWindows;

/// Append re-sorted leftover candidates until `page_size` is reached or the
/// sources are exhausted. A shortfall after this is the terminal-page case,
/// not an error.
pub(crate) fn fill_shortfall<'a>(
    page_size: usize,
    windows: &SourceWindows<'a>,
    picked: &mut Vec<&'a Candidate>,
    seen: &mut HashSet<Uuid>,
) {
    let mut leftovers = windows.unexposed_tails();
    leftovers.sort_by(|a, b| {
        b.interaction_count
            .cmp(&a.interaction_count)
            .then_with(|| b.posted_at.cmp(&a.posted_at))
    });

    for candidate in leftovers {
        if picked.len() >= page_size {
            break;
        }
        if seen.insert(candidate.id) {
            picked.push(candidate);
        }
    }
}
