//! Page availability estimation.

use super::offsets::SourceOffsets;

/// Estimate whether another page exists past the current one.
///
/// Sums raw remaining counts per source against the current offsets. This
/// deliberately does not re-derive the own-offset pacing for future pages,
/// so the flag can drift near pagination boundaries where own content is
/// the limiting factor. Client pagination depends on the current values;
/// keep the approximation.
pub(crate) fn has_next_page(
    page_size: usize,
    offsets: &SourceOffsets,
    own_len: usize,
    followed_len: usize,
    recommended_len: usize,
) -> bool {
    let remaining = own_len.saturating_sub(offsets.own)
        + followed_len.saturating_sub(offsets.followed)
        + recommended_len.saturating_sub(offsets.recommended);

    remaining > page_size
}
