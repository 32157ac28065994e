//! Bounds-safe window selection.

use crate::models::Candidate;

use super::offsets::SourceOffsets;
use super::{AssemblyConfig, SourceKind};

/// The bounded slice of one source exposed for the current page.
///
/// A window is never larger than what remains of its source past the
/// offset; an exhausted source yields an empty window, never an error.
#[derive(Debug)]
pub struct SourceWindow<'a> {
    items: &'a [Candidate],
    /// Source elements past the window, eligible only for fallback filling.
    tail: &'a [Candidate],
    cursor: usize,
}

impl<'a> SourceWindow<'a> {
    fn slice(source: &'a [Candidate], offset: usize, target: usize) -> Self {
        let start = offset.min(source.len());
        let end = start.saturating_add(target).min(source.len());
        Self {
            items: &source[start..end],
            tail: &source[end..],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_remaining(&self) -> bool {
        self.cursor < self.items.len()
    }

    /// Next unconsumed window element, front to back.
    pub fn take_next(&mut self) -> Option<&'a Candidate> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }

    pub fn tail(&self) -> &'a [Candidate] {
        self.tail
    }
}

/// Per-source windows for one page.
#[derive(Debug)]
pub struct SourceWindows<'a> {
    own: SourceWindow<'a>,
    followed: SourceWindow<'a>,
    recommended: SourceWindow<'a>,
}

impl<'a> SourceWindows<'a> {
    /// Slice each source down to its per-page target count.
    ///
    /// Followed content gets up to two thirds of the page, recommended up to
    /// one third, own content a fixed cap.
    pub fn select(
        config: &AssemblyConfig,
        page_size: usize,
        offsets: &SourceOffsets,
        own: &'a [Candidate],
        followed: &'a [Candidate],
        recommended: &'a [Candidate],
    ) -> Self {
        let own_target = config.own_page_cap.min(own.len());
        let followed_target = (page_size.saturating_mul(2) / 3).min(followed.len());
        let recommended_target = (page_size / 3).min(recommended.len());

        Self {
            own: SourceWindow::slice(own, offsets.own, own_target),
            followed: SourceWindow::slice(followed, offsets.followed, followed_target),
            recommended: SourceWindow::slice(recommended, offsets.recommended, recommended_target),
        }
    }

    pub fn get(&self, kind: SourceKind) -> &SourceWindow<'a> {
        match kind {
            SourceKind::Own => &self.own,
            SourceKind::Followed => &self.followed,
            SourceKind::Recommended => &self.recommended,
        }
    }

    pub fn get_mut(&mut self, kind: SourceKind) -> &mut SourceWindow<'a> {
        match kind {
            SourceKind::Own => &mut self.own,
            SourceKind::Followed => &mut self.followed,
            SourceKind::Recommended => &mut self.recommended,
        }
    }

    pub fn has_remaining(&self, kind: SourceKind) -> bool {
        self.get(kind).has_remaining()
    }

    /// Unconsumed elements past every window, in source order.
    pub fn unexposed_tails(&self) -> Vec<&'a Candidate> {
        self.own
            .tail()
            .iter()
            .chain(self.followed.tail().iter())
            .chain(self.recommended.tail().iter())
            .collect()
    }
}
