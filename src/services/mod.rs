//! Service layer for feed assembly
//!
//! Active modules:
//! - assembly: pure per-page pipeline (offsets, windows, interleave, fallback fill)
//! - feed: provider-facing orchestration around the pure core

pub mod assembly;
pub mod feed;

pub use assembly::{assemble_feed, AssemblyConfig, FeedAssembler, SourceKind};
pub use feed::FeedService;
