pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Candidate, FeedItem, FeedPage, PageRequest};
pub use provider::{CandidateProvider, StaticCandidateProvider};

// Re-export feed assembly components
pub use services::{assemble_feed, AssemblyConfig, FeedAssembler, FeedService, SourceKind};
