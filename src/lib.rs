pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use config::{Config, ScoringWeights, TrendingConfig};
pub use error::FeedError;
pub use services::{CatalogAggregator, FeedDispatcher, HomeFeedRanker, ScoreComposer, TrendingEngine};
pub use storage::CatalogStore;
