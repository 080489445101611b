pub mod aggregator;
pub mod dispatch;
pub mod scoring;
pub mod trending;

pub use aggregator::CatalogAggregator;
pub use dispatch::FeedDispatcher;
pub use scoring::{HomeFeedRanker, ScoreComposer};
pub use trending::TrendingEngine;
