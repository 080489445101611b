//! Boundary routing between requester identity and the two feeds.
//!
//! The dispatcher decides how a request personalizes each feed (anonymous
//! and location-less buyers get global results) and validates raw filter
//! input. No other business logic lives here.

use crate::config::Config;
use crate::error::FeedError;
use crate::models::{RankedProduct, RequesterContext, TrendingProduct};
use crate::storage::CatalogStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::scoring::HomeFeedRanker;
use super::trending::TrendingEngine;

pub struct FeedDispatcher {
    store: Arc<dyn CatalogStore>,
    home: HomeFeedRanker,
    trending: TrendingEngine,
}

impl FeedDispatcher {
    pub fn new(store: Arc<dyn CatalogStore>, config: Config) -> Self {
        Self {
            store,
            home: HomeFeedRanker::new(config.scoring),
            trending: TrendingEngine::new(config.trending),
        }
    }

    /// The full catalog ranked by composed score, biased to the requester's
    /// region when one is known.
    pub async fn home_feed(
        &self,
        requester: &RequesterContext,
    ) -> Result<Vec<RankedProduct>, FeedError> {
        let region = requester.region();
        let ranked = self.home.rank(self.store.as_ref(), region).await?;

        info!(
            results = ranked.len(),
            personalized = region.is_some(),
            "home feed dispatched"
        );

        Ok(ranked)
    }

    /// Window-bounded trending, personalized and filtered like the home
    /// feed. `category` is the raw request parameter; a value that is not a
    /// valid id fails with [`FeedError::InvalidFilter`].
    pub async fn trending_feed(
        &self,
        requester: &RequesterContext,
        category: Option<&str>,
    ) -> Result<Vec<TrendingProduct>, FeedError> {
        self.trending_feed_at(Utc::now(), requester, category).await
    }

    /// Same computation with an explicit clock reading, so callers and tests
    /// can replay a snapshot deterministically.
    pub async fn trending_feed_at(
        &self,
        now: DateTime<Utc>,
        requester: &RequesterContext,
        category: Option<&str>,
    ) -> Result<Vec<TrendingProduct>, FeedError> {
        let category_id = parse_category(category)?;

        let since = self.trending.window_start(now);
        let catalog = self.store.fetch_catalog().await?;
        let paid_items = self.store.fetch_paid_order_items_since(since).await?;

        let region = requester.region();
        let trending = self.trending.rank(catalog, &paid_items, region, category_id);

        info!(
            results = trending.len(),
            personalized = region.is_some(),
            "trending feed dispatched"
        );

        Ok(trending)
    }
}

/// An absent or blank category parameter means "no filter"; anything else
/// must parse as a category id.
fn parse_category(raw: Option<&str>) -> Result<Option<Uuid>, FeedError> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => Uuid::parse_str(value).map(Some).map_err(|_| {
            FeedError::InvalidFilter(format!("'{value}' is not a valid category id"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockCatalogStore;
    use anyhow::anyhow;

    #[test]
    fn test_parse_category_accepts_absent_and_blank() {
        assert_eq!(parse_category(None).unwrap(), None);
        assert_eq!(parse_category(Some("")).unwrap(), None);
        assert_eq!(parse_category(Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_category_accepts_valid_id() {
        let id = Uuid::new_v4();
        let parsed = parse_category(Some(&id.to_string())).unwrap();
        assert_eq!(parsed, Some(id));
    }

    #[test]
    fn test_parse_category_rejects_malformed_id() {
        let err = parse_category(Some("electronics")).unwrap_err();
        assert!(matches!(err, FeedError::InvalidFilter(_)));
    }

    #[tokio::test]
    async fn test_malformed_category_fails_before_any_storage_call() {
        let store = MockCatalogStore::new();
        let dispatcher = FeedDispatcher::new(Arc::new(store), Config::default());

        let err = dispatcher
            .trending_feed(&RequesterContext::Anonymous, Some("not-an-id"))
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::InvalidFilter(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_as_storage_error() {
        let mut store = MockCatalogStore::new();
        store
            .expect_fetch_catalog()
            .returning(|| Err(anyhow!("connection refused")));

        let dispatcher = FeedDispatcher::new(Arc::new(store), Config::default());

        let err = dispatcher
            .home_feed(&RequesterContext::Anonymous)
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::Storage(_)));
    }
}
