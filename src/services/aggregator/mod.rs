//! Bulk derivation of per-product engagement signals.

use crate::models::{Product, ProductSignals};
use crate::storage::CatalogStore;
use anyhow::Result;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Computes like/comment signals for a candidate set.
///
/// Exactly two bulk storage calls per invocation regardless of candidate
/// count. Pure read: deterministic for a fixed snapshot, no side effects.
pub struct CatalogAggregator;

impl Default for CatalogAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogAggregator {
    pub fn new() -> Self {
        Self
    }

    pub async fn aggregate(
        &self,
        store: &dyn CatalogStore,
        products: &[Product],
    ) -> Result<HashMap<Uuid, ProductSignals>> {
        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();

        let like_counts = store.fetch_like_counts(&ids).await?;
        let comment_stats = store.fetch_comment_stats(&ids).await?;

        let mut signals = HashMap::with_capacity(ids.len());
        for id in ids {
            let stats = comment_stats.get(&id);
            signals.insert(
                id,
                ProductSignals {
                    recent_likes: like_counts.get(&id).copied().unwrap_or(0),
                    recent_comments: stats.map(|s| s.count).unwrap_or(0),
                    avg_rating: stats.map(|s| s.avg_rating).unwrap_or(0.0),
                },
            );
        }

        debug!(candidates = signals.len(), "catalog signals aggregated");

        Ok(signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommentStats;
    use crate::storage::MockCatalogStore;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn test_product(id: Uuid) -> Product {
        Product {
            id,
            name: "charcoal stove".to_string(),
            unit_price: Decimal::new(1500, 2),
            sales_count: 0,
            stock_quantity: 10,
            seller: None,
            category_id: None,
            date_of_post: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_aggregate_merges_bulk_maps() {
        let liked = Uuid::new_v4();
        let commented = Uuid::new_v4();
        let products = vec![test_product(liked), test_product(commented)];

        let mut store = MockCatalogStore::new();
        store
            .expect_fetch_like_counts()
            .times(1)
            .returning(move |_| Ok(HashMap::from([(liked, 5)])));
        store.expect_fetch_comment_stats().times(1).returning(move |_| {
            Ok(HashMap::from([(
                commented,
                CommentStats {
                    count: 3,
                    avg_rating: 4.5,
                },
            )]))
        });

        let signals = CatalogAggregator::new()
            .aggregate(&store, &products)
            .await
            .unwrap();

        assert_eq!(signals[&liked].recent_likes, 5);
        assert_eq!(signals[&liked].recent_comments, 0);
        assert_eq!(signals[&commented].recent_comments, 3);
        assert_eq!(signals[&commented].avg_rating, 4.5);
    }

    #[tokio::test]
    async fn test_missing_aggregates_default_to_zero() {
        let product = test_product(Uuid::new_v4());
        let id = product.id;

        let mut store = MockCatalogStore::new();
        store
            .expect_fetch_like_counts()
            .returning(|_| Ok(HashMap::new()));
        store
            .expect_fetch_comment_stats()
            .returning(|_| Ok(HashMap::new()));

        let signals = CatalogAggregator::new()
            .aggregate(&store, &[product])
            .await
            .unwrap();

        assert_eq!(signals[&id], ProductSignals::default());
        assert_eq!(signals[&id].avg_rating, 0.0);
    }
}
