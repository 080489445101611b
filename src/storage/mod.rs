use crate::models::{CommentStats, PaidOrderItem, Product};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Read-only boundary to the catalog storage layer.
///
/// Implementations own query shape, retries and snapshot consistency; the
/// ranking core only ever reads point-in-time snapshots and performs no
/// writes. All calls are bulk: the aggregation contract forbids per-product
/// round-trips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Full active catalog with seller and category attributes joined in.
    async fn fetch_catalog(&self) -> Result<Vec<Product>>;

    /// All-time like counts for the given products. Products with no likes
    /// may be absent from the map.
    async fn fetch_like_counts(&self, product_ids: &[Uuid]) -> Result<HashMap<Uuid, u64>>;

    /// Comment count and mean rating per product. Products with no comments
    /// may be absent from the map.
    async fn fetch_comment_stats(
        &self,
        product_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, CommentStats>>;

    /// Order lines whose parent order is paid and was placed at or after
    /// `since`.
    async fn fetch_paid_order_items_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PaidOrderItem>>;
}
