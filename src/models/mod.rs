use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog product with seller attributes denormalized onto the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Currency-scale price, always >= 0.
    pub unit_price: Decimal,
    /// Cumulative units sold over the product's lifetime.
    pub sales_count: u64,
    pub stock_quantity: u32,
    /// `None` when the seller record has been soft-deleted.
    pub seller: Option<SellerInfo>,
    pub category_id: Option<Uuid>,
    pub date_of_post: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerInfo {
    pub id: Uuid,
    /// Lifetime units sold across all products.
    pub sales: u64,
    /// Reputation score, validated into [0, 100] upstream.
    pub trust: f64,
    pub followers: u64,
    /// Free-text region label, possibly empty. Not geocoded.
    pub location: String,
}

impl SellerInfo {
    pub fn clamped_trust(&self) -> f64 {
        self.trust.clamp(0.0, 100.0)
    }

    /// Case-insensitive exact match on the free-text region label.
    pub fn location_matches(&self, region: &str) -> bool {
        self.location.to_lowercase() == region.to_lowercase()
    }
}

/// Derived engagement signals for one product.
///
/// The `recent_` names are historical: the counts are all-time, only the
/// trending window is actually time-bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSignals {
    pub recent_likes: u64,
    pub recent_comments: u64,
    /// Mean comment rating in [1, 5]; 0.0 when the product has no comments.
    pub avg_rating: f64,
}

/// Bulk comment aggregate as returned by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommentStats {
    pub count: u64,
    pub avg_rating: f64,
}

/// One order line belonging to a paid order, as returned by the storage
/// layer for the trending window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidOrderItem {
    pub product_id: Uuid,
    pub order_id: Uuid,
    pub quantity: u32,
}

/// Who is asking for a feed.
///
/// A buyer without a stored location gets the same global feeds as an
/// anonymous visitor; the distinction is kept explicit rather than folded
/// into a placeholder buyer value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequesterContext {
    Anonymous,
    Buyer { location: Option<String> },
}

impl RequesterContext {
    /// Region used for feed personalization. `None` means global feeds.
    pub fn region(&self) -> Option<&str> {
        match self {
            RequesterContext::Anonymous => None,
            RequesterContext::Buyer { location } => {
                location.as_deref().filter(|loc| !loc.is_empty())
            }
        }
    }
}

/// Home feed entry: a product with its blended score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedProduct {
    pub product: Product,
    pub final_score: f64,
}

/// Trending feed entry: a product with its window purchase tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingProduct {
    pub product: Product,
    /// Units sold within the trending window, summed over order lines.
    pub units_sold: u64,
    /// Distinct paid orders contributing to `units_sold`.
    pub purchase_count: u64,
}

/// The four sub-scores and their weighted blend for one product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub price_score: f64,
    pub seller_score: f64,
    pub interaction_score: f64,
    pub popularity_score: f64,
    pub final_score: f64,
}
