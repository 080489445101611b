//! Weighted multi-factor scoring for the home feed.
//!
//! Four sub-scores feed a fixed linear blend:
//! - price: inverse of unit price, bounded to (0, 1]
//! - seller: reputation blend of lifetime sales, trust and followers
//! - interaction: likes plus double-weighted comments
//! - popularity: scaled cumulative sales

use crate::config::ScoringWeights;
use crate::models::{Product, ProductSignals, RankedProduct, ScoreBreakdown};
use crate::storage::CatalogStore;
use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::aggregator::CatalogAggregator;

pub struct ScoreComposer {
    weights: ScoringWeights,
}

impl ScoreComposer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Compute the four sub-scores and their weighted blend for one product.
    pub fn score(&self, product: &Product, signals: &ProductSignals) -> ScoreBreakdown {
        let w = &self.weights;

        // An unconvertible price degrades to the worst price score, never
        // the best.
        let price = product.unit_price.to_f64().unwrap_or(f64::MAX);
        let denominator = price + 1.0;
        // unit_price >= 0 makes the denominator structurally positive.
        debug_assert!(denominator > 0.0, "price offset invariant violated");
        let price_score = 1.0 / denominator;

        let seller_score = match &product.seller {
            Some(seller) => {
                seller.sales as f64 * w.seller_sales
                    + seller.clamped_trust() * w.seller_trust
                    + seller.followers as f64 * w.seller_followers
            }
            // Soft-deleted seller: every reputation input defaults to 0.
            None => 0.0,
        };

        let interaction_score =
            signals.recent_likes as f64 + signals.recent_comments as f64 * w.comment_multiplier;

        let popularity_score = product.sales_count as f64 * w.popularity_multiplier;

        let final_score = price_score * w.price
            + seller_score * w.seller
            + interaction_score * w.interaction
            + popularity_score * w.popularity;

        debug!(
            product_id = %product.id,
            price_score,
            seller_score,
            interaction_score,
            popularity_score,
            final_score,
            "score composed"
        );

        ScoreBreakdown {
            price_score,
            seller_score,
            interaction_score,
            popularity_score,
            final_score,
        }
    }

    /// Score every candidate and return them ordered best-first.
    ///
    /// The order is total: final score descending, then `date_of_post`
    /// descending (newer first), then product id, so repeated calls over the
    /// same snapshot yield identical sequences.
    pub fn rank(
        &self,
        products: Vec<Product>,
        signals: &HashMap<Uuid, ProductSignals>,
    ) -> Vec<RankedProduct> {
        let mut ranked: Vec<RankedProduct> = products
            .into_iter()
            .map(|product| {
                let product_signals = signals
                    .get(&product.id)
                    .copied()
                    .unwrap_or_default();
                let final_score = self.score(&product, &product_signals).final_score;
                RankedProduct {
                    product,
                    final_score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.product.date_of_post.cmp(&a.product.date_of_post))
                .then_with(|| a.product.id.cmp(&b.product.id))
        });

        ranked
    }
}

/// Home feed: the full catalog ranked by the composed score, optionally
/// biased to the requester's region.
pub struct HomeFeedRanker {
    aggregator: CatalogAggregator,
    composer: ScoreComposer,
}

impl HomeFeedRanker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            aggregator: CatalogAggregator::new(),
            composer: ScoreComposer::new(weights),
        }
    }

    /// Rank the whole catalog; when a region is given, keep only products
    /// whose seller matches it. Ranking happens once per call so callers can
    /// paginate the returned sequence without re-scoring.
    pub async fn rank(
        &self,
        store: &dyn CatalogStore,
        region: Option<&str>,
    ) -> Result<Vec<RankedProduct>> {
        let catalog = store.fetch_catalog().await?;
        let signals = self.aggregator.aggregate(store, &catalog).await?;

        let mut ranked = self.composer.rank(catalog, &signals);

        if let Some(region) = region {
            ranked.retain(|entry| {
                entry
                    .product
                    .seller
                    .as_ref()
                    .is_some_and(|seller| seller.location_matches(region))
            });
        }

        info!(
            results = ranked.len(),
            regional = region.is_some(),
            "home feed ranked"
        );

        Ok(ranked)
    }
}
