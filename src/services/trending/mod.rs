//! Purchase-driven trending over a rolling window.
//!
//! Re-derived from paid order lines on every call; the engine holds no
//! state between invocations and no cache.

use crate::config::TrendingConfig;
use crate::models::{PaidOrderItem, Product, TrendingProduct};
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use tracing::info;
use uuid::Uuid;

pub struct TrendingEngine {
    config: TrendingConfig,
}

struct Tally {
    units_sold: u64,
    orders: HashSet<Uuid>,
}

impl TrendingEngine {
    pub fn new(config: TrendingConfig) -> Self {
        Self { config }
    }

    /// Lower bound of the trending window for the given clock reading. The
    /// storage fetch for paid order lines is made with this bound.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.config.window_days)
    }

    /// Rank catalog products by units sold within the window.
    ///
    /// `paid_items` must already be restricted to paid orders inside the
    /// window (the storage call is parameterized by [`Self::window_start`]).
    /// Products with no qualifying order lines do not appear in the result.
    /// Order is total: units sold descending, then distinct purchase count
    /// descending, then product id.
    pub fn rank(
        &self,
        catalog: Vec<Product>,
        paid_items: &[PaidOrderItem],
        region: Option<&str>,
        category_id: Option<Uuid>,
    ) -> Vec<TrendingProduct> {
        let mut tallies: HashMap<Uuid, Tally> = HashMap::new();
        for item in paid_items {
            let tally = tallies.entry(item.product_id).or_insert_with(|| Tally {
                units_sold: 0,
                orders: HashSet::new(),
            });
            tally.units_sold += u64::from(item.quantity);
            tally.orders.insert(item.order_id);
        }

        let mut trending: Vec<TrendingProduct> = catalog
            .into_iter()
            .filter_map(|product| {
                let tally = tallies.get(&product.id)?;

                if let Some(region) = region {
                    let matches = product
                        .seller
                        .as_ref()
                        .is_some_and(|seller| seller.location_matches(region));
                    if !matches {
                        return None;
                    }
                }

                if let Some(category_id) = category_id {
                    if product.category_id != Some(category_id) {
                        return None;
                    }
                }

                Some(TrendingProduct {
                    units_sold: tally.units_sold,
                    purchase_count: tally.orders.len() as u64,
                    product,
                })
            })
            .collect();

        trending.sort_by(|a, b| {
            b.units_sold
                .cmp(&a.units_sold)
                .then_with(|| b.purchase_count.cmp(&a.purchase_count))
                .then_with(|| a.product.id.cmp(&b.product.id))
        });

        info!(
            results = trending.len(),
            regional = region.is_some(),
            filtered_by_category = category_id.is_some(),
            "trending feed ranked"
        );

        trending
    }
}
