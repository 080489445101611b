use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub scoring: ScoringWeights,
    pub trending: TrendingConfig,
}

/// Weights for the home feed scoring blend.
///
/// Injected into the composer at construction time so alternate weightings
/// can be exercised in tests without touching process configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the inverse-price sub-score.
    pub price: f64,
    /// Weight for the seller reputation sub-score.
    pub seller: f64,
    /// Weight for the like/comment engagement sub-score.
    pub interaction: f64,
    /// Weight for the historical demand sub-score.
    pub popularity: f64,
    /// Seller reputation blend: lifetime sales component.
    pub seller_sales: f64,
    /// Seller reputation blend: trust component.
    pub seller_trust: f64,
    /// Seller reputation blend: follower component.
    pub seller_followers: f64,
    /// Comments count this many times a like in the interaction sub-score.
    pub comment_multiplier: f64,
    /// Scale applied to cumulative sales in the popularity sub-score.
    pub popularity_multiplier: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price: 0.25,
            seller: 0.25,
            interaction: 0.30,
            popularity: 0.20,
            seller_sales: 0.6,
            seller_trust: 0.3,
            seller_followers: 0.1,
            comment_multiplier: 2.0,
            popularity_multiplier: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingConfig {
    /// Trailing window, in days, over which paid orders count as trending.
    pub window_days: i64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self { window_days: 30 }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            scoring: ScoringWeights {
                price: env::var("SCORE_WEIGHT_PRICE")
                    .unwrap_or_else(|_| "0.25".to_string())
                    .parse()
                    .expect("SCORE_WEIGHT_PRICE must be a valid f64"),
                seller: env::var("SCORE_WEIGHT_SELLER")
                    .unwrap_or_else(|_| "0.25".to_string())
                    .parse()
                    .expect("SCORE_WEIGHT_SELLER must be a valid f64"),
                interaction: env::var("SCORE_WEIGHT_INTERACTION")
                    .unwrap_or_else(|_| "0.30".to_string())
                    .parse()
                    .expect("SCORE_WEIGHT_INTERACTION must be a valid f64"),
                popularity: env::var("SCORE_WEIGHT_POPULARITY")
                    .unwrap_or_else(|_| "0.20".to_string())
                    .parse()
                    .expect("SCORE_WEIGHT_POPULARITY must be a valid f64"),
                ..ScoringWeights::default()
            },
            trending: TrendingConfig {
                window_days: env::var("TRENDING_WINDOW_DAYS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("TRENDING_WINDOW_DAYS must be a valid i64"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        let total = weights.price + weights.seller + weights.interaction + weights.popularity;
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_window() {
        assert_eq!(TrendingConfig::default().window_days, 30);
    }
}
