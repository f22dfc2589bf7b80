use derive_more::{Add, Constructor, Display, From, Into, Sum};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - an amount in billions of USD
#[derive(
    Debug, Clone, Copy, PartialEq, Default, From, Into, Add, Sum, Constructor, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}B", _0)]
pub struct Billions(f64);

impl Billions {
    pub const ZERO: Billions = Billions(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialOrd for Billions {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - stablecoin share of the whole crypto market.
///
/// `grand_total` is always computed as `stablecoin_total + other_total`, so the
/// two parts add up by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareSplit {
    pub stablecoin_total: Billions,
    pub other_total: Billions,
    pub grand_total: Billions,
}

impl ShareSplit {
    /// Split `market_total` into the stablecoin part and the rest.
    ///
    /// When `market_total` is smaller than `stablecoin_total` the "other" part
    /// clamps to zero and the grand total becomes the stablecoin total.
    pub fn from_totals(stablecoin_total: Billions, market_total: Billions) -> Self {
        let stable = stablecoin_total.value().max(0.0);
        let other = (market_total.value() - stable).max(0.0);
        Self {
            stablecoin_total: Billions(stable),
            other_total: Billions(other),
            grand_total: Billions(stable + other),
        }
    }

    /// Whether the configured market total had to be clamped.
    pub fn is_clamped(&self, market_total: Billions) -> bool {
        market_total.value() < self.stablecoin_total.value()
    }

    /// Stablecoin share of the grand total, in percent.
    pub fn stablecoin_percent(&self) -> f64 {
        if self.grand_total.value() <= 0.0 {
            return 0.0;
        }
        self.stablecoin_total.value() / self.grand_total.value() * 100.0
    }
}
