use once_cell::sync::Lazy;

use crate::config::DEFAULT_TOTAL_MARKET_CAP;
use crate::domain::{
    logging::LogComponent,
    market_data::{Billions, DashboardDataProvider, MarketRow, ShareSplit, TimelineEvent, total_of},
};
use crate::log_warn;

/// Largest stablecoins by market cap, billions of USD, largest first.
static MARKET_ROWS: Lazy<Vec<MarketRow>> = Lazy::new(|| {
    vec![
        MarketRow::new("USDT", 115.00),
        MarketRow::new("USDC", 35.20),
        MarketRow::new("DAI", 5.36),
        MarketRow::new("USDe", 3.43),
        MarketRow::new("FDUSD", 2.62),
        MarketRow::new("USDD", 0.74),
        MarketRow::new("TUSD", 0.49),
        MarketRow::new("PYUSD", 0.40),
        MarketRow::new("FRAX", 0.33),
        MarketRow::new("GUSD", 0.28),
    ]
});

static TIMELINE_EVENTS: Lazy<Vec<TimelineEvent>> = Lazy::new(|| {
    vec![
        TimelineEvent::new(
            "2014",
            "Tether launches",
            "USDT goes live as the first widely used dollar-pegged token, issued on the Omni layer of Bitcoin.",
        ),
        TimelineEvent::new(
            "2017",
            "DAI introduces crypto-backed stability",
            "MakerDAO releases a decentralised stablecoin secured by over-collateralised on-chain vaults.",
        ),
        TimelineEvent::new(
            "2018",
            "USDC enters the market",
            "Circle and Coinbase launch a fully reserved, regularly attested dollar stablecoin.",
        ),
        TimelineEvent::new(
            "2020",
            "DeFi summer",
            "Lending and liquidity protocols turn stablecoins into the base currency of decentralised finance.",
        ),
        TimelineEvent::new(
            "2022–2023",
            "Collapse and scrutiny",
            "The TerraUSD de-peg and bank failures test reserves and push regulators to act.",
        ),
        TimelineEvent::new(
            "2024",
            "Regulated era",
            "MiCA rules take effect in the EU and payment giants ship their own dollar tokens.",
        ),
    ]
});

/// Literal dashboard content. The total crypto market figure is an input so
/// the "other assets" share can be updated without touching the data.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDataProvider {
    total_market_cap: Billions,
}

impl StaticDataProvider {
    pub fn new() -> Self {
        Self::with_market_total(DEFAULT_TOTAL_MARKET_CAP)
    }

    pub fn with_market_total(total_market_cap_billions: f64) -> Self {
        Self { total_market_cap: Billions::new(total_market_cap_billions) }
    }

    pub fn total_market_cap(&self) -> Billions {
        self.total_market_cap
    }
}

impl Default for StaticDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardDataProvider for StaticDataProvider {
    fn market_rows(&self) -> Vec<MarketRow> {
        MARKET_ROWS.clone()
    }

    fn share_split(&self) -> ShareSplit {
        let split = ShareSplit::from_totals(total_of(&MARKET_ROWS), self.total_market_cap);
        if split.is_clamped(self.total_market_cap) {
            log_warn!(
                LogComponent::Infrastructure("StaticDataProvider"),
                "total market cap {} is below the stablecoin total {}; other share clamped to zero",
                self.total_market_cap,
                split.stablecoin_total
            );
        }
        split
    }

    fn timeline_events(&self) -> Vec<TimelineEvent> {
        TIMELINE_EVENTS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

    struct CapturingLogger;

    impl Logger for CapturingLogger {
        fn log(&self, entry: LogEntry) {
            CAPTURED.lock().unwrap().push((entry.level, entry.message));
        }
    }

    fn clamp_warnings() -> usize {
        CAPTURED
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, message)| *level == LogLevel::Warn && message.contains("clamped"))
            .count()
    }

    #[test]
    fn market_total_below_stablecoins_warns_and_clamps() {
        init_logger(Box::new(CapturingLogger));

        let split = StaticDataProvider::with_market_total(100.0).share_split();

        assert_eq!(split.other_total, Billions::ZERO);
        assert!((split.grand_total.value() - 163.85).abs() < 1e-6);
        assert!(clamp_warnings() >= 1);
    }

    #[test]
    fn ten_rows_in_descending_order() {
        let rows = StaticDataProvider::new().market_rows();
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|pair| pair[0].value >= pair[1].value));
    }

    #[test]
    fn stablecoin_total_is_sum_of_rows() {
        let split = StaticDataProvider::new().share_split();
        assert!((split.stablecoin_total.value() - 163.85).abs() < 1e-6);
        assert!((split.grand_total.value() - 3690.0).abs() < 1e-6);
    }

    #[test]
    fn market_total_is_configurable() {
        let split = StaticDataProvider::with_market_total(1000.0).share_split();
        assert!((split.other_total.value() - (1000.0 - 163.85)).abs() < 1e-6);
    }

    #[test]
    fn six_events_including_a_year_range() {
        let events = StaticDataProvider::new().timeline_events();
        assert_eq!(events.len(), 6);
        assert!(events.iter().any(|event| event.year == "2022–2023"));
    }
}
