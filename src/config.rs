use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogLevel;
use crate::domain::timeline::DEFAULT_REVEAL_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_BAR_CHART_ID: &str = "marketCapChart";
pub const DEFAULT_DOUGHNUT_CHART_ID: &str = "shareChart";
pub const DEFAULT_TIMELINE_ID: &str = "timeline";
/// Total crypto market cap, billions of USD.
pub const DEFAULT_TOTAL_MARKET_CAP: f64 = 3690.0;

/// Host-supplied settings. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub bar_chart_id: String,
    pub doughnut_chart_id: String,
    pub timeline_container_id: String,
    pub total_market_cap_billions: f64,
    pub reveal_threshold: f64,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bar_chart_id: DEFAULT_BAR_CHART_ID.to_string(),
            doughnut_chart_id: DEFAULT_DOUGHNUT_CHART_ID.to_string(),
            timeline_container_id: DEFAULT_TIMELINE_ID.to_string(),
            total_market_cap_billions: DEFAULT_TOTAL_MARKET_CAP,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate. An empty string yields the defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        for (name, id) in [
            ("barChartId", &self.bar_chart_id),
            ("doughnutChartId", &self.doughnut_chart_id),
            ("timelineContainerId", &self.timeline_container_id),
        ] {
            if id.trim().is_empty() {
                return Err(AppError::Config(format!("{} must not be empty", name)));
            }
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(AppError::Config(format!(
                "revealThreshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !self.total_market_cap_billions.is_finite() || self.total_market_cap_billions < 0.0 {
            return Err(AppError::Config(format!(
                "totalMarketCapBillions must be a non-negative number, got {}",
                self.total_market_cap_billions
            )));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> AppResult<LogLevel> {
        LogLevel::from_str(&self.log_level)
            .map_err(|_| AppError::Config(format!("unknown logLevel '{}'", self.log_level)))
    }
}
