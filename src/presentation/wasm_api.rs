use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::application::{DashboardCoordinator, DashboardSession, DashboardStatus};
use crate::config::DashboardConfig;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, LogLevel, Logger, get_logger, init_logger},
};
use crate::event_utils::document_ready;
use crate::infrastructure::{BrowserHost, StaticDataProvider, dom, services::ConsoleLogger};
use crate::log_info;

thread_local! {
    static ACTIVE_DASHBOARD: RefCell<Option<DashboardSession<BrowserHost>>> = const { RefCell::new(None) };
}

/// Start the dashboard with the default anchors and settings once the
/// document is parsed. Resolves to a JSON status summary.
#[wasm_bindgen(js_name = startDashboard)]
pub async fn start_dashboard() -> Result<String, JsValue> {
    Ok(launch(DashboardConfig::default()).await?)
}

/// Like `startDashboard`, with a JSON configuration object, e.g.
/// `{"timelineContainerId": "events", "totalMarketCapBillions": 2500}`.
///
/// The console logger is installed by the first start of the page; `logLevel`
/// on later starts is ignored with a warning.
#[wasm_bindgen(js_name = startDashboardWithConfig)]
pub async fn start_dashboard_with_config(config_json: String) -> Result<String, JsValue> {
    let config = DashboardConfig::from_json(&config_json)?;
    Ok(launch(config).await?)
}

/// Tear the dashboard down: charts destroyed, observer disconnected.
/// Returns whether a dashboard was running.
#[wasm_bindgen(js_name = stopDashboard)]
pub fn stop_dashboard() -> bool {
    let session = ACTIVE_DASHBOARD.with(|active| active.borrow_mut().take());
    let was_running = session.is_some();
    drop(session);
    if was_running {
        get_logger().info(LogComponent::Presentation("WasmApi"), "Dashboard stopped");
    }
    was_running
}

/// JSON status of the running dashboard, if any.
#[wasm_bindgen(js_name = dashboardStatus)]
pub fn dashboard_status() -> Option<String> {
    current_status().and_then(|status| serde_json::to_string(&status).ok())
}

fn current_status() -> Option<DashboardStatus> {
    ACTIVE_DASHBOARD.with(|active| active.borrow().as_ref().map(DashboardSession::status))
}

async fn launch(config: DashboardConfig) -> AppResult<String> {
    let requested = config.log_level()?;
    if !init_logger(Box::new(ConsoleLogger::new(requested))) {
        warn_if_level_ignored(requested);
    }

    let document = dom::document()?;
    document_ready(&document).await?;

    // Checked after the await: two starts may have been waiting on the same event.
    if let Some(status) = current_status() {
        get_logger().warn(LogComponent::Presentation("WasmApi"), "Dashboard already running; start ignored");
        return encode(&status);
    }

    let provider = StaticDataProvider::with_market_total(config.total_market_cap_billions);
    let coordinator = DashboardCoordinator::new(provider, config);
    let mut host = BrowserHost::new(document);
    let session = coordinator.start(&mut host);
    let status = session.status();

    ACTIVE_DASHBOARD.with(|active| *active.borrow_mut() = Some(session));
    log_info!(LogComponent::Presentation("WasmApi"), "Dashboard session stored");
    encode(&status)
}

fn warn_if_level_ignored(requested: LogLevel) {
    let logger = get_logger();
    if let Some(active) = conflicting_level(logger, requested) {
        logger.warn(
            LogComponent::Presentation("WasmApi"),
            &format!(
                "logger already installed at {}; requested level {} ignored",
                active.to_string().trim(),
                requested.to_string().trim()
            ),
        );
    }
}

/// Level of the installed logger when it differs from `requested`.
fn conflicting_level(logger: &dyn Logger, requested: LogLevel) -> Option<LogLevel> {
    logger.min_level().filter(|active| *active != requested)
}

fn encode(status: &DashboardStatus) -> AppResult<String> {
    serde_json::to_string(status).map_err(|e| AppError::Browser(format!("status encoding failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differing_level_on_restart_is_reported() {
        let installed = ConsoleLogger::new(LogLevel::Info);
        assert_eq!(conflicting_level(&installed, LogLevel::Debug), Some(LogLevel::Info));
        assert_eq!(conflicting_level(&installed, LogLevel::Info), None);
    }
}
