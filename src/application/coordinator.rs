use derive_more::Display;
use serde::Serialize;

use crate::application::ports::{ChartHandleOf, DashboardHost, RevealWatcher};
use crate::application::use_cases::{
    attach_reveal_behavior, build_timeline, render_bar_chart, render_doughnut_chart,
};
use crate::config::DashboardConfig;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::DashboardDataProvider,
};
use crate::{log_error, log_info};

/// Bootstrap steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BootstrapStep {
    #[display(fmt = "bar chart")]
    BarChart,
    #[display(fmt = "doughnut chart")]
    DoughnutChart,
    #[display(fmt = "timeline")]
    Timeline,
    #[display(fmt = "reveal")]
    Reveal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: BootstrapStep,
    pub error: Option<AppError>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Serializable summary handed back to the host page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatus {
    pub steps: Vec<StepStatus>,
    pub timeline_nodes: usize,
    pub revealed_nodes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepStatus {
    pub step: BootstrapStep,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything a started dashboard keeps alive: drawn charts and the reveal
/// watcher. Dropping the session releases them.
pub struct DashboardSession<H: DashboardHost> {
    pub charts: Vec<ChartHandleOf<H>>,
    pub watcher: Option<H::Watcher>,
    pub outcomes: Vec<StepOutcome>,
    pub timeline_nodes: usize,
}

impl<H: DashboardHost> DashboardSession<H> {
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_ok())
    }

    pub fn status(&self) -> DashboardStatus {
        DashboardStatus {
            steps: self
                .outcomes
                .iter()
                .map(|outcome| StepStatus {
                    step: outcome.step,
                    ok: outcome.is_ok(),
                    error: outcome.error.as_ref().map(ToString::to_string),
                })
                .collect(),
            timeline_nodes: self.timeline_nodes,
            revealed_nodes: self.watcher.as_ref().map_or(0, |w| w.shown_count()),
        }
    }
}

/// Runs the dashboard bootstrap once: bar chart, doughnut chart, timeline,
/// reveal behavior. Steps are independent; a failure is logged and recorded
/// and the next step still runs.
pub struct DashboardCoordinator<P> {
    provider: P,
    config: DashboardConfig,
}

impl<P: DashboardDataProvider> DashboardCoordinator<P> {
    pub fn new(provider: P, config: DashboardConfig) -> Self {
        get_logger().debug(LogComponent::Application("DashboardCoordinator"), "Creating dashboard coordinator");
        Self { provider, config }
    }

    pub fn start<H: DashboardHost>(&self, host: &mut H) -> DashboardSession<H> {
        log_info!(LogComponent::Application("DashboardCoordinator"), "Starting dashboard bootstrap");

        let mut outcomes = Vec::with_capacity(4);
        let mut charts = Vec::with_capacity(2);

        let rows = self.provider.market_rows();
        let bar = render_bar_chart(host.engine(), &self.config.bar_chart_id, &rows);
        charts.extend(record(&mut outcomes, BootstrapStep::BarChart, bar));

        let split = self.provider.share_split();
        let doughnut = render_doughnut_chart(host.engine(), &self.config.doughnut_chart_id, &split);
        charts.extend(record(&mut outcomes, BootstrapStep::DoughnutChart, doughnut));

        let events = self.provider.timeline_events();
        let timeline = host
            .timeline_container(&self.config.timeline_container_id)
            .and_then(|mut container| build_timeline(&mut container, &events));
        let nodes = record(&mut outcomes, BootstrapStep::Timeline, timeline).unwrap_or_default();
        let timeline_nodes = nodes.len();

        let reveal = host.reveal_watcher(self.config.reveal_threshold).and_then(|mut watcher| {
            attach_reveal_behavior(&mut watcher, nodes)?;
            Ok(watcher)
        });
        let watcher = record(&mut outcomes, BootstrapStep::Reveal, reveal);

        let session = DashboardSession { charts, watcher, outcomes, timeline_nodes };
        if session.is_complete() {
            log_info!(
                LogComponent::Application("DashboardCoordinator"),
                "Dashboard ready: {} charts, {} timeline nodes",
                session.charts.len(),
                timeline_nodes
            );
        } else {
            log_error!(
                LogComponent::Application("DashboardCoordinator"),
                "Dashboard started with {} failed step(s)",
                session.failures().count()
            );
        }
        session
    }
}

fn record<T>(outcomes: &mut Vec<StepOutcome>, step: BootstrapStep, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => {
            outcomes.push(StepOutcome { step, error: None });
            Some(value)
        }
        Err(err) => {
            get_logger().log_with_metadata(
                LogLevel::Error,
                LogComponent::Application("DashboardCoordinator"),
                &format!("{} step failed", step),
                &err.to_string(),
            );
            outcomes.push(StepOutcome { step, error: Some(err) });
            None
        }
    }
}
