use crate::application::ports::ChartEngine;
use crate::domain::{
    chart::{ChartSpec, bar_chart_spec, doughnut_chart_spec},
    errors::AppResult,
    logging::LogComponent,
    market_data::{MarketRow, ShareSplit},
};
use crate::{log_debug, log_warn};

/// Bar chart of market caps, one bar per row.
pub fn render_bar_chart<E: ChartEngine>(
    engine: &mut E,
    surface_id: &str,
    rows: &[MarketRow],
) -> AppResult<E::Handle> {
    if let Some(bad) = rows.iter().find(|row| !row.is_valid()) {
        log_warn!(
            LogComponent::Application("RenderChart"),
            "market row '{}' has invalid value {}",
            bad.label,
            bad.value.value()
        );
    }
    draw(engine, surface_id, bar_chart_spec(rows))
}

/// Doughnut chart of the stablecoin share.
pub fn render_doughnut_chart<E: ChartEngine>(
    engine: &mut E,
    surface_id: &str,
    split: &ShareSplit,
) -> AppResult<E::Handle> {
    draw(engine, surface_id, doughnut_chart_spec(split))
}

fn draw<E: ChartEngine>(engine: &mut E, surface_id: &str, spec: ChartSpec) -> AppResult<E::Handle> {
    log_debug!(
        LogComponent::Application("RenderChart"),
        "drawing {} chart with {} points on #{}",
        spec.kind,
        spec.points().len(),
        surface_id
    );
    engine.draw(surface_id, &spec)
}
