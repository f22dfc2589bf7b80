use super::entities::*;
use super::format::{TickFormat, TooltipFormat};
use super::value_objects::{ChartKind, Color, LegendPosition, palette};
use crate::domain::market_data::{MarketRow, ShareSplit};

pub const BAR_DATASET_LABEL: &str = "Market Cap (Billions USD)";
pub const SHARE_DATASET_LABEL: &str = "Market Share";
pub const STABLECOIN_SEGMENT: &str = "Stablecoins";
pub const OTHER_SEGMENT: &str = "Other Crypto Assets";

/// One bar per row, labelled and ordered exactly as the rows.
pub fn bar_chart_spec(rows: &[MarketRow]) -> ChartSpec {
    let gradient = palette::bar_gradient();

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: rows.iter().map(|row| row.label.clone()).collect(),
            datasets: vec![Dataset {
                label: BAR_DATASET_LABEL.to_string(),
                data: rows.iter().map(|row| row.value.value()).collect(),
                // Flat fallback until the engine resolves the gradient.
                background_color: Paint::Solid(gradient.top.with_alpha(0.8).to_css()),
                border_color: Paint::Solid(gradient.top.to_css()),
                border_width: 1,
                border_radius: Some(palette::BAR_RADIUS),
                hover_offset: None,
                gradient: Some(gradient),
            }],
        },
        options: ChartOptions {
            plugins: Plugins { legend: legend(false, LegendPosition::Top), tooltip: tooltip_style() },
            scales: Some(Scales {
                x: axis(false, false),
                y: axis(true, true),
            }),
            ..base_options()
        },
        tooltip: TooltipFormat::Billions,
        y_ticks: Some(TickFormat::Billions),
    }
}

/// Two segments: stablecoins vs. everything else.
pub fn doughnut_chart_spec(split: &ShareSplit) -> ChartSpec {
    let stable = Color::from_hex(palette::STABLECOIN_GREEN);
    let other = Color::from_hex(palette::MARKET_BLUE);

    ChartSpec {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: vec![STABLECOIN_SEGMENT.to_string(), OTHER_SEGMENT.to_string()],
            datasets: vec![Dataset {
                label: SHARE_DATASET_LABEL.to_string(),
                data: vec![split.stablecoin_total.value(), split.other_total.value()],
                background_color: Paint::Each(vec![stable.to_css(), other.with_alpha(0.85).to_css()]),
                border_color: Paint::Solid(Color::from_hex(palette::TOOLTIP_BG).to_css()),
                border_width: 2,
                border_radius: None,
                hover_offset: Some(palette::DOUGHNUT_HOVER_OFFSET),
                gradient: None,
            }],
        },
        options: ChartOptions {
            plugins: Plugins { legend: legend(true, LegendPosition::Bottom), tooltip: tooltip_style() },
            cutout: Some(palette::DOUGHNUT_CUTOUT.to_string()),
            ..base_options()
        },
        tooltip: TooltipFormat::ShareOfTotal { grand_total: split.grand_total.value() },
        y_ticks: None,
    }
}

fn base_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        plugins: Plugins { legend: legend(false, LegendPosition::Top), tooltip: tooltip_style() },
        scales: None,
        cutout: None,
    }
}

fn text() -> TextStyle {
    TextStyle { color: Color::from_hex(palette::TEXT).to_css() }
}

fn legend(display: bool, position: LegendPosition) -> Legend {
    Legend { display, position, labels: text() }
}

fn tooltip_style() -> TooltipStyle {
    TooltipStyle {
        background_color: Color::from_hex(palette::TOOLTIP_BG).with_alpha(0.9).to_css(),
        padding: palette::TOOLTIP_PADDING,
        display_colors: false,
    }
}

fn axis(begin_at_zero: bool, grid: bool) -> Axis {
    Axis {
        begin_at_zero,
        ticks: text(),
        grid: GridStyle { display: grid, color: palette::grid().to_css() },
    }
}
