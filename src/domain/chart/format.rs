//! Text shown on axes and in tooltips.

/// Value with at most two fractional digits, trailing zeros dropped:
/// `115.0 -> "115"`, `35.20 -> "35.2"`, `163.85 -> "163.85"`.
pub fn format_billions(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// `value` as a percentage of `total`, always two decimals.
pub fn format_percent(value: f64, total: f64) -> String {
    if total <= 0.0 || !total.is_finite() {
        return "0.00".to_string();
    }
    format!("{:.2}", value / total * 100.0)
}

/// Y-axis tick label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickFormat {
    /// `"<value>B"`
    Billions,
}

impl TickFormat {
    pub fn label(&self, value: f64) -> String {
        match self {
            TickFormat::Billions => format!("{}B", format_billions(value)),
        }
    }
}

/// Tooltip body line for one data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipFormat {
    /// `"<label>: <value>B"`
    Billions,
    /// `"<label>: <value>B (<percent>%)"`
    ShareOfTotal { grand_total: f64 },
}

impl TooltipFormat {
    pub fn label(&self, label: &str, value: f64) -> String {
        match *self {
            TooltipFormat::Billions => format!("{}: {}B", label, format_billions(value)),
            TooltipFormat::ShareOfTotal { grand_total } => format!(
                "{}: {}B ({}%)",
                label,
                format_billions(value),
                format_percent(value, grand_total)
            ),
        }
    }
}
