use wasm_bindgen::JsValue;

/// Every failure the dashboard can report. None of them is recoverable at
/// this layer; they are logged and surfaced to the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// An expected element id is absent from the document.
    MissingAnchor(String),
    /// The element exists but has the wrong type (e.g. not a `<canvas>`).
    WrongElement(String),
    /// The charting engine rejected the configuration.
    ChartEngine(String),
    Browser(String),
    Config(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingAnchor(id) => write!(f, "Missing anchor element: #{}", id),
            AppError::WrongElement(msg) => write!(f, "Wrong element type: {}", msg),
            AppError::ChartEngine(msg) => write!(f, "Chart engine error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser API error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl AppError {
    /// Wrap a JS exception thrown by a browser API.
    pub fn browser(context: &str, err: JsValue) -> Self {
        AppError::Browser(format!("{}: {}", context, describe_js(&err)))
    }

    /// Wrap a JS exception thrown by the charting engine.
    pub fn chart_engine(err: JsValue) -> Self {
        AppError::ChartEngine(describe_js(&err))
    }
}

fn describe_js(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub type AppResult<T> = Result<T, AppError>;
