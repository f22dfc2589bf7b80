use derive_more::Display;
use std::sync::OnceLock;
use strum::EnumString;

/// Log levels, ordered by severity. Parsed case-insensitively from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// Which layer a message comes from, plus the emitting unit.
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: &str) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }

    /// `[ts] LEVEL COMP | message | metadata`
    pub fn render(&self, timestamp: &str) -> String {
        match &self.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, self.level, self.component, self.message, metadata
            ),
            None => format!("[{}] {} {} | {}", timestamp, self.level, self.component, self.message),
        }
    }
}

/// Clock abstraction so log entries can be stamped without touching `js_sys`
/// from native tests.
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Cheap pre-check so callers can skip building expensive messages.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    /// Lowest level this logger emits, when it filters by level.
    fn min_level(&self) -> Option<LogLevel> {
        None
    }

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }

    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        self.log(LogEntry::new(level, component, message).with_metadata(metadata));
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// First call wins; later calls are ignored. Returns whether `logger` was
/// installed.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    GLOBAL_LOGGER.set(logger).is_ok()
}

pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&SequenceTimeProvider)
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Monotonic counter used until a real clock is installed.
struct SequenceTimeProvider;

impl TimeProvider for SequenceTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp)
    }
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            let logger = $crate::domain::logging::get_logger();
            if logger.enabled($crate::domain::logging::LogLevel::Trace) {
                logger.trace($component, &format!($($arg)*));
            }
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        {
            let logger = $crate::domain::logging::get_logger();
            if logger.enabled($crate::domain::logging::LogLevel::Debug) {
                logger.debug($component, &format!($($arg)*));
            }
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        {
            let logger = $crate::domain::logging::get_logger();
            if logger.enabled($crate::domain::logging::LogLevel::Info) {
                logger.info($component, &format!($($arg)*));
            }
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn entry_renders_metadata_after_message() {
        let entry = LogEntry::new(LogLevel::Info, LogComponent::Application("Bootstrap"), "started")
            .with_metadata("steps=4");
        assert_eq!(entry.render("00:00"), "[00:00]  INFO APP:Bootstrap | started | steps=4");
    }

    #[derive(Default)]
    struct RecordingLogger {
        lines: std::sync::Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, entry: LogEntry) {
            self.lines.lock().unwrap().push(entry.render("t"));
        }
    }

    #[test]
    fn metadata_is_carried_through_the_logger() {
        let logger = RecordingLogger::default();
        logger.log_with_metadata(
            LogLevel::Error,
            LogComponent::Application("DashboardCoordinator"),
            "timeline step failed",
            "Missing anchor element: #timeline",
        );
        assert_eq!(
            logger.lines.lock().unwrap().as_slice(),
            ["[t] ERROR APP:DashboardCoordinator | timeline step failed | Missing anchor element: #timeline"]
        );
        assert_eq!(logger.min_level(), None);
    }
}
