use gloo::console;
use tracing::Level as TraceLevel;
use tracing_web::MakeWebConsoleWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Component-tagged logging to the browser console.
///
/// Debug lines are dropped from release builds.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, Some(component));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, Some(component));
    }

    fn log(level: Level, message: &str, component: Option<&str>) {
        if level == Level::Debug && !cfg!(debug_assertions) {
            return;
        }

        let line = format_line(message, component);
        match level {
            Level::Debug => console::debug!(line),
            Level::Info => console::info!(line),
            Level::Warn => console::warn!(line),
            Level::Error => console::error!(line),
        }
    }
}

/// Route `tracing` events from `shared` to the browser console.
///
/// Same verbosity as [`Logger`]: debug in dev builds, info in release.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_max_level(max_trace_level())
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .try_init();

    if let Err(e) = installed {
        Logger::warn_with_component("logging", &format!("tracing already initialised: {}", e));
    }
}

fn max_trace_level() -> TraceLevel {
    if cfg!(debug_assertions) {
        TraceLevel::DEBUG
    } else {
        TraceLevel::INFO
    }
}

fn format_line(message: &str, component: Option<&str>) -> String {
    match component {
        Some(component) => format!("[{}] {}", component, message),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_format_line_tags_component() {
        assert_eq!(format_line("opened", Some("reserve-section")), "[reserve-section] opened");
        assert_eq!(format_line("plain", None), "plain");
    }

    #[wasm_bindgen_test]
    fn test_shared_events_reach_a_subscriber() {
        init_tracing();
        // a second call only warns
        init_tracing();

        assert!(tracing::enabled!(TraceLevel::INFO));
        assert!(tracing::enabled!(TraceLevel::WARN));
        assert_eq!(tracing::enabled!(TraceLevel::DEBUG), cfg!(debug_assertions));
    }
}
