//! Logging of the driver: a stderr subscriber, and a panic hook reporting through it.
use std::any::Any;
use std::panic::PanicHookInfo;

use backtrace::Backtrace;
use clap::ValueEnum;
use tracing::Level;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(val: LogLevel) -> Self {
        match val {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Text of a panic payload. `panic!` carries either a `&str` or a `String`.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return s.to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    "unknown panic payload".to_string()
}

/// One `ERROR` event per panic, with where it happened and the stack.
fn report_panic(info: &PanicHookInfo) {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());
    tracing::error!(
        %location,
        "panicked: {}\n{:?}",
        panic_message(info.payload()),
        Backtrace::new()
    );
}

/// Install the global subscriber and the panic hook.
/// Reports go to stdout, so every log line goes to stderr.
pub fn init_logging(level: LogLevel) {
    std::panic::set_hook(Box::new(report_panic));

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::from_level(level.into()));
    let subscriber = Registry::default().with(stderr);

    // Records of the `log` facade are forwarded as tracing events.
    if let Err(e) = LogTracer::init() {
        eprintln!("log forwarding is already set up: {}", e);
    }
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("a global subscriber is already installed: {}", e);
    }
}
