//! # Logger
//!
//! One place to install the global `tracing` subscriber for every binary in the
//! workspace: a compact ANSI console layer on stderr, an optional rolling file sink
//! (plain or JSON, written through a non-blocking worker) and an [`EnvFilter`]
//! that honours `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use codr_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("codr-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Rolling file output settings.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileSink {
    /// Writes `<name>.<date>.log` files into `dir`, rotated daily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Number of rotated files to keep. Must be non-zero.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Emit one JSON object per event instead of the text format.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }
}

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the logger has a name.
#[derive(Debug)]
pub struct Named(String);

/// Configures and installs the global subscriber.
///
/// [`LoggerBuilder::init`] only exists once [`LoggerBuilder::name`] has been called;
/// the name prefixes rolled log files.
#[derive(Debug)]
#[must_use = "call .init() to install the subscriber"]
pub struct LoggerBuilder<N = Unnamed> {
    name: N,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSink>,
}

impl LoggerBuilder<Unnamed> {
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: Named(name.into()),
            console: self.console,
            level: self.level,
            env_filter: self.env_filter,
            file: self.file,
        }
    }
}

impl<N> LoggerBuilder<N> {
    /// Default level when neither `RUST_LOG` nor [`Self::env_filter`] says otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives such as `codr_server=debug,tower_http=info`.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub fn file(mut self, sink: FileSink) -> Self {
        self.file = Some(sink);
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a zero `max_files`,
    ///   an unparsable filter or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory can't be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0.trim();
        if name.is_empty() {
            return Err(invalid("logger name cannot be empty"));
        }
        if !self.console && self.file.is_none() {
            return Err(invalid("no logging output enabled, enable the console or a file sink"));
        }

        let filter = build_env_filter(self.level, self.env_filter.as_deref())?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if self.console {
            let console = fmt::layer().compact().with_writer(std::io::stderr).with_ansi(true);
            layers.push(console.boxed());
        }

        let guard = match self.file {
            Some(sink) => {
                let (layer, guard) = file_layer(name, sink)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("installing global subscriber")?;

        Ok(Logger { guard })
    }
}

fn file_layer(name: &str, sink: FileSink) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    if sink.max_files == 0 {
        return Err(invalid("max_files must be greater than zero"));
    }

    fs::create_dir_all(&sink.dir)
        .context(format!("creating log directory {}", sink.dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(sink.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sink.max_files)
        .build(&sink.dir)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if sink.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

const fn invalid(message: &'static str) -> LoggerError {
    LoggerError::InvalidConfiguration {
        message: std::borrow::Cow::Borrowed(message),
        context: None,
    }
}

fn build_env_filter(
    level: LevelFilter,
    directives: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

/// Keeps the file writer alive. Drop it only at shutdown.
#[must_use = "dropping the logger stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: Unnamed,
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }

    /// `true` when a file sink is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing file logs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("codr-test");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.file.is_none());
        assert!(builder.env_filter.is_none());
    }

    #[test]
    fn file_sink_settings_are_kept() {
        let builder = Logger::builder()
            .name("codr-test")
            .env_filter("codr=debug")
            .file(FileSink::new("logs").rotation(Rotation::HOURLY).max_files(3).json(true));

        let sink = builder.file.expect("file sink");
        assert_eq!(sink.max_files, 3);
        assert!(sink.json);
        assert_eq!(sink.dir, PathBuf::from("logs"));
        assert_eq!(builder.env_filter.as_deref(), Some("codr=debug"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_output_is_rejected() {
        let err = Logger::builder().name("silent").console(false).init().expect_err("no sinks");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn bad_filter_is_rejected() {
        let err = build_env_filter(LevelFilter::INFO, Some("codr=[")).expect_err("bad directive");
        assert!(err.to_string().contains("invalid env filter"));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = file_layer("codr-test", FileSink::new(dir.path()).max_files(0))
            .err()
            .expect("zero max_files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
