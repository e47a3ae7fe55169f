use gatehouse::cli_command::PRINT_TARGET;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{self, EnvFilter, LevelFilter},
    fmt::{self},
    layer::{Layer, SubscriberExt},
};

/// Overrides the trace level of the debug file, e.g. `GATEHOUSE_LOG=gatehouse=debug`.
static ENV_GATEHOUSE_LOG: &str = "GATEHOUSE_LOG";

/// Console output goes to stdout, console warnings and errors to stderr,
/// everything else only to the optional debug file.
pub(crate) struct Logging {
    guards: Vec<WorkerGuard>,
}

impl Logging {
    pub(crate) fn new() -> Self {
        Logging { guards: Vec::new() }
    }

    pub(crate) fn init(&mut self, quiet: bool, debug: &Option<PathBuf>) -> &mut Self {
        let mut layers = vec![];

        let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
        let stdout_layer = fmt::Layer::default()
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_writer(stdout_writer)
            .with_filter(filter::filter_fn(move |metadata| {
                !quiet
                    && metadata.target().contains(PRINT_TARGET)
                    && *metadata.level() == Level::INFO
            }))
            .boxed();
        self.guards.push(stdout_guard);
        layers.push(stdout_layer);

        let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
        let stderr_layer = fmt::Layer::default()
            .without_time()
            .with_target(false)
            .with_writer(stderr_writer)
            .with_filter(filter::filter_fn(|metadata| {
                metadata.target().contains(PRINT_TARGET) && *metadata.level() <= Level::WARN
            }))
            .boxed();
        self.guards.push(stderr_guard);
        layers.push(stderr_layer);

        if let Some(file_path) = debug {
            let _ = std::fs::remove_file(file_path);
            let file_appender = tracing_appender::rolling::never("", file_path);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_filter = EnvFilter::try_from_env(ENV_GATEHOUSE_LOG)
                .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::TRACE.into()));
            let file_layer = fmt::layer()
                .with_target(true)
                .with_writer(non_blocking_file)
                .with_filter(file_filter)
                .boxed();
            self.guards.push(file_guard);

            layers.push(file_layer);
        }

        let subscriber = tracing_subscriber::registry().with(layers);

        if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Cannot set up logging: {error}");
        }

        self
    }
}
