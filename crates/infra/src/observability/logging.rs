//! tracing-subscriber installation

use boardcount_domain::{BoardCountError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format for log lines on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"warn"`,
/// `"boardcount=debug"`) is used.
///
/// # Errors
/// Returns `BoardCountError::Config` if the directive is malformed or a
/// global subscriber is already installed.
pub fn init_logging(default_directive: &str, format: LogFormat) -> Result<()> {
    let filter = build_filter(default_directive)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).without_time().with_target(false))
            .try_init(),
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
        }
    };
    installed.map_err(|e| BoardCountError::Config(format!("logging already initialised: {e}")))
}

fn build_filter(default_directive: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directive).map_err(|e| {
            BoardCountError::Config(format!("invalid log filter '{default_directive}': {e}"))
        }),
    }
}
