use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHIST_LOG";

/// Install the stderr subscriber. `SHIST_LOG` wins over `--log-level`.
pub fn init_tracing(level: LogLevel) {
    let env = std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_directive(level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn default_directive(level: LogLevel) -> String {
    format!("shist={level},shist_providers={level},shist_engine={level}")
}
