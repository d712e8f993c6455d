//! Installs `env_logger` behind the `log` facade for the `lander` binary

use std::sync::Once;

/// Filter used when neither `RUST_LOG` nor `--log` says otherwise
pub const DEFAULT_FILTER: &str = "info";

static LOGGER: Once = Once::new();

/// Pick the active filter: `RUST_LOG`, then the command line, then `info`
fn choose_filter(env: Option<String>, cli: Option<&str>) -> String {
    env.filter(|f| !f.trim().is_empty())
        .or_else(|| cli.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(cli_filter: Option<&str>) {
    LOGGER.call_once(|| {
        let filter = choose_filter(std::env::var("RUST_LOG").ok(), cli_filter);

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .format_timestamp_millis()
            .try_init();

        match installed {
            Ok(()) => log::debug!("logger installed with filter '{filter}'"),
            // An embedding program got there first; keep its logger
            Err(_) => log::debug!("logger already installed"),
        }
    });
}
