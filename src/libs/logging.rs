use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs the stderr tracing subscriber when debug mode is on.
///
/// The filter comes from `RUST_LOG` if set, otherwise everything from this
/// crate at `debug`. Outside debug mode no subscriber is installed and the
/// `msg_*` macros print plainly.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME").replace('-', "_"))));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}
