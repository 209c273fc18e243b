//! Logger initialization for the command-line tool

use log::LevelFilter;

/// Initialize the `env_logger` backend
///
/// Uses `Debug` when `verbose` is set and `Info` otherwise. An explicit
/// `RUST_LOG` takes precedence over both. Calling this more than once keeps the
/// first logger and returns `false`.
pub fn init_logger(verbose: bool) -> bool {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("Logger initialized at {level:?} level");
    }
    installed
}
