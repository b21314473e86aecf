use log::LevelFilter;

/// `level` is the baseline; directives in `RUST_LOG` take precedence.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
