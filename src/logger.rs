use std::env;
use std::str::FromStr;

use anyhow::Result;
use log::LevelFilter;
use simplelog::*;

/// Starts the terminal logger. The level comes from `LOG_LEVEL` and defaults to `info`.
pub fn initialize_logger() -> Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .add_filter_allow_str(env!("CARGO_PKG_NAME"))
        .build();

    TermLogger::init(
        get_log_level(env::var("LOG_LEVEL").ok().as_deref()),
        logger_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    Ok(())
}

fn get_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod logger_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(get_log_level(None), LevelFilter::Info);
        assert_eq!(get_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(get_log_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(get_log_level(Some("loud")), LevelFilter::Info);
    }
}
