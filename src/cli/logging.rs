use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command-line switches; quiet wins
pub fn level_for(debug: bool, verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug || verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) {
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true, false), LevelFilter::Debug);
        assert_eq!(level_for(true, true, true), LevelFilter::Error);
    }
}
