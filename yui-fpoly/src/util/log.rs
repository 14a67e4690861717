use log::{LevelFilter, SetLoggerError};
use simplelog::{Color, Config, ConfigBuilder, Level, TermLogger, TerminalMode, ColorChoice, TestLogger};

// Only the level and the message: division and exponentiation 
// report their steps at `Trace`.
fn config() -> Config { 
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build()
}

/// Installs a terminal logger at level `l`, writing to stderr.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), SetLoggerError> { 
    TermLogger::init(l, config(), TerminalMode::Stderr, ColorChoice::Auto)
}

/// Installs a logger whose output is captured by the test harness. 
/// 
/// Only the first call succeeds; later calls return the error.
pub fn init_test_logger(l: LevelFilter) -> Result<(), SetLoggerError> { 
    TestLogger::init(l, config())
}
