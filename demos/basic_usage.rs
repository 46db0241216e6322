//! Basic logger usage example
//!
//! Demonstrates environment-gated configuration with the console transport
//! and the different log levels.
//!
//! Run with: cargo run --example basic_usage

use devnull::prelude::*;

fn main() -> Result<()> {
    println!("=== devnull - Basic Usage Example ===\n");

    let mut logger = Logger::new();
    println!("Environment: {}", logger.env);

    logger
        .configure(|logger| {
            logger.pattern = "{Hours:2}:{Minutes:2}:{Seconds:2}.{Milliseconds:3}".to_string();
        })
        .configure_in(Some("production"), |logger| {
            logger.set_level(LogLevel::Warning);
        })
        .use_transport(ConsoleTransport::construct, ConsoleOptions::default());

    println!("1. Logging at every level:");
    logger
        .alert("This is an alert")
        .critical("This is a critical message")
        .error("This is an error message")
        .warning("This is a warning message")
        .metric("requests=1200 errors=3")
        .notice("This is a notice")
        .info("This is an info message")
        .log("This is a plain log message")
        .debug("This is a debug message");

    println!("\n2. Raising the threshold to notice:");
    logger.set_level(LogLevel::Notice);
    logger.info("Info message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.notice("Notice message (visible)");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
