//! File logging example
//!
//! Writes plain text and JSON lines side by side, then removes the text
//! transport at runtime.
//!
//! Run with: cargo run --example file_logging

use devnull::prelude::*;

fn main() -> Result<()> {
    println!("=== devnull - File Logging Example ===\n");

    let text_path = std::env::temp_dir().join("devnull_example.log");
    let json_path = std::env::temp_dir().join("devnull_example.jsonl");

    let mut logger = Logger::from_json(r#"{"env": "production", "level": 6}"#)?;
    logger
        .try_use_transport(FileTransport::construct, text_path.clone())?
        .try_use_transport(JsonTransport::construct, json_path.clone())?;

    for i in 0..10 {
        logger.info(format!("Log message {}", i));
    }
    logger.alert("Paging the on-call engineer");
    logger.debug("Suppressed at level 6");

    logger.remove(Selector::kind::<FileTransport>());
    logger.info("Only in the JSON file");
    logger.flush()?;

    println!("Text log: {}", text_path.display());
    println!("JSON log: {}", json_path.display());
    println!("Delivered: {}", logger.metrics().written_count());
    println!("Suppressed: {}", logger.metrics().suppressed_count());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
