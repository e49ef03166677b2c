//! Example showing how to enumerate reader groups, readers and their cards

use scquery_core::{AttributeId, get_attribute, list_groups, list_readers};
use scquery_pcsc::{PcscError, PcscResourceManager};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    // Establish a context with the default configuration
    let manager = PcscResourceManager::new()?;

    let groups = list_groups(&manager)?;
    println!("Reader groups: {}", groups.join(", "));

    let readers = list_readers(&manager, Some(&groups))?;
    println!("Found {} readers:", readers.len());

    for (i, reader) in readers.iter().enumerate() {
        println!("{}. Reader: {}", i + 1, reader);

        match manager.connect(reader) {
            Ok(card) => {
                println!("   Card present, ATR: {}", hex::encode_upper(card.atr()?));
                if let Ok(vendor) = get_attribute(&card, AttributeId::VENDOR_NAME) {
                    println!("   Vendor: {}", String::from_utf8_lossy(&vendor).trim_end_matches('\0'));
                }
            }
            Err(PcscError::NoCard(_)) => println!("   No card present"),
            Err(e) => println!("   Could not connect: {e}"),
        }
    }

    Ok(())
}
