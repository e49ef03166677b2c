//! Example selecting an elementary file by identifier and reading the reply
//!
//! Usage: `cargo run --example select_file -- [FILE_ID]`, where `FILE_ID` is
//! four hex digits and defaults to the master file `3F00`.

use scquery_core::{list_readers, select_file_and_fetch};
use scquery_pcsc::{Disposition, PcscResourceManager};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let file_id = std::env::args().nth(1).unwrap_or_else(|| "3F00".to_string());
    let file_id: [u8; 2] = hex::decode(&file_id)?
        .try_into()
        .map_err(|_| format!("File identifier must be two bytes: {file_id}"))?;

    let manager = PcscResourceManager::new()?;
    let readers = list_readers(&manager, None)?;

    // Use the first reader that holds a card
    let Some(mut card) = readers.iter().find_map(|reader| manager.connect(reader).ok()) else {
        println!("No card found in any reader!");
        return Ok(());
    };
    println!("Using reader: {}", card.reader_name());

    let selected = select_file_and_fetch(&mut card, file_id)?;
    println!(
        "Selected {}, {} bytes available",
        hex::encode_upper(file_id),
        selected.extra_bytes
    );

    if let Some(response) = &selected.response {
        println!("Response: {}", hex::encode_upper(response.payload()));
        println!("Status: {}", response.status());
    }

    card.disconnect(Disposition::LeaveCard)?;
    Ok(())
}
