//! Tests against the system PC/SC service
//!
//! Each test skips itself when no PC/SC service, reader or card is available.

use scquery_core::{AttributeId, Error, get_attribute, list_cards, list_groups, list_readers};
use scquery_pcsc::{DEFAULT_READER_GROUP, PcscCard, PcscResourceManager};

/// Try to get a resource manager for tests
fn get_manager() -> Option<PcscResourceManager> {
    PcscResourceManager::new().ok()
}

/// Try to connect to a card in the first reader
fn get_card(manager: &PcscResourceManager) -> Option<PcscCard> {
    let readers = list_readers(manager, None).ok()?;
    manager.connect(readers.first()?).ok()
}

#[test]
fn test_list_groups() {
    let Some(manager) = get_manager() else {
        println!("Skipping test, PC/SC not available");
        return;
    };

    let groups = list_groups(&manager).unwrap();
    assert_eq!(groups.as_slice(), [DEFAULT_READER_GROUP]);
    assert_eq!(list_groups(&manager).unwrap(), groups);
}

#[test]
fn test_list_readers_with_default_group() {
    let Some(manager) = get_manager() else {
        println!("Skipping test, PC/SC not available");
        return;
    };

    let all = match list_readers(&manager, None) {
        Ok(readers) => readers,
        Err(e) => {
            println!("Could not list readers: {e}");
            return;
        }
    };

    let groups = list_groups(&manager).unwrap();
    let filtered = list_readers(&manager, Some(&groups)).unwrap();
    assert_eq!(filtered, all);
}

#[test]
fn test_list_cards_is_unsupported() {
    let Some(manager) = get_manager() else {
        println!("Skipping test, PC/SC not available");
        return;
    };

    assert!(matches!(list_cards(&manager, None), Err(Error::Transport(_))));
}

#[test]
fn test_card_atr() {
    let Some(manager) = get_manager() else {
        println!("Skipping test, PC/SC not available");
        return;
    };
    let Some(card) = get_card(&manager) else {
        println!("Skipping test, no card available");
        return;
    };

    let atr = card.atr().unwrap();
    assert!(atr.len() >= 2, "ATR too short");
    assert_eq!(get_attribute(&card, AttributeId::ATR_STRING).unwrap(), atr);
    println!("ATR: {}", hex::encode_upper(&atr));
}
