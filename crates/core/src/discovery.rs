//! Reader, card and reader group discovery
//!
//! Each call is a fresh query against the resource manager; nothing is
//! cached between calls.

use tracing::{debug, instrument};

use crate::buffer::probe_and_fetch;
use crate::error::Result;
use crate::names::NameList;
use crate::transport::ResourceManager;

/// List the readers known to the resource manager
///
/// When `groups` is given and not empty, only readers belonging to one of
/// those reader groups are returned.
#[instrument(level = "debug", skip_all)]
pub fn list_readers<R>(rm: &R, groups: Option<&NameList>) -> Result<NameList>
where
    R: ResourceManager + ?Sized,
{
    let groups = groups
        .filter(|groups| !groups.is_empty())
        .map(NameList::to_multi_string);

    let buffer = probe_and_fetch("readers", |buffer| {
        rm.list_readers(groups.as_deref(), buffer)
    })?;

    let readers = NameList::from_multi_string(&buffer);
    debug!(count = readers.len(), "Listed readers");
    Ok(readers)
}

/// List the card names known to the resource manager
///
/// When `atr` is given, only cards matching that Answer To Reset are
/// returned.
#[instrument(level = "debug", skip_all, fields(atr = ?atr.map(hex::encode_upper)))]
pub fn list_cards<R>(rm: &R, atr: Option<&[u8]>) -> Result<NameList>
where
    R: ResourceManager + ?Sized,
{
    let buffer = probe_and_fetch("cards", |buffer| rm.list_cards(atr, buffer))?;

    let cards = NameList::from_multi_string(&buffer);
    debug!(count = cards.len(), "Listed cards");
    Ok(cards)
}

/// List the reader groups known to the resource manager
#[instrument(level = "debug", skip_all)]
pub fn list_groups<R>(rm: &R) -> Result<NameList>
where
    R: ResourceManager + ?Sized,
{
    let buffer = probe_and_fetch("groups", |buffer| rm.list_reader_groups(buffer))?;

    let groups = NameList::from_multi_string(&buffer);
    debug!(count = groups.len(), "Listed reader groups");
    Ok(groups)
}
