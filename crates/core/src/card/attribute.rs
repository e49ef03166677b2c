//! Reader attribute retrieval

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::attribute::AttributeId;
use crate::buffer::probe_and_fetch;
use crate::error::Result;
use crate::transport::CardChannel;

/// Read a reader or card attribute
///
/// This queries the reader driver, not the card; no APDU is sent.
#[instrument(level = "debug", skip(card), fields(attribute = %id))]
pub fn get_attribute<C>(card: &C, id: AttributeId) -> Result<Bytes>
where
    C: CardChannel + ?Sized,
{
    let buffer = probe_and_fetch("attribute", |buffer| card.get_attribute(id, buffer))?;
    debug!(len = buffer.len(), "Read attribute");
    Ok(Bytes::from(buffer))
}
