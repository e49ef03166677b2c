//! Probe, allocate and fetch
//!
//! The resource manager's variable-length queries are answered in two calls:
//! a probe that reports the required length and a fetch that fills a buffer
//! of that length. [`probe_and_fetch`] runs both calls for any primitive.

use tracing::trace;

use crate::error::{Error, Result};
use crate::transport::TransportError;

/// Allocate a zero-filled buffer of exactly `len` bytes
///
/// Fails with [`Error::OutOfMemory`] instead of aborting when the
/// allocation cannot be satisfied.
pub(crate) fn zeroed(len: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory { requested: len })?;
    buffer.resize(len, 0);
    Ok(buffer)
}

/// Run a two-call primitive and return the filled buffer
///
/// `primitive(None)` must report the required length, `primitive(Some(buf))`
/// must fill `buf` and report the number of bytes written. A failed probe
/// returns before anything is allocated; a failed fetch drops the buffer.
pub(crate) fn probe_and_fetch<F>(what: &'static str, mut primitive: F) -> Result<Vec<u8>>
where
    F: FnMut(Option<&mut [u8]>) -> Result<usize, TransportError>,
{
    let required = primitive(None)?;
    trace!(what, required, "Probed buffer length");

    let mut buffer = zeroed(required)?;
    let written = primitive(Some(buffer.as_mut_slice()))?;
    buffer.truncate(written);

    trace!(what, written, "Fetched buffer");
    Ok(buffer)
}
