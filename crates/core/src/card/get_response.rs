//! GET RESPONSE exchange
//!
//! Retrieves data the card holds after a previous command answered `61 XX`.

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::buffer::zeroed;
use crate::command::Command;
use crate::constants::{cla, ins};
use crate::error::{Error, Result};
use crate::response::ResponseBuffer;
use crate::response::status::StatusWord;
use crate::transport::CardChannel;

/// Largest amount of data a single GET RESPONSE can retrieve
pub const MAX_RESPONSE_LENGTH: usize = 256;

/// Build the GET RESPONSE command for `length` bytes
///
/// Le is `length` truncated to one byte, so 256 is sent as `0x00`.
pub(crate) const fn command(length: usize) -> Command {
    Command::new_with_le(cla::PROPRIETARY, ins::GET_RESPONSE, 0x00, 0x00, length as u8)
}

/// Retrieve `length` bytes of pending response data from the card
///
/// `length` must not exceed [`MAX_RESPONSE_LENGTH`]; larger values fail with
/// [`Error::InvalidParameter`] before anything is allocated or sent.
///
/// The card must answer with exactly `length` data bytes followed by `90 00`.
/// A reply of any other length fails with [`Error::ShortReply`], using the
/// first two reply bytes as the status word. A complete reply with any other
/// status fails with [`Error::Status`].
#[instrument(level = "debug", skip(card))]
pub fn get_response<C>(card: &mut C, length: usize) -> Result<ResponseBuffer>
where
    C: CardChannel + ?Sized,
{
    if length > MAX_RESPONSE_LENGTH {
        return Err(Error::InvalidParameter(
            "GET RESPONSE length cannot exceed 256 bytes",
        ));
    }

    let expected = length + 2;
    let mut reply = zeroed(expected)?;

    let received = card.transmit(&command(length).to_bytes(), &mut reply)?;

    if received != expected {
        // Bytes the card did not send read as zero
        let status = StatusWord::new(reply[0], reply[1]);
        debug!(expected, received, %status, "Short GET RESPONSE reply");
        return Err(Error::ShortReply {
            status,
            expected,
            received,
        });
    }

    let status = StatusWord::new(reply[length], reply[length + 1]);
    if !status.is_success() {
        status.log("GET RESPONSE");
        return Err(Error::Status(status));
    }

    Ok(ResponseBuffer::new(Bytes::from(reply)))
}
