//! SELECT FILE exchange with class byte fallback
//!
//! Cards disagree on the class byte SELECT FILE expects: some want `C0`,
//! others `00`. The command is sent with `C0` first and repeated once with
//! `00` only when the card answers `6E 00` (class not supported).

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::command::Command;
use crate::constants::{SELECT_FILE_CLASSES, ins, select_p1};
use crate::error::{Error, Result};
use crate::response::ResponseBuffer;
use crate::response::status::StatusWord;
use crate::transport::CardChannel;

use super::get_response::{MAX_RESPONSE_LENGTH, get_response};

/// Outcome of [`select_file_and_fetch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Number of response bytes the card announced after the selection
    ///
    /// Unlike [`select_file`], `61 00` is reported as 256.
    pub extra_bytes: u32,
    /// The announced response bytes, when the card announced any
    pub response: Option<ResponseBuffer>,
}

/// Build the SELECT FILE command for `file_id` with the first class to try
pub(crate) fn command(file_id: [u8; 2]) -> Command {
    Command::new_with_data(
        SELECT_FILE_CLASSES[0],
        ins::SELECT_FILE,
        select_p1::BY_FILE_ID,
        0x00,
        Bytes::copy_from_slice(&file_id),
    )
}

/// Select the file `file_id` on the card
///
/// Returns the number of extra response bytes the card has available for a
/// follow-up [`get_response`](super::get_response): 0 for `90 00`, `XX` for
/// `61 XX`. Any other status word fails with [`Error::Status`].
#[instrument(level = "debug", skip(card, file_id), fields(file_id = %hex::encode_upper(file_id)))]
pub fn select_file<C>(card: &mut C, file_id: [u8; 2]) -> Result<u32>
where
    C: CardChannel + ?Sized,
{
    let status = select(card, file_id)?;
    Ok(status.remaining_bytes().map_or(0, u32::from))
}

/// Select the file `file_id` and fetch the response data it announces
///
/// When the card answers `61 XX`, exactly one GET RESPONSE for `XX` bytes is
/// issued (`61 00` announces 256 bytes).
#[instrument(level = "debug", skip(card, file_id), fields(file_id = %hex::encode_upper(file_id)))]
pub fn select_file_and_fetch<C>(card: &mut C, file_id: [u8; 2]) -> Result<SelectedFile>
where
    C: CardChannel + ?Sized,
{
    let status = select(card, file_id)?;

    let Some(remaining) = status.remaining_bytes() else {
        return Ok(SelectedFile {
            extra_bytes: 0,
            response: None,
        });
    };

    let length = if remaining == 0 {
        MAX_RESPONSE_LENGTH
    } else {
        usize::from(remaining)
    };
    let response = get_response(card, length)?;

    Ok(SelectedFile {
        extra_bytes: length as u32,
        response: Some(response),
    })
}

/// Run the class byte fallback and return the successful status word
fn select<C>(card: &mut C, file_id: [u8; 2]) -> Result<StatusWord>
where
    C: CardChannel + ?Sized,
{
    let command = command(file_id);
    let fallback = SELECT_FILE_CLASSES[1];

    match attempt(card, &command) {
        Err(error) if error.is_class_not_supported() => {
            debug!(
                rejected = format_args!("{:#04x}", command.cla),
                retry = format_args!("{fallback:#04x}"),
                "Card rejected SELECT FILE class, retrying"
            );
            attempt(card, &command.with_class(fallback))
        }
        outcome => outcome,
    }
}

/// A single SELECT FILE attempt
fn attempt<C>(card: &mut C, command: &Command) -> Result<StatusWord>
where
    C: CardChannel + ?Sized,
{
    let mut reply = [0u8; 2];
    let received = card.transmit(&command.to_bytes(), &mut reply)?;
    let status = StatusWord::new(reply[0], reply[1]);

    if received != reply.len() {
        return Err(Error::ShortReply {
            status,
            expected: reply.len(),
            received,
        });
    }

    if status.is_success() || status.is_more_data_available() {
        Ok(status)
    } else {
        // 6E 00 is reported by the fallback
        if !status.is_class_not_supported() {
            status.log("SELECT FILE");
        }
        Err(Error::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockCard, TransportError};
    use hex_literal::hex;

    const MF: [u8; 2] = [0x3F, 0x00];

    #[test]
    fn test_command_layout() {
        assert_eq!(command(MF).to_bytes().as_ref(), &hex!("C0A40000023F00"));
        assert_eq!(
            command(MF).with_class(0x00).to_bytes().as_ref(),
            &hex!("00A40000023F00")
        );
    }

    #[test]
    fn test_success_first_attempt() {
        let mut card = MockCard::with_replies([hex!("9000")]);

        assert_eq!(select_file(&mut card, MF), Ok(0));
        assert_eq!(card.commands, vec![hex!("C0A40000023F00").to_vec()]);
    }

    #[test]
    fn test_more_data_available() {
        let mut card = MockCard::with_replies([hex!("6105")]);

        assert_eq!(select_file(&mut card, MF), Ok(5));
        assert_eq!(card.commands.len(), 1);
    }

    #[test]
    fn test_class_fallback() {
        let mut card = MockCard::with_replies([hex!("6E00"), hex!("9000")]);

        assert_eq!(select_file(&mut card, [0x2F, 0x00]), Ok(0));
        assert_eq!(
            card.commands,
            vec![
                hex!("C0A40000022F00").to_vec(),
                hex!("00A40000022F00").to_vec(),
            ]
        );
    }

    #[test]
    fn test_fallback_result_is_final() {
        let mut card = MockCard::with_replies([hex!("6E00"), hex!("6E00"), hex!("9000")]);

        let error = select_file(&mut card, MF).unwrap_err();
        assert!(error.is_class_not_supported());
        assert_eq!(card.commands.len(), 2);
        assert_eq!(card.commands[1][0], 0x00);
    }

    #[test]
    fn test_other_error_is_not_retried() {
        let mut card = MockCard::with_replies([hex!("6A82"), hex!("9000")]);

        let error = select_file(&mut card, MF).unwrap_err();
        assert_eq!(error, Error::Status(StatusWord::new(0x6A, 0x82)));
        assert_eq!(error.result_code(), (0x82 << 8) | 0x6A);
        assert_eq!(card.commands.len(), 1);
    }

    #[test]
    fn test_transport_error_is_not_retried() {
        let mut card = MockCard::default();
        // SCARD_E_NO_SMARTCARD
        card.replies
            .push_back(Err(TransportError::Native(0x8010_000C)));

        let error = select_file(&mut card, MF).unwrap_err();
        assert_eq!(error.result_code(), 0x8010_000C);
        assert_eq!(card.commands.len(), 1);
    }

    #[test]
    fn test_single_byte_class_rejection_falls_back() {
        let mut card = MockCard::with_replies([&hex!("6E")[..], &hex!("9000")[..]]);

        assert_eq!(select_file(&mut card, MF), Ok(0));
        assert_eq!(card.commands[1], hex!("00A40000023F00"));
    }

    #[test]
    fn test_more_data_full_block_reports_zero() {
        let mut card = MockCard::with_replies([hex!("6100")]);
        assert_eq!(select_file(&mut card, MF), Ok(0));
    }

    #[test]
    fn test_short_reply() {
        let mut card = MockCard::with_replies([hex!("90")]);

        let error = select_file(&mut card, MF).unwrap_err();
        assert_eq!(
            error,
            Error::ShortReply {
                status: StatusWord::new(0x90, 0x00),
                expected: 2,
                received: 1,
            }
        );
    }

    #[test]
    fn test_select_and_fetch() {
        let mut card = MockCard::with_replies([
            hex!("6E00").to_vec(),
            hex!("6103").to_vec(),
            hex!("AABBCC9000").to_vec(),
        ]);

        let selected = select_file_and_fetch(&mut card, MF).unwrap();
        assert_eq!(selected.extra_bytes, 3);
        assert_eq!(
            selected.response.as_ref().map(ResponseBuffer::payload),
            Some(&hex!("AABBCC")[..])
        );
        assert_eq!(card.commands.len(), 3);
        assert_eq!(card.commands[2], hex!("C0C0000003"));
    }

    #[test]
    fn test_select_and_fetch_without_extra_bytes() {
        let mut card = MockCard::with_replies([hex!("9000")]);

        let selected = select_file_and_fetch(&mut card, MF).unwrap();
        assert_eq!(
            selected,
            SelectedFile {
                extra_bytes: 0,
                response: None,
            }
        );
        assert_eq!(card.commands.len(), 1);
    }

    #[test]
    fn test_select_and_fetch_full_block() {
        let mut block = vec![0x11; 256];
        block.extend_from_slice(&hex!("9000"));
        let mut card = MockCard::with_replies([hex!("6100").to_vec(), block]);

        let selected = select_file_and_fetch(&mut card, MF).unwrap();
        assert_eq!(selected.extra_bytes, 256);
        assert_eq!(selected.response.map(|r| r.len()), Some(256));
        assert_eq!(card.commands[1], hex!("C0C0000000"));
    }
}
