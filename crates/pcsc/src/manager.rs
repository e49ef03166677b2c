//! Resource manager backed by a PC/SC context

use std::ffi::CString;
use std::fmt;

use pcsc::Context;
use scquery_core::{NameList, ResourceManager, TransportError};
use tracing::{debug, trace};

use crate::card::PcscCard;
use crate::config::PcscConfig;
use crate::error::{PcscError, native};

/// The reader group every PC/SC reader belongs to
pub const DEFAULT_READER_GROUP: &str = "SCard$DefaultReaders";

/// System reader groups that cover every reader
const SYSTEM_READER_GROUPS: [&str; 4] = [
    "SCard$AllReaders",
    DEFAULT_READER_GROUP,
    "SCard$LocalReaders",
    "SCard$SystemReaders",
];

/// Packed group list reported when listing reader groups
const DEFAULT_GROUPS: &[u8] = b"SCard$DefaultReaders\0\0";

/// Resource manager over a PC/SC context
pub struct PcscResourceManager {
    /// PC/SC context
    context: Context,
    /// Configuration used for new connections
    config: PcscConfig,
}

impl fmt::Debug for PcscResourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscResourceManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PcscResourceManager {
    /// Establish a context with the default configuration
    pub fn new() -> Result<Self, PcscError> {
        Self::establish(PcscConfig::default())
    }

    /// Establish a context with the given configuration
    pub fn establish(config: PcscConfig) -> Result<Self, PcscError> {
        let context = Context::establish(config.scope.into())?;
        debug!(scope = ?config.scope, "Established PC/SC context");
        Ok(Self { context, config })
    }

    /// The configuration used for new connections
    pub const fn config(&self) -> &PcscConfig {
        &self.config
    }

    /// Check whether the context is still valid
    pub fn is_valid(&self) -> bool {
        self.context.is_valid().is_ok()
    }

    /// Connect to the card in `reader`
    pub fn connect(&self, reader: &str) -> Result<PcscCard, PcscError> {
        let reader_cstr =
            CString::new(reader).map_err(|_| PcscError::InvalidReaderName(reader.to_string()))?;

        match self.context.connect(
            &reader_cstr,
            self.config.share_mode.into(),
            self.config.protocols,
        ) {
            Ok(card) => {
                debug!(reader, "Connected to card");
                Ok(PcscCard::new(card, reader.to_string()))
            }
            Err(pcsc::Error::NoSmartcard) => Err(PcscError::NoCard(reader.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Whether a packed group filter selects the readers PC/SC knows about
fn groups_match(groups: &[u8]) -> bool {
    let groups = NameList::from_multi_string(groups);
    groups.is_empty()
        || SYSTEM_READER_GROUPS
            .iter()
            .any(|group| groups.contains_name(group))
}

/// Copy a fixed answer the way the two-call primitives do
fn fill(data: &[u8], buffer: Option<&mut [u8]>) -> Result<usize, TransportError> {
    match buffer {
        None => Ok(data.len()),
        Some(buffer) if buffer.len() < data.len() => {
            Err(native(pcsc::Error::InsufficientBuffer))
        }
        Some(buffer) => {
            buffer[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }
}

/// Report the default group, provided the context is still usable
fn reader_groups(
    context: Result<(), pcsc::Error>,
    buffer: Option<&mut [u8]>,
) -> Result<usize, TransportError> {
    context.map_err(native)?;
    fill(DEFAULT_GROUPS, buffer)
}

impl ResourceManager for PcscResourceManager {
    fn list_readers(
        &self,
        groups: Option<&[u8]>,
        buffer: Option<&mut [u8]>,
    ) -> Result<usize, TransportError> {
        // PC/SC has a single reader group
        if groups.is_some_and(|groups| !groups_match(groups)) {
            trace!("Group filter names no PC/SC reader group");
            return Err(native(pcsc::Error::NoReadersAvailable));
        }

        match buffer {
            None => self.context.list_readers_len().map_err(native),
            Some(buffer) => {
                let capacity = buffer.len();
                let names = self.context.list_readers(buffer).map_err(native)?;
                let written = names
                    .map(|name| name.to_bytes_with_nul().len())
                    .sum::<usize>()
                    + 1;
                Ok(written.min(capacity))
            }
        }
    }

    fn list_cards(
        &self,
        _atr: Option<&[u8]>,
        _buffer: Option<&mut [u8]>,
    ) -> Result<usize, TransportError> {
        // pcsc-lite keeps no card database
        Err(native(pcsc::Error::UnsupportedFeature))
    }

    fn list_reader_groups(&self, buffer: Option<&mut [u8]>) -> Result<usize, TransportError> {
        reader_groups(self.context.is_valid(), buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_match() {
        assert!(groups_match(b"\0"));
        assert!(groups_match(b"SCard$DefaultReaders\0\0"));
        assert!(groups_match(b"Office\0SCard$AllReaders\0\0"));
        assert!(!groups_match(b"Office\0\0"));
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill(DEFAULT_GROUPS, None), Ok(DEFAULT_GROUPS.len()));

        let mut buffer = vec![0u8; DEFAULT_GROUPS.len()];
        assert_eq!(fill(DEFAULT_GROUPS, Some(buffer.as_mut_slice())), Ok(DEFAULT_GROUPS.len()));
        assert_eq!(
            NameList::from_multi_string(&buffer).as_slice(),
            [DEFAULT_READER_GROUP]
        );

        let mut small = [0u8; 4];
        assert_eq!(
            fill(DEFAULT_GROUPS, Some(&mut small[..])),
            Err(TransportError::Native(0x8010_0008))
        );
    }

    #[test]
    fn test_reader_groups_needs_valid_context() {
        assert_eq!(reader_groups(Ok(()), None), Ok(DEFAULT_GROUPS.len()));
        assert_eq!(
            reader_groups(Err(pcsc::Error::InvalidHandle), None),
            Err(TransportError::Native(0x8010_0003))
        );

        let mut buffer = vec![0u8; DEFAULT_GROUPS.len()];
        assert_eq!(
            reader_groups(
                Err(pcsc::Error::InvalidHandle),
                Some(buffer.as_mut_slice())
            ),
            Err(TransportError::Native(0x8010_0003))
        );
        assert!(buffer.iter().all(|&byte| byte == 0));
    }
}
