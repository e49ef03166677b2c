//! PC/SC bindings for scquery
//!
//! This crate implements the [`ResourceManager`] and [`CardChannel`] traits
//! from `scquery-core` on top of the system PC/SC service, so the core's
//! discovery and card transaction functions can run against real readers.
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use scquery_core::{list_readers, select_file};
//! use scquery_pcsc::{PcscConfig, PcscResourceManager};
//!
//! // Establish a resource manager context
//! let manager = PcscResourceManager::establish(PcscConfig::default())?;
//!
//! // List available readers
//! let readers = list_readers(&manager, None)?;
//! let Some(reader) = readers.first() else {
//!     println!("No readers found");
//!     return Ok(());
//! };
//!
//! // Connect to the card in the first reader and select the master file
//! let mut card = manager.connect(reader)?;
//! let extra = select_file(&mut card, [0x3F, 0x00])?;
//! println!("Selected MF, {extra} bytes available");
//! # Ok(())
//! # }
//! ```
//!
//! [`ResourceManager`]: scquery_core::ResourceManager
//! [`CardChannel`]: scquery_core::CardChannel
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

mod attribute;
mod card;
mod config;
mod error;
mod manager;

// Public exports
pub use card::PcscCard;
pub use config::{ContextScope, PcscConfig, ShareMode};
pub use error::PcscError;
pub use manager::{DEFAULT_READER_GROUP, PcscResourceManager};

// Re-export some pcsc types for convenience
pub use pcsc::{Disposition, Protocols};
