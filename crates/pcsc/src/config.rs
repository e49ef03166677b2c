//! Configuration options for the PC/SC bindings

use pcsc::{Protocols as PcscProtocols, Scope as PcscScope, ShareMode as PcscShareMode};

/// Scope of the resource manager context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextScope {
    /// Operations run in the scope of the current user (default)
    #[default]
    User,
    /// Operations run in the scope of the system
    System,
}

impl From<ContextScope> for PcscScope {
    fn from(scope: ContextScope) -> Self {
        match scope {
            ContextScope::User => Self::User,
            ContextScope::System => Self::System,
        }
    }
}

/// Sharing mode for card connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareMode {
    /// Exclusive access to the card
    Exclusive,
    /// Shared access to the card (default)
    #[default]
    Shared,
    /// Direct connection to the reader
    Direct,
}

impl From<ShareMode> for PcscShareMode {
    fn from(mode: ShareMode) -> Self {
        match mode {
            ShareMode::Exclusive => Self::Exclusive,
            ShareMode::Shared => Self::Shared,
            ShareMode::Direct => Self::Direct,
        }
    }
}

/// Configuration options for the PC/SC bindings
#[derive(Debug, Clone)]
pub struct PcscConfig {
    /// Scope of the resource manager context
    pub scope: ContextScope,

    /// Sharing mode for card connections
    pub share_mode: ShareMode,

    /// Acceptable protocols for card communication
    pub protocols: PcscProtocols,
}

impl Default for PcscConfig {
    fn default() -> Self {
        Self {
            scope: ContextScope::User,
            share_mode: ShareMode::Shared,
            protocols: PcscProtocols::ANY,
        }
    }
}

impl PcscConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context scope
    pub const fn with_scope(mut self, scope: ContextScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the sharing mode
    pub const fn with_share_mode(mut self, mode: ShareMode) -> Self {
        self.share_mode = mode;
        self
    }

    /// Set the acceptable protocols
    pub const fn with_protocols(mut self, protocols: PcscProtocols) -> Self {
        self.protocols = protocols;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PcscConfig::new();
        assert_eq!(config.scope, ContextScope::User);
        assert_eq!(config.share_mode, ShareMode::Shared);
        assert_eq!(config.protocols, PcscProtocols::ANY);
    }

    #[test]
    fn test_builders() {
        let config = PcscConfig::new()
            .with_scope(ContextScope::System)
            .with_share_mode(ShareMode::Exclusive)
            .with_protocols(PcscProtocols::T1);

        assert_eq!(config.scope, ContextScope::System);
        assert_eq!(config.share_mode, ShareMode::Exclusive);
        assert_eq!(config.protocols, PcscProtocols::T1);
    }
}
