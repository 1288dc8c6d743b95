use thiserror::Error;

use super::registry::HandlerRole;

/// Failure inside a dissector. The raw dispatcher never produces one itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed header for protocol: {0}")]
    MalformedHeader(&'static str),

    #[error("Packet of {len} bytes exceeds limit of {limit}")]
    PacketTooLarge { len: usize, limit: usize },

    #[error("No dissector registered for encapsulation {0}")]
    UnsupportedEncap(u32),
}

/// Startup configuration failures. Never raised per frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No dissector named {name:?} registered for the {role} role")]
    MissingHandler { role: HandlerRole, name: String },

    #[error("Encapsulation {0} already has a dissector")]
    DuplicateEncap(u32),
}
