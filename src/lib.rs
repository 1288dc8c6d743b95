//! Link-type disambiguation for raw-encapsulated captures.
//!
//! [`engine::classify`] decides from leading bytes which handler owns a
//! frame; [`engine::RawDissector`] forwards it, either for statistics only or
//! for a full structural decode.

pub mod engine;
pub mod packet;

pub use engine::{Classification, DispatchOutcome, RawDissector, classify};
pub use packet::{LinkHint, Packet, PacketView};
