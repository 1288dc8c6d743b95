pub mod metadata;
pub mod owned;
pub mod view;

pub use metadata::{LinkHint, PacketMetadata, encap};
pub use owned::Packet;
pub use view::PacketView;
