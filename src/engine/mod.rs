pub mod classify;
pub mod constants;
pub mod context;
pub mod counts;
pub mod data;
pub mod decoder;
pub mod error;
pub mod expert;
pub mod raw;
pub mod registry;
pub mod tree;

pub use classify::{Classification, classify};
pub use context::{ColumnInfo, DecodeConfig, HandlerNames, PacketInfo, RawConfig};
pub use counts::PacketCounts;
pub use data::DataDissector;
pub use decoder::{DecodeReport, Decoder};
pub use error::{DecodeError, RegistryError};
pub use expert::{ExpertGroup, ExpertInfo, Severity};
pub use raw::{DispatchOutcome, RawDissector, register_raw};
pub use registry::{Dissector, DissectorHandle, DissectorRegistry, HandlerRole, RawHandlers};
pub use tree::{DecodeTree, NodeId, TreeNode};
