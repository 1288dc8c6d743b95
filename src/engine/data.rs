use super::constants::handler_name;
use super::context::PacketInfo;
use super::counts::PacketCounts;
use super::error::DecodeError;
use super::registry::Dissector;
use super::tree::DecodeTree;
use crate::packet::PacketView;

/// Fallback for bytes nothing else claims.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataDissector;

impl Dissector for DataDissector {
    fn name(&self) -> &'static str {
        handler_name::DATA
    }

    fn count(&self, _view: &PacketView<'_>, counts: &mut PacketCounts) {
        counts.bump(handler_name::DATA);
    }

    fn dissect(
        &self,
        view: &PacketView<'_>,
        _pinfo: &mut PacketInfo,
        tree: &mut DecodeTree,
    ) -> Result<(), DecodeError> {
        tree.add_item(
            handler_name::DATA,
            format!("Data ({} bytes)", view.len()),
            view.offset(),
            view.len(),
        );
        Ok(())
    }
}
