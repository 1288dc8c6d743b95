use tracing::{debug, trace};

use super::context::{ColumnInfo, DecodeConfig, PacketInfo};
use super::counts::PacketCounts;
use super::error::DecodeError;
use super::registry::DissectorRegistry;
use super::tree::DecodeTree;
use crate::packet::Packet;

#[derive(Debug, Default)]
pub struct DecodeReport {
    pub tree: DecodeTree,
    pub columns: ColumnInfo,
    pub matched_dissector: Option<&'static str>,
}

/// Host side: routes each captured frame to the dissector registered for
/// its encapsulation.
#[derive(Default)]
pub struct Decoder {
    pub config: DecodeConfig,
    pub registry: DissectorRegistry,
}

impl Decoder {
    pub fn new(config: DecodeConfig, registry: DissectorRegistry) -> Self {
        Self { config, registry }
    }

    pub fn decode_packet(&self, packet: &Packet) -> Result<DecodeReport, DecodeError> {
        if packet.data.len() > self.config.max_packet_bytes {
            return Err(DecodeError::PacketTooLarge {
                len: packet.data.len(),
                limit: self.config.max_packet_bytes,
            });
        }

        let encap = packet.metadata.encap;
        let dissector = self
            .registry
            .find_encap(encap)
            .ok_or(DecodeError::UnsupportedEncap(encap))?;

        let mut pinfo = PacketInfo {
            frame_number: packet.metadata.frame_number,
            ..PacketInfo::new(packet.metadata.link_type())
        };
        let mut tree = DecodeTree::default();
        dissector.dissect(&packet.view(), &mut pinfo, &mut tree)?;

        trace!(
            frame = packet.metadata.frame_number,
            dissector = dissector.name(),
            nodes = tree.nodes().len(),
            "decoded frame"
        );

        Ok(DecodeReport {
            tree,
            columns: pinfo.columns,
            matched_dissector: Some(dissector.name()),
        })
    }

    /// Statistics pass over one frame. Frames without a registered
    /// encapsulation only count toward the total.
    pub fn count_packet(&self, packet: &Packet, counts: &mut PacketCounts) {
        counts.bump_total();
        match self.registry.find_encap(packet.metadata.encap) {
            Some(dissector) => dissector.count(&packet.view(), counts),
            None => debug!(
                frame = packet.metadata.frame_number,
                encap = packet.metadata.encap,
                "no counting routine for encapsulation"
            ),
        }
    }
}
