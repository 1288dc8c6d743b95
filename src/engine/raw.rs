use std::sync::Arc;

use tracing::debug;

use super::classify::{Classification, classify};
use super::constants::raw_column;
use super::context::{PacketInfo, RawConfig};
use super::counts::PacketCounts;
use super::error::{DecodeError, RegistryError};
use super::expert::RAW_NO_LINK;
use super::registry::{Dissector, DissectorRegistry, HandlerRole, RawHandlers};
use super::tree::DecodeTree;
use crate::packet::{LinkHint, PacketView, encap};

pub const PROTOCOL_NAME: &str = "Raw packet data";
pub const PROTOCOL_FILTER_NAME: &str = "raw";

/// Which handler the full path forwarded to, and from where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub role: HandlerRole,
    pub offset: usize,
    /// `None` when a raw IPv4/IPv6 hint bypassed the byte cascade.
    pub classification: Option<Classification>,
}

/// Dissector for raw captures whose link framing is not known.
pub struct RawDissector {
    handlers: RawHandlers,
    count_ipv6: bool,
}

impl RawDissector {
    pub fn from_registry(
        registry: &DissectorRegistry,
        config: &RawConfig,
    ) -> Result<Self, RegistryError> {
        let handlers = RawHandlers::resolve(registry, &config.handlers)?;
        Ok(Self {
            handlers,
            count_ipv6: config.count_ipv6,
        })
    }

    /// Statistics pass. IPv6 and undetermined frames are left uncounted
    /// unless `count_ipv6` was configured.
    pub fn count(&self, view: &PacketView<'_>, hint: LinkHint, counts: &mut PacketCounts) {
        let classification = classify(view, hint);
        let role = match classification {
            Classification::PppHdlcAt(_) => HandlerRole::PppHdlc,
            Classification::RawIpAt(_) | Classification::IpByVersionNibble => HandlerRole::Ip,
            Classification::Ipv6ByVersionNibble if self.count_ipv6 => HandlerRole::Ipv6,
            Classification::Ipv6ByVersionNibble | Classification::Undetermined => return,
        };

        if let Some(next) = view.subset_remaining(classification.offset()) {
            self.handlers.get(role).count(&next, counts);
        }
    }

    /// Full pass: fills link placeholders, adds the raw node with its
    /// no-link notice, then forwards to exactly one handler.
    pub fn dissect(
        &self,
        view: &PacketView<'_>,
        hint: LinkHint,
        pinfo: &mut PacketInfo,
        tree: &mut DecodeTree,
    ) -> DispatchOutcome {
        let columns = &mut pinfo.columns;
        columns.res_dl_src = raw_column::NOT_APPLICABLE.to_string();
        columns.res_dl_dst = raw_column::NOT_APPLICABLE.to_string();
        columns.protocol = raw_column::NOT_APPLICABLE.to_string();
        columns.info = raw_column::INFO.to_string();

        let node = tree.add_item(PROTOCOL_FILTER_NAME, PROTOCOL_NAME, view.offset(), 0);
        tree.add_notice(node, RAW_NO_LINK);

        let outcome = match hint {
            LinkHint::RawIpv4 => DispatchOutcome {
                role: HandlerRole::Ip,
                offset: 0,
                classification: None,
            },
            LinkHint::RawIpv6 => DispatchOutcome {
                role: HandlerRole::Ipv6,
                offset: 0,
                classification: None,
            },
            LinkHint::RawIpAny | LinkHint::Unknown => {
                let classification = classify(view, LinkHint::Unknown);
                DispatchOutcome {
                    role: classification.handler_role(),
                    offset: classification.offset(),
                    classification: Some(classification),
                }
            }
        };

        self.forward(view, &outcome, pinfo, tree);
        outcome
    }

    fn forward(
        &self,
        view: &PacketView<'_>,
        outcome: &DispatchOutcome,
        pinfo: &mut PacketInfo,
        tree: &mut DecodeTree,
    ) {
        let Some(next) = view.subset_remaining(outcome.offset) else {
            return;
        };
        let handler = self.handlers.get(outcome.role);
        if let Err(err) = handler.dissect(&next, pinfo, tree) {
            debug!(
                frame = pinfo.frame_number,
                dissector = handler.name(),
                %err,
                "sub-dissector failed"
            );
        }
    }
}

impl Dissector for RawDissector {
    fn name(&self) -> &'static str {
        PROTOCOL_FILTER_NAME
    }

    fn count(&self, view: &PacketView<'_>, counts: &mut PacketCounts) {
        RawDissector::count(self, view, LinkHint::Unknown, counts);
    }

    fn dissect(
        &self,
        view: &PacketView<'_>,
        pinfo: &mut PacketInfo,
        tree: &mut DecodeTree,
    ) -> Result<(), DecodeError> {
        let hint = pinfo.link_type;
        RawDissector::dissect(self, view, hint, pinfo, tree);
        Ok(())
    }
}

/// Resolve the raw dissector's handlers and claim the three raw
/// encapsulations for it.
pub fn register_raw(
    registry: &mut DissectorRegistry,
    config: &RawConfig,
) -> Result<Arc<RawDissector>, RegistryError> {
    let raw = Arc::new(RawDissector::from_registry(registry, config)?);
    for id in [encap::RAW_IP, encap::RAW_IP4, encap::RAW_IP6] {
        registry.add_encap(id, raw.clone())?;
    }
    Ok(raw)
}
