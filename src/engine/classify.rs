//! Byte-pattern cascade that picks a handler for raw-encapsulated frames.
//!
//! Raw captures mostly come from Linux and Irix PPP links, where the true
//! framing is unknown. Some drivers leak part of a PPP header, so those
//! quirks are ruled out before falling back to the IP version nibble.

use tracing::trace;

use super::constants::{ip_version, marker};
use super::registry::HandlerRole;
use crate::packet::{LinkHint, PacketView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// PPP in HDLC-like framing starting at the given offset.
    PppHdlcAt(usize),
    /// IPv4 after a link-down placeholder of the given length.
    RawIpAt(usize),
    IpByVersionNibble,
    Ipv6ByVersionNibble,
    Undetermined,
}

impl Classification {
    /// Where the forwarded sub-view begins.
    pub fn offset(self) -> usize {
        match self {
            Classification::PppHdlcAt(offset) | Classification::RawIpAt(offset) => offset,
            _ => 0,
        }
    }

    /// Handler the full dissection path forwards to.
    pub fn handler_role(self) -> HandlerRole {
        match self {
            Classification::PppHdlcAt(_) => HandlerRole::PppHdlc,
            Classification::RawIpAt(_) | Classification::IpByVersionNibble => HandlerRole::Ip,
            Classification::Ipv6ByVersionNibble => HandlerRole::Ipv6,
            Classification::Undetermined => HandlerRole::Data,
        }
    }
}

/// Classify a raw frame from its first ten bytes.
///
/// The hint does not steer the cascade; raw IPv4/IPv6 overrides are applied
/// by the dissection path before it gets here. Short frames never match a
/// pattern longer than themselves.
pub fn classify(view: &PacketView<'_>, hint: LinkHint) -> Classification {
    let result = if view.matches_at(0, &marker::PPP_HDLC) {
        // Linux 2.1.x PPP driver sometimes passes the header through.
        Classification::PppHdlcAt(0)
    } else if view.matches_at(marker::PPP_HDLC_AFTER_FAKE_MAC, &marker::PPP_HDLC) {
        Classification::PppHdlcAt(marker::PPP_HDLC_AFTER_FAKE_MAC)
    } else if view.matches_at(marker::PPP_HDLC_AFTER_ONE_BYTE, &marker::PPP_HDLC) {
        Classification::PppHdlcAt(marker::PPP_HDLC_AFTER_ONE_BYTE)
    } else if view.matches_at(0, &marker::LINK_DOWN_PLACEHOLDER) {
        Classification::RawIpAt(marker::LINK_DOWN_PLACEHOLDER.len())
    } else {
        match view.get_u8(0).map(|byte| byte & ip_version::MASK) {
            Some(ip_version::V4) => Classification::IpByVersionNibble,
            Some(ip_version::V6) => Classification::Ipv6ByVersionNibble,
            _ => Classification::Undetermined,
        }
    };

    trace!(len = view.len(), hint = hint.name(), ?result, "classified raw frame");
    result
}

#[cfg(test)]
mod tests {
    use super::{Classification, classify};
    use crate::engine::registry::HandlerRole;
    use crate::packet::{LinkHint, PacketView};

    fn run(bytes: &[u8]) -> Classification {
        classify(&PacketView::new(bytes), LinkHint::Unknown)
    }

    #[test]
    fn ppp_marker_at_start_wins_regardless_of_tail() {
        assert_eq!(run(&[0xff, 0x03]), Classification::PppHdlcAt(0));
        assert_eq!(
            run(&[0xff, 0x03, 0x00, 0x21, 0x45, 0x00, 0xff, 0x03, 0, 0]),
            Classification::PppHdlcAt(0)
        );
    }

    #[test]
    fn ppp_marker_after_fake_mac() {
        let frame = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0xff, 0x03];
        assert_eq!(run(&frame), Classification::PppHdlcAt(6));
    }

    #[test]
    fn fake_mac_rule_precedes_one_byte_rule() {
        let frame = [0x10, 0xff, 0x03, 0x00, 0x00, 0x00, 0xff, 0x03];
        assert_eq!(run(&frame), Classification::PppHdlcAt(6));
    }

    #[test]
    fn ppp_marker_after_one_byte() {
        assert_eq!(run(&[0x00, 0xff, 0x03]), Classification::PppHdlcAt(1));
        assert_eq!(
            run(&[0x45, 0xff, 0x03, 0x00, 0x21]),
            Classification::PppHdlcAt(1)
        );
    }

    #[test]
    fn ten_zero_bytes_mean_link_down() {
        assert_eq!(run(&[0; 10]), Classification::RawIpAt(10));
        let mut frame = vec![0; 10];
        frame.extend_from_slice(&[0x45, 0x00, 0x00, 0x14]);
        assert_eq!(run(&frame), Classification::RawIpAt(10));
    }

    #[test]
    fn nine_zero_bytes_fall_through_to_nibble() {
        assert_eq!(run(&[0; 9]), Classification::Undetermined);
    }

    #[test]
    fn version_nibble_picks_ip_family() {
        assert_eq!(run(&[0x45, 0x00, 0x00, 0x14]), Classification::IpByVersionNibble);
        assert_eq!(run(&[0x60, 0x00, 0x00, 0x00]), Classification::Ipv6ByVersionNibble);
        assert_eq!(run(&[0x50]), Classification::Undetermined);
    }

    #[test]
    fn short_and_empty_frames_are_undetermined() {
        assert_eq!(run(&[]), Classification::Undetermined);
        assert_eq!(run(&[0x00]), Classification::Undetermined);
        assert_eq!(run(&[0xff]), Classification::Undetermined);
    }

    #[test]
    fn single_byte_never_matches_ppp_at_start() {
        for byte in 0..=u8::MAX {
            assert_ne!(run(&[byte]), Classification::PppHdlcAt(0));
        }
    }

    #[test]
    fn hint_does_not_change_the_cascade() {
        let frames: [&[u8]; 4] = [&[0xff, 0x03], &[0; 10], &[0x60], &[]];
        for frame in frames {
            let view = PacketView::new(frame);
            let baseline = classify(&view, LinkHint::Unknown);
            for hint in [LinkHint::RawIpAny, LinkHint::RawIpv4, LinkHint::RawIpv6] {
                assert_eq!(classify(&view, hint), baseline);
            }
            assert_eq!(classify(&view, LinkHint::Unknown), baseline);
        }
    }

    #[test]
    fn classification_maps_to_roles_and_offsets() {
        assert_eq!(Classification::PppHdlcAt(6).handler_role(), HandlerRole::PppHdlc);
        assert_eq!(Classification::PppHdlcAt(6).offset(), 6);
        assert_eq!(Classification::RawIpAt(10).handler_role(), HandlerRole::Ip);
        assert_eq!(Classification::Ipv6ByVersionNibble.handler_role(), HandlerRole::Ipv6);
        assert_eq!(Classification::Undetermined.handler_role(), HandlerRole::Data);
        assert_eq!(Classification::Undetermined.offset(), 0);
    }
}
