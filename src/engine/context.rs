use serde::Deserialize;

use super::constants::handler_name;
use crate::packet::LinkHint;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub max_packet_bytes: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_packet_bytes: 65_535,
        }
    }
}

/// Names the raw dissector resolves at startup, one per handler role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HandlerNames {
    pub ip: String,
    pub ipv6: String,
    pub data: String,
    pub ppp_hdlc: String,
}

impl Default for HandlerNames {
    fn default() -> Self {
        Self {
            ip: handler_name::IP.to_string(),
            ipv6: handler_name::IPV6.to_string(),
            data: handler_name::DATA.to_string(),
            ppp_hdlc: handler_name::PPP_HDLC.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub handlers: HandlerNames,
    /// Forward IPv6 frames to the counting path as well. Off by default:
    /// the statistics pass historically only counts IPv4 and PPP.
    pub count_ipv6: bool,
}

/// Summary columns shown for a frame. Later dissectors overwrite them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    pub res_dl_src: String,
    pub res_dl_dst: String,
    pub protocol: String,
    pub info: String,
}

#[derive(Debug, Clone, Default)]
pub struct PacketInfo {
    pub frame_number: u64,
    pub link_type: LinkHint,
    pub columns: ColumnInfo,
}

impl PacketInfo {
    pub fn new(link_type: LinkHint) -> Self {
        Self {
            link_type,
            ..Self::default()
        }
    }
}
