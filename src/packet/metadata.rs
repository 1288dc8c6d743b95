/// Capture encapsulation identifiers handled by the raw dissector.
pub mod encap {
    pub const RAW_IP: u32 = 7;
    pub const RAW_IP4: u32 = 129;
    pub const RAW_IP6: u32 = 130;
}

/// Encapsulation declared by the capture source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LinkHint {
    /// Raw IP, version not declared.
    RawIpAny,
    RawIpv4,
    RawIpv6,
    #[default]
    Unknown,
}

impl LinkHint {
    pub fn from_encap(value: u32) -> Self {
        match value {
            encap::RAW_IP => LinkHint::RawIpAny,
            encap::RAW_IP4 => LinkHint::RawIpv4,
            encap::RAW_IP6 => LinkHint::RawIpv6,
            _ => LinkHint::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LinkHint::RawIpAny => "raw-ip",
            LinkHint::RawIpv4 => "raw-ipv4",
            LinkHint::RawIpv6 => "raw-ipv6",
            LinkHint::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PacketMetadata {
    pub frame_number: u64,
    /// Capture encapsulation identifier as written by the capture source.
    pub encap: u32,
}

impl PacketMetadata {
    pub fn link_type(&self) -> LinkHint {
        LinkHint::from_encap(self.encap)
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkHint, encap};

    #[test]
    fn encap_ids_map_to_hints() {
        assert_eq!(LinkHint::from_encap(encap::RAW_IP), LinkHint::RawIpAny);
        assert_eq!(LinkHint::from_encap(encap::RAW_IP4), LinkHint::RawIpv4);
        assert_eq!(LinkHint::from_encap(encap::RAW_IP6), LinkHint::RawIpv6);
        assert_eq!(LinkHint::from_encap(1), LinkHint::Unknown);
    }

    #[test]
    fn hint_names_are_stable() {
        assert_eq!(LinkHint::RawIpAny.name(), "raw-ip");
        assert_eq!(LinkHint::default().name(), "unknown");
    }
}
