pub mod handler_name {
    pub const IP: &str = "ip";
    pub const IPV6: &str = "ipv6";
    pub const DATA: &str = "data";
    pub const PPP_HDLC: &str = "ppp_hdlc";
}

pub mod marker {
    /// Address/control bytes of PPP in HDLC-like framing.
    pub const PPP_HDLC: [u8; 2] = [0xFF, 0x03];
    /// Fake MAC address some ISDN drivers put in front of the PPP header.
    pub const PPP_HDLC_AFTER_FAKE_MAC: usize = 6;
    pub const PPP_HDLC_AFTER_ONE_BYTE: usize = 1;
    /// Sent in place of the fake MAC and PPP header while the link is down.
    pub const LINK_DOWN_PLACEHOLDER: [u8; 10] = [0; 10];
}

pub mod ip_version {
    pub const MASK: u8 = 0xF0;
    pub const V4: u8 = 0x40;
    pub const V6: u8 = 0x60;
}

pub mod raw_column {
    pub const NOT_APPLICABLE: &str = "N/A";
    pub const INFO: &str = "Raw packet data";
}

#[cfg(test)]
mod tests {
    use super::marker;

    #[test]
    fn placeholder_is_ten_zero_bytes() {
        assert_eq!(marker::LINK_DOWN_PLACEHOLDER.len(), 10);
        assert!(marker::LINK_DOWN_PLACEHOLDER.iter().all(|byte| *byte == 0));
    }
}
