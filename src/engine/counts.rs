use std::collections::BTreeMap;

/// Running per-protocol totals for the statistics pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketCounts {
    total: u64,
    protocols: BTreeMap<&'static str, u64>,
}

impl PacketCounts {
    pub fn bump_total(&mut self) {
        self.total += 1;
    }

    pub fn bump(&mut self, protocol: &'static str) {
        *self.protocols.entry(protocol).or_insert(0) += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn get(&self, protocol: &str) -> u64 {
        self.protocols.get(protocol).copied().unwrap_or(0)
    }

    /// True when no protocol routine has counted anything yet.
    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}
