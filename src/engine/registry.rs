use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::context::{HandlerNames, PacketInfo};
use super::counts::PacketCounts;
use super::error::{DecodeError, RegistryError};
use super::tree::DecodeTree;
use crate::packet::PacketView;

pub trait Dissector: Send + Sync {
    fn name(&self) -> &'static str;

    /// Statistics-only pass. Dissectors without counters do nothing.
    fn count(&self, _view: &PacketView<'_>, _counts: &mut PacketCounts) {}

    fn dissect(
        &self,
        view: &PacketView<'_>,
        pinfo: &mut PacketInfo,
        tree: &mut DecodeTree,
    ) -> Result<(), DecodeError>;
}

pub type DissectorHandle = Arc<dyn Dissector>;

/// Named dissectors plus the table mapping capture encapsulations to them.
///
/// Filled during startup and only read afterwards.
#[derive(Default)]
pub struct DissectorRegistry {
    by_name: HashMap<String, DissectorHandle>,
    by_encap: BTreeMap<u32, DissectorHandle>,
}

impl DissectorRegistry {
    /// Register under `name()`, replacing any earlier dissector of that name.
    pub fn register<D>(&mut self, dissector: D) -> DissectorHandle
    where
        D: Dissector + 'static,
    {
        let handle: DissectorHandle = Arc::new(dissector);
        self.by_name
            .insert(handle.name().to_string(), Arc::clone(&handle));
        handle
    }

    pub fn find(&self, name: &str) -> Option<DissectorHandle> {
        self.by_name.get(name).cloned()
    }

    pub fn add_encap(&mut self, encap: u32, handle: DissectorHandle) -> Result<(), RegistryError> {
        if self.by_encap.contains_key(&encap) {
            return Err(RegistryError::DuplicateEncap(encap));
        }
        debug!(encap, dissector = handle.name(), "registered encapsulation");
        self.by_encap.insert(encap, handle);
        Ok(())
    }

    pub fn find_encap(&self, encap: u32) -> Option<DissectorHandle> {
        self.by_encap.get(&encap).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_encap.is_empty()
    }
}

/// Downstream handlers the raw dissector forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerRole {
    Ip,
    Ipv6,
    Data,
    PppHdlc,
}

impl HandlerRole {
    fn configured_name(self, names: &HandlerNames) -> &str {
        match self {
            HandlerRole::Ip => &names.ip,
            HandlerRole::Ipv6 => &names.ipv6,
            HandlerRole::Data => &names.data,
            HandlerRole::PppHdlc => &names.ppp_hdlc,
        }
    }
}

impl fmt::Display for HandlerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandlerRole::Ip => "ip",
            HandlerRole::Ipv6 => "ipv6",
            HandlerRole::Data => "data",
            HandlerRole::PppHdlc => "ppp-hdlc",
        };
        f.write_str(name)
    }
}

/// Handles resolved once at startup; no name lookups per frame.
#[derive(Clone)]
pub struct RawHandlers {
    ip: DissectorHandle,
    ipv6: DissectorHandle,
    data: DissectorHandle,
    ppp_hdlc: DissectorHandle,
}

impl RawHandlers {
    pub fn resolve(
        registry: &DissectorRegistry,
        names: &HandlerNames,
    ) -> Result<Self, RegistryError> {
        let lookup = |role: HandlerRole| -> Result<DissectorHandle, RegistryError> {
            let name = role.configured_name(names);
            let handle = registry
                .find(name)
                .ok_or_else(|| RegistryError::MissingHandler {
                    role,
                    name: name.to_string(),
                })?;
            debug!(%role, dissector = handle.name(), "resolved raw handler");
            Ok(handle)
        };

        Ok(Self {
            ip: lookup(HandlerRole::Ip)?,
            ipv6: lookup(HandlerRole::Ipv6)?,
            data: lookup(HandlerRole::Data)?,
            ppp_hdlc: lookup(HandlerRole::PppHdlc)?,
        })
    }

    pub fn get(&self, role: HandlerRole) -> &DissectorHandle {
        match role {
            HandlerRole::Ip => &self.ip,
            HandlerRole::Ipv6 => &self.ipv6,
            HandlerRole::Data => &self.data,
            HandlerRole::PppHdlc => &self.ppp_hdlc,
        }
    }
}
