use leasedns_domain::{DhcpMessage, DhcpMessageType, HardwareAddr, Lease};
use std::collections::HashMap;
use std::net::IpAddr;
use tracing::{debug, trace};

/// Pairs DHCP REQUESTs with the ACKs that follow them.
///
/// A REQUEST records the hostname the client declared, keyed by hardware
/// address; a later REQUEST from the same address replaces it. An ACK for an
/// address with a non-empty pending hostname produces a [`Lease`]. The pending
/// entry is left in place, so a renewal ACK without a fresh REQUEST yields the
/// lease again. Entries never expire.
#[derive(Debug, Default)]
pub struct LeaseCorrelator {
    pending: HashMap<HardwareAddr, String>,
}

impl LeaseCorrelator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, message: &DhcpMessage) -> Option<Lease> {
        let hw_addr = message.client_hw_addr;

        match message.message_type()? {
            DhcpMessageType::Request => {
                let hostname = message.hostname();
                debug!(mac = %hw_addr, hostname = %hostname, "DHCP REQUEST observed");
                self.pending.insert(hw_addr, hostname);
                None
            }
            DhcpMessageType::Ack => {
                let hostname = match self.pending.get(&hw_addr) {
                    Some(hostname) if !hostname.is_empty() => hostname,
                    _ => {
                        debug!(mac = %hw_addr, "DHCP ACK without a named REQUEST, ignoring");
                        return None;
                    }
                };
                Some(Lease::new(
                    hw_addr,
                    hostname.clone(),
                    IpAddr::V4(message.your_client_ip),
                ))
            }
            other => {
                trace!(mac = %hw_addr, message_type = %other, "Ignoring DHCP message");
                None
            }
        }
    }

    pub fn pending_hostname(&self, hw_addr: &HardwareAddr) -> Option<&str> {
        self.pending.get(hw_addr).map(String::as_str)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
