use leasedns_domain::{DhcpMessage, DomainError, RawPacket};

/// Turns a captured frame into a DHCP message.
///
/// `Ok(None)` means the frame carries no DHCP layer and is not an error.
pub trait DhcpDecoder: Send + Sync {
    fn decode(&self, packet: &RawPacket) -> Result<Option<DhcpMessage>, DomainError>;
}
