//! Decoded view of a DHCPv4 message.
//!
//! Only the fields the lease correlator needs are kept: the client hardware
//! address, the assigned address (`yiaddr`) and the options in wire order.
//! Options are stored undecoded so a single malformed option never poisons the
//! rest of the message.

use crate::hardware_addr::HardwareAddr;
use std::fmt;
use std::net::Ipv4Addr;

/// Option 12, RFC 2132 §3.14.
pub const OPTION_HOSTNAME: u8 = 12;
/// Option 53, RFC 2132 §9.6.
pub const OPTION_MESSAGE_TYPE: u8 = 53;

/// DHCP message types (option 53).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DhcpMessageType {
    Discover,
    Offer,
    Request,
    Decline,
    Ack,
    Nak,
    Release,
    Inform,
    Unknown(u8),
}

impl From<u8> for DhcpMessageType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Discover,
            2 => Self::Offer,
            3 => Self::Request,
            4 => Self::Decline,
            5 => Self::Ack,
            6 => Self::Nak,
            7 => Self::Release,
            8 => Self::Inform,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for DhcpMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discover => write!(f, "DISCOVER"),
            Self::Offer => write!(f, "OFFER"),
            Self::Request => write!(f, "REQUEST"),
            Self::Decline => write!(f, "DECLINE"),
            Self::Ack => write!(f, "ACK"),
            Self::Nak => write!(f, "NAK"),
            Self::Release => write!(f, "RELEASE"),
            Self::Inform => write!(f, "INFORM"),
            Self::Unknown(code) => write!(f, "UNKNOWN({})", code),
        }
    }
}

/// One option as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpOption {
    pub code: u8,
    pub data: Vec<u8>,
}

impl DhcpOption {
    pub fn new(code: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpMessage {
    pub client_hw_addr: HardwareAddr,
    pub your_client_ip: Ipv4Addr,
    pub options: Vec<DhcpOption>,
}

impl DhcpMessage {
    pub fn new(
        client_hw_addr: HardwareAddr,
        your_client_ip: Ipv4Addr,
        options: Vec<DhcpOption>,
    ) -> Self {
        Self {
            client_hw_addr,
            your_client_ip,
            options,
        }
    }

    /// Message type carried in option 53.
    ///
    /// Zero-length occurrences are skipped; when the option repeats, the last
    /// well-formed occurrence wins.
    pub fn message_type(&self) -> Option<DhcpMessageType> {
        self.options
            .iter()
            .filter(|opt| opt.code == OPTION_MESSAGE_TYPE)
            .filter_map(|opt| opt.data.first().copied())
            .last()
            .map(DhcpMessageType::from)
    }

    /// Hostname from option 12, or an empty string when absent.
    ///
    /// Some clients NUL-terminate the name; trailing NULs are dropped.
    pub fn hostname(&self) -> String {
        self.options
            .iter()
            .filter(|opt| opt.code == OPTION_HOSTNAME)
            .last()
            .map(|opt| {
                String::from_utf8_lossy(&opt.data)
                    .trim_end_matches('\0')
                    .to_string()
            })
            .unwrap_or_default()
    }
}
