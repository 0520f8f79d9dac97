use crate::hardware_addr::HardwareAddr;
use std::fmt;
use std::net::IpAddr;

/// A completed hostname → address binding observed on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lease {
    pub hw_addr: HardwareAddr,
    pub hostname: String,
    pub ip: IpAddr,
}

impl Lease {
    pub fn new(hw_addr: HardwareAddr, hostname: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            hw_addr,
            hostname: hostname.into(),
            ip,
        }
    }
}

impl fmt::Display for Lease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} {}", self.hw_addr, self.ip, self.hostname)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "ipv4"),
            Self::V6 => write!(f, "ipv6"),
        }
    }
}
