use std::fmt;

/// Link-layer framing of a captured packet, as reported by the capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Ethernet,
    RawIp,
    LinuxSll,
    Other(i32),
}

impl LinkType {
    /// Maps a libpcap `DLT_*` / `LINKTYPE_*` value.
    pub fn from_dlt(dlt: i32) -> Self {
        match dlt {
            1 => Self::Ethernet,
            12 | 14 | 101 | 228 => Self::RawIp,
            113 => Self::LinuxSll,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ethernet => write!(f, "ethernet"),
            Self::RawIp => write!(f, "raw-ip"),
            Self::LinuxSll => write!(f, "linux-sll"),
            Self::Other(dlt) => write!(f, "dlt-{}", dlt),
        }
    }
}

/// A captured frame, owned by the packet source until handed to the correlator.
#[derive(Debug, Clone)]
pub struct RawPacket {
    pub link_type: LinkType,
    pub data: Vec<u8>,
}

impl RawPacket {
    pub fn new(link_type: LinkType, data: Vec<u8>) -> Self {
        Self { link_type, data }
    }
}
