use std::fmt;

/// Longest client hardware address a BOOTP header can carry (`chaddr`).
pub const MAX_HW_ADDR_LEN: usize = 16;

/// Link-layer address of a DHCP client, the key that ties a REQUEST to its ACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HardwareAddr {
    bytes: [u8; MAX_HW_ADDR_LEN],
    len: u8,
}

impl HardwareAddr {
    /// Builds an address from raw bytes, keeping at most 16 of them.
    pub fn new(raw: &[u8]) -> Self {
        let len = raw.len().min(MAX_HW_ADDR_LEN);
        let mut bytes = [0u8; MAX_HW_ADDR_LEN];
        bytes[..len].copy_from_slice(&raw[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<[u8; 6]> for HardwareAddr {
    fn from(mac: [u8; 6]) -> Self {
        Self::new(&mac)
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
