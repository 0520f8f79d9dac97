//! leasedns Domain Layer
pub mod config;
pub mod dhcp;
pub mod errors;
pub mod hardware_addr;
pub mod lease;
pub mod packet;

pub use config::{CliOverrides, Config, ConfigError};
pub use dhcp::{DhcpMessage, DhcpMessageType, DhcpOption};
pub use errors::DomainError;
pub use hardware_addr::HardwareAddr;
pub use lease::{AddressFamily, Lease};
pub use packet::{LinkType, RawPacket};
