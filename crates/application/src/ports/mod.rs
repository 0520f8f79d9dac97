mod dhcp_decoder;
mod host_registry;
mod local_host_reader;

pub use dhcp_decoder::DhcpDecoder;
pub use host_registry::{HostRegistry, RegistrySize, UpsertOutcome};
pub use local_host_reader::{LocalHost, LocalHostReader};
