use async_trait::async_trait;
use leasedns_application::ports::{LocalHost, LocalHostReader};
use leasedns_domain::DomainError;
use pcap::Device;
use std::net::IpAddr;
use tracing::{debug, warn};

/// Reads the machine hostname and the addresses libpcap reports for an interface.
#[derive(Debug, Default)]
pub struct SystemLocalHostReader;

impl SystemLocalHostReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocalHostReader for SystemLocalHostReader {
    async fn read_local_host(&self, interface: &str) -> Result<LocalHost, DomainError> {
        let hostname = match hostname::get() {
            Ok(name) => Some(name.to_string_lossy().into_owned()),
            Err(e) => {
                warn!(error = %e, "Failed to read local hostname");
                None
            }
        };

        let name = interface.to_string();
        let addresses = tokio::task::spawn_blocking(move || interface_addresses(&name))
            .await
            .map_err(|e| DomainError::InterfaceEnumeration(e.to_string()))??;

        debug!(interface, addresses = addresses.len(), hostname = ?hostname, "Local host read");
        Ok(LocalHost {
            hostname,
            addresses,
        })
    }
}

fn interface_addresses(interface: &str) -> Result<Vec<IpAddr>, DomainError> {
    let devices =
        Device::list().map_err(|e| DomainError::InterfaceEnumeration(e.to_string()))?;

    devices
        .into_iter()
        .find(|device| device.name == interface)
        .map(|device| device.addresses.iter().map(|address| address.addr).collect())
        .ok_or_else(|| DomainError::InterfaceNotFound(interface.to_string()))
}
