use crate::ports::{HostRegistry, LocalHostReader};
use leasedns_domain::DomainError;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case: Seed the registry with this machine's own name and addresses
pub struct RegisterLocalHostUseCase {
    reader: Arc<dyn LocalHostReader>,
    registry: Arc<dyn HostRegistry>,
}

impl RegisterLocalHostUseCase {
    pub fn new(reader: Arc<dyn LocalHostReader>, registry: Arc<dyn HostRegistry>) -> Self {
        Self { reader, registry }
    }

    /// Returns the number of addresses registered. Interface lookup failures are
    /// returned as errors; a missing local hostname only skips registration.
    pub async fn execute(&self, interface: &str) -> Result<usize, DomainError> {
        let local = self.reader.read_local_host(interface).await?;

        let hostname = match local.hostname {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!(interface, "Local hostname unavailable, skipping self-registration");
                return Ok(0);
            }
        };

        for ip in &local.addresses {
            self.registry.upsert(&hostname, *ip).await;
            info!(hostname = %hostname, ip = %ip, interface, "Registered local address");
        }

        Ok(local.addresses.len())
    }
}
