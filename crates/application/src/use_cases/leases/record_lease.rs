use crate::ports::{HostRegistry, UpsertOutcome};
use leasedns_domain::Lease;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Use case: Apply correlated leases to the host registry
pub struct RecordLeaseUseCase {
    registry: Arc<dyn HostRegistry>,
}

impl RecordLeaseUseCase {
    pub fn new(registry: Arc<dyn HostRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, lease: &Lease) -> UpsertOutcome {
        let outcome = self.registry.upsert(&lease.hostname, lease.ip).await;

        match outcome {
            UpsertOutcome::Unchanged => {
                debug!(mac = %lease.hw_addr, ip = %lease.ip, hostname = %lease.hostname, "DHCP lease unchanged");
            }
            _ => {
                info!(mac = %lease.hw_addr, ip = %lease.ip, hostname = %lease.hostname, outcome = ?outcome, "DHCP lease recorded");
            }
        }

        outcome
    }

    /// Applies every lease from `leases` in arrival order until the queue closes.
    pub async fn run(&self, mut leases: mpsc::Receiver<Lease>) -> u64 {
        let mut applied = 0u64;
        while let Some(lease) = leases.recv().await {
            self.execute(&lease).await;
            applied += 1;
        }
        info!(applied, "Lease queue closed");
        applied
    }
}
