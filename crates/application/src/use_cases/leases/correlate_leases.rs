use crate::ports::DhcpDecoder;
use crate::services::LeaseCorrelator;
use leasedns_domain::{Lease, RawPacket};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrelatorStats {
    pub packets: u64,
    pub decoded: u64,
    pub malformed: u64,
    pub leases: u64,
}

/// Use case: Turn the captured packet stream into a stream of leases
/// Runs for as long as the packet source keeps its sender open
pub struct CorrelateLeasesUseCase {
    decoder: Arc<dyn DhcpDecoder>,
}

impl CorrelateLeasesUseCase {
    pub fn new(decoder: Arc<dyn DhcpDecoder>) -> Self {
        Self { decoder }
    }

    /// Spawns [`run`](Self::run) and returns the receiving end of the lease queue.
    pub fn spawn(
        self: Arc<Self>,
        packets: mpsc::Receiver<RawPacket>,
        capacity: usize,
    ) -> (mpsc::Receiver<Lease>, JoinHandle<CorrelatorStats>) {
        let (lease_tx, lease_rx) = mpsc::channel(capacity);
        let handle = tokio::spawn(async move { self.run(packets, lease_tx).await });
        (lease_rx, handle)
    }

    /// Drains `packets` until the source closes or the lease receiver is dropped.
    /// Leases are sent in the order their ACKs were captured.
    pub async fn run(
        &self,
        mut packets: mpsc::Receiver<RawPacket>,
        leases: mpsc::Sender<Lease>,
    ) -> CorrelatorStats {
        let mut correlator = LeaseCorrelator::new();
        let mut stats = CorrelatorStats::default();

        while let Some(packet) = packets.recv().await {
            stats.packets += 1;

            let message = match self.decoder.decode(&packet) {
                Ok(Some(message)) => message,
                Ok(None) => continue,
                Err(e) => {
                    stats.malformed += 1;
                    debug!(error = %e, link_type = %packet.link_type, "Skipping malformed DHCP packet");
                    continue;
                }
            };
            stats.decoded += 1;

            let Some(lease) = correlator.observe(&message) else {
                continue;
            };
            stats.leases += 1;
            debug!(lease = %lease, "Lease correlated");

            if leases.send(lease).await.is_err() {
                warn!("Lease consumer closed, stopping correlator");
                break;
            }
        }

        info!(
            packets = stats.packets,
            decoded = stats.decoded,
            malformed = stats.malformed,
            leases = stats.leases,
            pending = correlator.pending_count(),
            "Lease correlator stopped"
        );
        stats
    }
}
