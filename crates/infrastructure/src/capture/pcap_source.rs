use leasedns_domain::config::CaptureConfig;
use leasedns_domain::{DomainError, LinkType, RawPacket};
use pcap::{Active, Capture, Direction};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Read timeout so the capture thread notices a closed consumer on a quiet link.
const READ_TIMEOUT_MS: i32 = 1000;

/// Live libpcap capture restricted to inbound DHCP client traffic.
pub struct PcapPacketSource {
    interface: String,
    capture: Capture<Active>,
    link_type: LinkType,
}

impl PcapPacketSource {
    /// Opens the interface and installs the filter. Every failure here is fatal
    /// to the caller: there is no other way to observe leases.
    pub fn open(config: &CaptureConfig) -> Result<Self, DomainError> {
        let interface = config.interface.clone();
        let open_error = |e: pcap::Error| DomainError::CaptureOpen {
            interface: interface.clone(),
            reason: e.to_string(),
        };

        let mut capture = Capture::from_device(interface.as_str())
            .map_err(open_error)?
            .snaplen(config.snaplen)
            .promisc(config.promiscuous)
            .immediate_mode(true)
            .timeout(READ_TIMEOUT_MS)
            .open()
            .map_err(open_error)?;

        capture
            .filter(&config.filter, true)
            .map_err(|e| DomainError::CaptureFilter {
                filter: config.filter.clone(),
                reason: e.to_string(),
            })?;
        capture.direction(Direction::In).map_err(open_error)?;

        let link_type = LinkType::from_dlt(capture.get_datalink().0);

        info!(
            interface = %interface,
            filter = %config.filter,
            snaplen = config.snaplen,
            link_type = %link_type,
            "Packet capture opened"
        );

        Ok(Self {
            interface,
            capture,
            link_type,
        })
    }

    /// Moves the capture onto a blocking thread feeding a bounded queue.
    ///
    /// The thread blocks when the queue is full. It returns the packet count
    /// once the receiver is dropped, or the error that ended the capture.
    pub fn spawn(
        self,
        capacity: usize,
    ) -> (
        mpsc::Receiver<RawPacket>,
        JoinHandle<Result<u64, DomainError>>,
    ) {
        let (tx, rx) = mpsc::channel(capacity);
        let handle = tokio::task::spawn_blocking(move || self.run(tx));
        (rx, handle)
    }

    fn run(mut self, tx: mpsc::Sender<RawPacket>) -> Result<u64, DomainError> {
        let mut captured = 0u64;

        while !tx.is_closed() {
            let packet = match self.capture.next_packet() {
                Ok(packet) => RawPacket::new(self.link_type, packet.data.to_vec()),
                Err(pcap::Error::TimeoutExpired) => continue,
                Err(e) => {
                    error!(interface = %self.interface, error = %e, captured, "Packet capture failed");
                    return Err(DomainError::Capture(e.to_string()));
                }
            };

            captured += 1;
            debug!(interface = %self.interface, bytes = packet.data.len(), "Packet captured");

            if tx.blocking_send(packet).is_err() {
                break;
            }
        }

        warn!(interface = %self.interface, captured, "Packet capture stopped");
        Ok(captured)
    }
}
