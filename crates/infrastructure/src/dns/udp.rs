use crate::dns::DnsServerHandler;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

const RECV_BUFFER_SIZE: usize = 4096;

/// Serves DNS over `socket` until the task is dropped.
///
/// Each datagram is handled on its own task, so a slow registry read never
/// holds up the receive loop. Dropped queries get no reply at all.
pub async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    if let Ok(addr) = socket.local_addr() {
        info!(bind_address = %addr, "DNS listener ready");
    }

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query = recv_buf[..n].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            let Some(response) = handler.handle_datagram(&query).await else {
                return;
            };
            if let Err(e) = socket.send_to(&response, from).await {
                warn!(error = %e, client = %from, "Failed to send DNS response");
            } else {
                debug!(client = %from, bytes = response.len(), "DNS response sent");
            }
        });
    }
}
