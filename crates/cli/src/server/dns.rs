use leasedns_infrastructure::dns::{run_udp_listener, DnsServerHandler};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::info;

/// Binds the DNS socket and returns the future that serves it.
///
/// Binding happens before the first lease is captured so a busy port is
/// reported at startup instead of from a background task.
pub fn start_dns_server(
    bind_addr: &str,
    handler: DnsServerHandler,
) -> anyhow::Result<impl std::future::Future<Output = ()>> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);

    info!(bind_address = %socket_addr, "Starting DNS server");

    Ok(run_udp_listener(socket, Arc::new(handler)))
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
