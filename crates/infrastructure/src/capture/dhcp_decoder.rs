//! Wire decoder for captured DHCPv4 traffic.
//!
//! Peels the link, IPv4 and UDP headers off a captured frame and decodes the
//! BOOTP header and option area that follow:
//!
//! ```text
//! op htype hlen hops | xid | secs flags | ciaddr | yiaddr | siaddr | giaddr
//! chaddr (16) | sname (64) | file (128) | magic cookie (4) | options ...
//! ```
//!
//! Frames that are not UDP on the DHCP ports decode to `Ok(None)`. A DHCP
//! payload that is too short or lacks the magic cookie is an error. Option
//! damage past the cookie never fails the frame: the walk stops and the
//! options read so far are kept.

use leasedns_application::ports::DhcpDecoder;
use leasedns_domain::{DhcpMessage, DhcpOption, DomainError, HardwareAddr, LinkType, RawPacket};
use std::net::Ipv4Addr;
use tracing::trace;

const ETHERNET_HEADER_LEN: usize = 14;
const VLAN_TAG_LEN: usize = 4;
const MAX_VLAN_TAGS: usize = 2;
const SLL_HEADER_LEN: usize = 16;

const ETHERTYPE_IPV4: u16 = 0x0800;
const ETHERTYPE_VLAN: u16 = 0x8100;
const ETHERTYPE_QINQ: u16 = 0x88A8;

const IPV4_MIN_HEADER_LEN: usize = 20;
const IP_PROTO_UDP: u8 = 17;
const IPV4_FRAGMENT_OFFSET_MASK: u16 = 0x1FFF;

const UDP_HEADER_LEN: usize = 8;
const DHCP_SERVER_PORT: u16 = 67;
const DHCP_CLIENT_PORT: u16 = 68;

const BOOTP_HLEN_OFFSET: usize = 2;
const BOOTP_YIADDR_OFFSET: usize = 16;
const BOOTP_CHADDR_OFFSET: usize = 28;
const BOOTP_CHADDR_LEN: usize = 16;
const BOOTP_COOKIE_OFFSET: usize = 236;
const DHCP_MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];
const DHCP_OPTIONS_OFFSET: usize = BOOTP_COOKIE_OFFSET + DHCP_MAGIC_COOKIE.len();

const OPTION_PAD: u8 = 0;
const OPTION_END: u8 = 255;

#[derive(Debug, Default, Clone, Copy)]
pub struct WireDhcpDecoder;

impl WireDhcpDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DhcpDecoder for WireDhcpDecoder {
    fn decode(&self, packet: &RawPacket) -> Result<Option<DhcpMessage>, DomainError> {
        let Some(ip_packet) = strip_link_layer(packet.link_type, &packet.data) else {
            return Ok(None);
        };
        let Some(payload) = dhcp_payload(ip_packet) else {
            return Ok(None);
        };
        parse_dhcp(payload).map(Some)
    }
}

/// Returns the IPv4 packet carried by a frame, if any.
fn strip_link_layer(link_type: LinkType, frame: &[u8]) -> Option<&[u8]> {
    match link_type {
        LinkType::Ethernet => {
            if frame.len() < ETHERNET_HEADER_LEN {
                return None;
            }
            let mut ethertype = u16::from_be_bytes([frame[12], frame[13]]);
            let mut pos = ETHERNET_HEADER_LEN;
            let mut tags = 0;

            while (ethertype == ETHERTYPE_VLAN || ethertype == ETHERTYPE_QINQ) && tags < MAX_VLAN_TAGS {
                if frame.len() < pos + VLAN_TAG_LEN {
                    return None;
                }
                ethertype = u16::from_be_bytes([frame[pos + 2], frame[pos + 3]]);
                pos += VLAN_TAG_LEN;
                tags += 1;
            }

            (ethertype == ETHERTYPE_IPV4).then(|| &frame[pos..])
        }
        LinkType::LinuxSll => {
            if frame.len() < SLL_HEADER_LEN {
                return None;
            }
            let protocol = u16::from_be_bytes([frame[14], frame[15]]);
            (protocol == ETHERTYPE_IPV4).then(|| &frame[SLL_HEADER_LEN..])
        }
        LinkType::RawIp => Some(frame),
        LinkType::Other(_) => None,
    }
}

/// Returns the UDP payload of an IPv4 packet exchanged on the DHCP ports.
fn dhcp_payload(packet: &[u8]) -> Option<&[u8]> {
    if packet.len() < IPV4_MIN_HEADER_LEN || packet[0] >> 4 != 4 {
        return None;
    }

    let header_len = ((packet[0] & 0x0F) as usize) * 4;
    if header_len < IPV4_MIN_HEADER_LEN || packet.len() < header_len + UDP_HEADER_LEN {
        return None;
    }
    if packet[9] != IP_PROTO_UDP {
        return None;
    }

    // Later fragments carry no UDP header.
    let fragment = u16::from_be_bytes([packet[6], packet[7]]);
    if fragment & IPV4_FRAGMENT_OFFSET_MASK != 0 {
        return None;
    }

    let total_len = u16::from_be_bytes([packet[2], packet[3]]) as usize;
    let packet = if total_len >= header_len + UDP_HEADER_LEN && total_len <= packet.len() {
        &packet[..total_len]
    } else {
        packet
    };

    let udp = &packet[header_len..];
    let src_port = u16::from_be_bytes([udp[0], udp[1]]);
    let dst_port = u16::from_be_bytes([udp[2], udp[3]]);
    let is_dhcp = |port| port == DHCP_SERVER_PORT || port == DHCP_CLIENT_PORT;
    if !is_dhcp(src_port) && !is_dhcp(dst_port) {
        return None;
    }

    let udp_len = u16::from_be_bytes([udp[4], udp[5]]) as usize;
    let end = if udp_len >= UDP_HEADER_LEN && udp_len <= udp.len() {
        udp_len
    } else {
        udp.len()
    };
    Some(&udp[UDP_HEADER_LEN..end])
}

fn parse_dhcp(payload: &[u8]) -> Result<DhcpMessage, DomainError> {
    if payload.len() < DHCP_OPTIONS_OFFSET {
        return Err(DomainError::MalformedPacket(format!(
            "DHCP payload too short: {} bytes (minimum {})",
            payload.len(),
            DHCP_OPTIONS_OFFSET
        )));
    }
    if payload[BOOTP_COOKIE_OFFSET..DHCP_OPTIONS_OFFSET] != DHCP_MAGIC_COOKIE {
        return Err(DomainError::MalformedPacket(
            "Invalid DHCP magic cookie".to_string(),
        ));
    }

    let hlen = (payload[BOOTP_HLEN_OFFSET] as usize).min(BOOTP_CHADDR_LEN);
    let client_hw_addr =
        HardwareAddr::new(&payload[BOOTP_CHADDR_OFFSET..BOOTP_CHADDR_OFFSET + hlen]);

    let yiaddr = &payload[BOOTP_YIADDR_OFFSET..BOOTP_YIADDR_OFFSET + 4];
    let your_client_ip = Ipv4Addr::new(yiaddr[0], yiaddr[1], yiaddr[2], yiaddr[3]);

    let options = parse_options(&payload[DHCP_OPTIONS_OFFSET..]);

    Ok(DhcpMessage::new(client_hw_addr, your_client_ip, options))
}

fn parse_options(data: &[u8]) -> Vec<DhcpOption> {
    let mut options = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let code = data[pos];
        if code == OPTION_PAD {
            pos += 1;
            continue;
        }
        if code == OPTION_END {
            break;
        }

        let Some(&len) = data.get(pos + 1) else {
            trace!(code, "DHCP option truncated before length byte");
            break;
        };
        let start = pos + 2;
        let end = start + len as usize;
        if end > data.len() {
            trace!(code, len, available = data.len() - start, "DHCP option truncated");
            break;
        }

        options.push(DhcpOption::new(code, &data[start..end]));
        pos = end;
    }

    options
}
