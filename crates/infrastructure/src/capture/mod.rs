pub mod dhcp_decoder;
pub mod pcap_source;

pub use dhcp_decoder::WireDhcpDecoder;
pub use pcap_source::PcapPacketSource;
