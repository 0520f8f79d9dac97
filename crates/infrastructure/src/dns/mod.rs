pub mod record_type_map;
pub mod server;
pub mod udp;

pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
pub use udp::run_udp_listener;
