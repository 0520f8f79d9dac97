//! Mapping between hickory record types / record data and registry address families.

use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, RecordType};
use leasedns_domain::AddressFamily;
use std::net::IpAddr;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Address family an incoming query asks for; `None` for non-address types.
    pub fn to_family(record_type: RecordType) -> Option<AddressFamily> {
        match record_type {
            RecordType::A => Some(AddressFamily::V4),
            RecordType::AAAA => Some(AddressFamily::V6),
            _ => None,
        }
    }

    pub fn to_rdata(ip: IpAddr) -> RData {
        match ip {
            IpAddr::V4(ipv4) => RData::A(A(ipv4)),
            IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
        }
    }
}
