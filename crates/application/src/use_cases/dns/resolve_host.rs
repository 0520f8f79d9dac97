use crate::ports::HostRegistry;
use leasedns_domain::AddressFamily;
use std::net::IpAddr;
use std::sync::Arc;

const ALL_FAMILIES: [AddressFamily; 2] = [AddressFamily::V4, AddressFamily::V6];

/// Use case: Look up a hostname in the registry for an address query
///
/// Each family is read separately; the two reads may observe different
/// registry states if a lease lands in between.
pub struct ResolveHostUseCase {
    registry: Arc<dyn HostRegistry>,
    answer_all_families: bool,
}

impl ResolveHostUseCase {
    pub fn new(registry: Arc<dyn HostRegistry>) -> Self {
        Self {
            registry,
            answer_all_families: false,
        }
    }

    pub fn with_all_families(mut self, enabled: bool) -> Self {
        self.answer_all_families = enabled;
        self
    }

    /// Addresses to answer with, IPv4 first. Empty means the name is unknown.
    pub async fn execute(&self, hostname: &str, requested: AddressFamily) -> Vec<IpAddr> {
        let families: &[AddressFamily] = if self.answer_all_families {
            &ALL_FAMILIES
        } else {
            match requested {
                AddressFamily::V4 => &ALL_FAMILIES[..1],
                AddressFamily::V6 => &ALL_FAMILIES[1..],
            }
        };

        let mut addresses = Vec::with_capacity(families.len());
        for family in families {
            if let Some(ip) = self.registry.lookup(hostname, *family).await {
                addresses.push(ip);
            }
        }
        addresses
    }
}
