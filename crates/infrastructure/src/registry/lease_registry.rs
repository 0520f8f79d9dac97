use async_trait::async_trait;
use leasedns_application::ports::{HostRegistry, RegistrySize, UpsertOutcome};
use leasedns_domain::AddressFamily;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tokio::sync::RwLock;
use tracing::trace;

#[derive(Debug, Default)]
struct Tables {
    v4: HashMap<String, Ipv4Addr>,
    v6: HashMap<String, Ipv6Addr>,
}

/// Process-lifetime hostname registry with one map per address family.
///
/// A single reader/writer lock guards both maps: lookups share it, each upsert
/// holds it exclusively for one map write. Keys are stored lower-cased, and
/// IPv4-mapped IPv6 addresses are filed as IPv4.
#[derive(Debug, Default)]
pub struct InMemoryHostRegistry {
    tables: RwLock<Tables>,
}

impl InMemoryHostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(hostname: &str) -> String {
        hostname.to_ascii_lowercase()
    }
}

fn upsert_entry<A: PartialEq + Copy>(
    map: &mut HashMap<String, A>,
    key: String,
    addr: A,
) -> UpsertOutcome {
    match map.insert(key, addr) {
        None => UpsertOutcome::Inserted,
        Some(previous) if previous == addr => UpsertOutcome::Unchanged,
        Some(_) => UpsertOutcome::Updated,
    }
}

#[async_trait]
impl HostRegistry for InMemoryHostRegistry {
    async fn upsert(&self, hostname: &str, ip: IpAddr) -> UpsertOutcome {
        let key = Self::key(hostname);
        let ip = ip.to_canonical();

        let outcome = {
            let mut tables = self.tables.write().await;
            match ip {
                IpAddr::V4(v4) => upsert_entry(&mut tables.v4, key, v4),
                IpAddr::V6(v6) => upsert_entry(&mut tables.v6, key, v6),
            }
        };

        trace!(hostname, ip = %ip, outcome = ?outcome, "Registry upsert");
        outcome
    }

    async fn lookup(&self, hostname: &str, family: AddressFamily) -> Option<IpAddr> {
        let key = Self::key(hostname);
        let tables = self.tables.read().await;
        match family {
            AddressFamily::V4 => tables.v4.get(&key).copied().map(IpAddr::V4),
            AddressFamily::V6 => tables.v6.get(&key).copied().map(IpAddr::V6),
        }
    }

    async fn size(&self) -> RegistrySize {
        let tables = self.tables.read().await;
        RegistrySize {
            v4: tables.v4.len(),
            v6: tables.v6.len(),
        }
    }
}
