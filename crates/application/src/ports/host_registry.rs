use async_trait::async_trait;
use leasedns_domain::AddressFamily;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrySize {
    pub v4: usize,
    pub v6: usize,
}

/// Shared hostname → address store, one slot per address family.
///
/// Entries are only added or overwritten, never removed.
#[async_trait]
pub trait HostRegistry: Send + Sync {
    async fn upsert(&self, hostname: &str, ip: IpAddr) -> UpsertOutcome;

    async fn lookup(&self, hostname: &str, family: AddressFamily) -> Option<IpAddr>;

    async fn size(&self) -> RegistrySize;
}
