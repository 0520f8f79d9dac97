use async_trait::async_trait;
use leasedns_domain::DomainError;
use std::net::IpAddr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalHost {
    pub hostname: Option<String>,
    pub addresses: Vec<IpAddr>,
}

#[async_trait]
pub trait LocalHostReader: Send + Sync {
    /// Reads this machine's hostname and the addresses bound to `interface`.
    async fn read_local_host(&self, interface: &str) -> Result<LocalHost, DomainError>;
}
