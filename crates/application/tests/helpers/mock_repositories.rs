use async_trait::async_trait;
use leasedns_application::ports::{
    DhcpDecoder, HostRegistry, LocalHost, LocalHostReader, RegistrySize, UpsertOutcome,
};
use leasedns_domain::dhcp::{OPTION_HOSTNAME, OPTION_MESSAGE_TYPE};
use leasedns_domain::{
    AddressFamily, DhcpMessage, DhcpOption, DomainError, HardwareAddr, LinkType, RawPacket,
};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn mac(last: u8) -> HardwareAddr {
    HardwareAddr::from([0x02, 0x00, 0x5e, 0x00, 0x00, last])
}

pub fn request(last: u8, hostname: Option<&str>) -> DhcpMessage {
    let mut options = vec![DhcpOption::new(OPTION_MESSAGE_TYPE, vec![3])];
    if let Some(name) = hostname {
        options.push(DhcpOption::new(OPTION_HOSTNAME, name.as_bytes().to_vec()));
    }
    DhcpMessage::new(mac(last), Ipv4Addr::UNSPECIFIED, options)
}

pub fn ack(last: u8, ip: &str) -> DhcpMessage {
    DhcpMessage::new(
        mac(last),
        ip.parse().unwrap(),
        vec![DhcpOption::new(OPTION_MESSAGE_TYPE, vec![5])],
    )
}

pub fn with_type(last: u8, message_type: u8) -> DhcpMessage {
    DhcpMessage::new(
        mac(last),
        Ipv4Addr::UNSPECIFIED,
        vec![DhcpOption::new(OPTION_MESSAGE_TYPE, vec![message_type])],
    )
}

/// Packet whose first byte selects the scripted decode result.
pub fn scripted_packet(index: u8) -> RawPacket {
    RawPacket::new(LinkType::Ethernet, vec![index])
}

pub struct ScriptedDecoder {
    script: Vec<Result<Option<DhcpMessage>, DomainError>>,
}

impl ScriptedDecoder {
    pub fn new(script: Vec<Result<Option<DhcpMessage>, DomainError>>) -> Self {
        Self { script }
    }

    /// Decoder over plain messages, each decoding successfully.
    pub fn messages(messages: Vec<DhcpMessage>) -> Self {
        Self::new(messages.into_iter().map(|m| Ok(Some(m))).collect())
    }

    pub fn packets(&self) -> Vec<RawPacket> {
        (0..self.script.len() as u8).map(scripted_packet).collect()
    }
}

impl DhcpDecoder for ScriptedDecoder {
    fn decode(&self, packet: &RawPacket) -> Result<Option<DhcpMessage>, DomainError> {
        let index = packet.data.first().copied().unwrap_or_default() as usize;
        match self.script.get(index) {
            Some(result) => result.clone(),
            None => Ok(None),
        }
    }
}

pub struct MockHostRegistry {
    entries: Arc<RwLock<HashMap<(String, AddressFamily), IpAddr>>>,
    upsert_count: Arc<AtomicU64>,
}

impl MockHostRegistry {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            upsert_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let registry = Self::new();
        for (hostname, ip) in entries {
            registry.upsert(hostname, ip.parse().unwrap()).await;
        }
        registry.upsert_count.store(0, Ordering::Relaxed);
        registry
    }

    pub fn upsert_count(&self) -> u64 {
        self.upsert_count.load(Ordering::Relaxed)
    }

    pub async fn get(&self, hostname: &str, family: AddressFamily) -> Option<IpAddr> {
        self.entries
            .read()
            .await
            .get(&(hostname.to_string(), family))
            .copied()
    }
}

#[async_trait]
impl HostRegistry for MockHostRegistry {
    async fn upsert(&self, hostname: &str, ip: IpAddr) -> UpsertOutcome {
        self.upsert_count.fetch_add(1, Ordering::Relaxed);
        let key = (hostname.to_string(), AddressFamily::of(&ip));
        match self.entries.write().await.insert(key, ip) {
            None => UpsertOutcome::Inserted,
            Some(previous) if previous == ip => UpsertOutcome::Unchanged,
            Some(_) => UpsertOutcome::Updated,
        }
    }

    async fn lookup(&self, hostname: &str, family: AddressFamily) -> Option<IpAddr> {
        self.get(hostname, family).await
    }

    async fn size(&self) -> RegistrySize {
        let entries = self.entries.read().await;
        RegistrySize {
            v4: entries.keys().filter(|(_, f)| *f == AddressFamily::V4).count(),
            v6: entries.keys().filter(|(_, f)| *f == AddressFamily::V6).count(),
        }
    }
}

pub struct MockLocalHostReader {
    result: Result<LocalHost, DomainError>,
}

impl MockLocalHostReader {
    pub fn new(hostname: Option<&str>, addresses: Vec<&str>) -> Self {
        Self {
            result: Ok(LocalHost {
                hostname: hostname.map(str::to_string),
                addresses: addresses.into_iter().map(|a| a.parse().unwrap()).collect(),
            }),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl LocalHostReader for MockLocalHostReader {
    async fn read_local_host(&self, _interface: &str) -> Result<LocalHost, DomainError> {
        self.result.clone()
    }
}
