use leasedns_application::ports::{HostRegistry, RegistrySize, UpsertOutcome};
use leasedns_domain::AddressFamily;
use leasedns_infrastructure::registry::InMemoryHostRegistry;
use std::net::IpAddr;
use std::sync::Arc;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_lookup_unknown_host_returns_none() {
    let registry = InMemoryHostRegistry::new();
    assert_eq!(registry.lookup("nobody", AddressFamily::V4).await, None);
    assert_eq!(registry.size().await, RegistrySize::default());
}

#[tokio::test]
async fn test_families_are_independent() {
    let registry = InMemoryHostRegistry::new();

    registry.upsert("nas", ip("192.168.1.20")).await;
    registry.upsert("nas", ip("fd00::20")).await;

    assert_eq!(registry.lookup("nas", AddressFamily::V4).await, Some(ip("192.168.1.20")));
    assert_eq!(registry.lookup("nas", AddressFamily::V6).await, Some(ip("fd00::20")));
    assert_eq!(registry.size().await, RegistrySize { v4: 1, v6: 1 });
}

#[tokio::test]
async fn test_upsert_outcomes() {
    let registry = InMemoryHostRegistry::new();

    assert_eq!(registry.upsert("pc", ip("10.0.0.5")).await, UpsertOutcome::Inserted);
    assert_eq!(registry.upsert("pc", ip("10.0.0.5")).await, UpsertOutcome::Unchanged);
    assert_eq!(registry.upsert("pc", ip("10.0.0.6")).await, UpsertOutcome::Updated);
    assert_eq!(registry.lookup("pc", AddressFamily::V4).await, Some(ip("10.0.0.6")));
    assert_eq!(registry.size().await.v4, 1);
}

#[tokio::test]
async fn test_names_are_case_insensitive() {
    let registry = InMemoryHostRegistry::new();

    registry.upsert("Laptop", ip("10.0.0.7")).await;

    assert_eq!(registry.lookup("laptop", AddressFamily::V4).await, Some(ip("10.0.0.7")));
    assert_eq!(registry.lookup("LAPTOP", AddressFamily::V4).await, Some(ip("10.0.0.7")));
    assert_eq!(registry.upsert("LAPTOP", ip("10.0.0.7")).await, UpsertOutcome::Unchanged);
}

#[tokio::test]
async fn test_ipv4_mapped_address_is_filed_as_ipv4() {
    let registry = InMemoryHostRegistry::new();

    registry.upsert("mapped", ip("::ffff:192.168.1.9")).await;

    assert_eq!(registry.lookup("mapped", AddressFamily::V4).await, Some(ip("192.168.1.9")));
    assert_eq!(registry.lookup("mapped", AddressFamily::V6).await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_see_whole_addresses() {
    let registry = Arc::new(InMemoryHostRegistry::new());
    let first = ip("10.1.1.1");
    let second = ip("10.2.2.2");
    registry.upsert("flip", first).await;

    let writer = {
        let registry = registry.clone();
        tokio::spawn(async move {
            for i in 0..500 {
                let next = if i % 2 == 0 { second } else { first };
                registry.upsert("flip", next).await;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            tokio::spawn(async move {
                for _ in 0..500 {
                    let seen = registry.lookup("flip", AddressFamily::V4).await;
                    assert!(seen == Some(first) || seen == Some(second));
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
    assert_eq!(registry.size().await.v4, 1);
}
