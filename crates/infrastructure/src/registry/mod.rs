pub mod lease_registry;

pub use lease_registry::InMemoryHostRegistry;
