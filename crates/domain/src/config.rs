pub mod capture;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod root;
pub mod server;

pub use capture::CaptureConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
