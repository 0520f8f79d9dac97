use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to open capture on {interface}: {reason}")]
    CaptureOpen { interface: String, reason: String },

    #[error("Capture filter '{filter}' rejected: {reason}")]
    CaptureFilter { filter: String, reason: String },

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Interface not found: {0}")]
    InterfaceNotFound(String),

    #[error("Interface enumeration failed: {0}")]
    InterfaceEnumeration(String),

    #[error("Malformed packet: {0}")]
    MalformedPacket(String),
}
