use serde::{Deserialize, Serialize};

/// Smallest snap length that still holds a full DHCP message with options.
pub const MIN_SNAPLEN: i32 = 1600;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Interface to capture DHCP traffic on.
    #[serde(default)]
    pub interface: String,

    /// BPF expression applied to the capture. Inbound direction is set separately.
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default = "default_snaplen")]
    pub snaplen: i32,

    #[serde(default)]
    pub promiscuous: bool,

    /// Capacity of the packet and lease queues. Producers block when full.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            interface: String::new(),
            filter: default_filter(),
            snaplen: default_snaplen(),
            promiscuous: false,
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_filter() -> String {
    "udp and port 68".to_string()
}

fn default_snaplen() -> i32 {
    MIN_SNAPLEN
}

fn default_queue_capacity() -> usize {
    256
}
