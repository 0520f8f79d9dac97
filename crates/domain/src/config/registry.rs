use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Seed the registry with this machine's hostname and capture interface
    /// addresses at startup.
    #[serde(default = "default_true")]
    pub self_register: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            self_register: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
