use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Answer A and AAAA queries with every address family the registry
    /// holds for the name, not just the family that was asked for.
    #[serde(default)]
    pub answer_all_families: bool,
}
