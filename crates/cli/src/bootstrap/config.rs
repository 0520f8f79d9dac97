use leasedns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config_summary(config: &Config) {
    info!(
        interface = %config.capture.interface,
        filter = %config.capture.filter,
        snaplen = config.capture.snaplen,
        promiscuous = config.capture.promiscuous,
        queue_capacity = config.capture.queue_capacity,
        "Capture configuration"
    );
    info!(
        listen = %config.server.dns_listen_address(),
        answer_all_families = config.dns.answer_all_families,
        self_register = config.registry.self_register,
        "DNS configuration"
    );
}
