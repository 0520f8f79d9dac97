use leasedns_application::ports::HostRegistry;
use leasedns_application::use_cases::{
    CorrelateLeasesUseCase, RecordLeaseUseCase, RegisterLocalHostUseCase, ResolveHostUseCase,
};
use leasedns_domain::Config;
use leasedns_infrastructure::capture::WireDhcpDecoder;
use leasedns_infrastructure::registry::InMemoryHostRegistry;
use leasedns_infrastructure::system::SystemLocalHostReader;
use std::sync::Arc;

/// Every use case shares the one registry built here.
pub struct UseCases {
    pub correlate_leases: Arc<CorrelateLeasesUseCase>,
    pub record_lease: Arc<RecordLeaseUseCase>,
    pub register_local_host: Arc<RegisterLocalHostUseCase>,
    pub resolve_host: Arc<ResolveHostUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let registry: Arc<dyn HostRegistry> = Arc::new(InMemoryHostRegistry::new());
        let decoder = Arc::new(WireDhcpDecoder::new());
        let reader = Arc::new(SystemLocalHostReader::new());

        Self {
            correlate_leases: Arc::new(CorrelateLeasesUseCase::new(decoder)),
            record_lease: Arc::new(RecordLeaseUseCase::new(registry.clone())),
            register_local_host: Arc::new(RegisterLocalHostUseCase::new(
                reader,
                registry.clone(),
            )),
            resolve_host: Arc::new(
                ResolveHostUseCase::new(registry)
                    .with_all_families(config.dns.answer_all_families),
            ),
        }
    }
}
