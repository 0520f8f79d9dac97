pub mod correlate_leases;
pub mod record_lease;
pub mod register_local_host;

pub use correlate_leases::{CorrelateLeasesUseCase, CorrelatorStats};
pub use record_lease::RecordLeaseUseCase;
pub use register_local_host::RegisterLocalHostUseCase;
