pub mod dns;
pub mod leases;

pub use dns::ResolveHostUseCase;
pub use leases::{
    CorrelateLeasesUseCase, CorrelatorStats, RecordLeaseUseCase, RegisterLocalHostUseCase,
};
