pub mod lease_correlator;

pub use lease_correlator::LeaseCorrelator;
