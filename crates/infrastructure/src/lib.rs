//! leasedns Infrastructure Layer
pub mod capture;
pub mod dns;
pub mod registry;
pub mod system;
