pub mod local_host_reader;

pub use local_host_reader::SystemLocalHostReader;
