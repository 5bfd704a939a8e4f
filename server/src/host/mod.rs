mod container;
mod host_config;
mod id_generator;
mod instance;

pub use container::Container;
pub use host_config::HostConfig;
pub use id_generator::InstanceIdGenerator;
pub use instance::Instance;
