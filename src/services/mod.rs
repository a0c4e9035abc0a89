pub mod registry_service;

pub use registry_service::ActivityRegistry;
