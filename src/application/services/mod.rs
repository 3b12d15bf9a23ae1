pub mod inspector;
pub mod payload_builder;
pub mod provider;
