pub mod api;
pub mod config;
pub mod error;
pub mod platform;
pub mod provision;
pub mod server;
pub mod shutdown;
