mod client;
pub mod job_config;

pub use client::{basic_auth_header, JenkinsPlatform};
