pub mod handler;
pub mod payload;
