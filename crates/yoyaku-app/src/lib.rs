//! Yoyaku scheduling engine - HTTP application layer.

pub mod app;
pub mod error;
pub mod middleware;
pub mod service_handler;
