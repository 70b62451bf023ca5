//! Yoyaku scheduling engine - Diesel persistence layer.

pub mod db;
pub mod error;
pub mod model;
