//! Shared building blocks used by every crate of the seller service.

pub mod types;
pub mod utils;
