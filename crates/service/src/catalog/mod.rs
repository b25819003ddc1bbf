//! Services offered by a company (read side).

pub mod domain;
pub mod models;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CatalogService;
