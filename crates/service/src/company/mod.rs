//! Company module: domain, access control, manager merge, repository and
//! the workflow service.

pub mod domain;
pub mod models;
pub mod merge;
pub mod access;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CompanyService;
