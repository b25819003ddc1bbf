//! Service layer of the seller service.
//! - `company`: create/read/update/delete workflow with access control and
//!   superuser enrichment of the manager list.
//! - `userservice`: client of the external UserService (superuser directory).
//! - `catalog`: services offered by a company.
//! - Business code is independent of the web framework; persistence sits
//!   behind repository traits with SeaORM and in-memory implementations.

pub mod errors;
pub mod actor;
pub mod pagination;
pub mod company;
pub mod userservice;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
