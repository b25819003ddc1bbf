pub mod errors;
pub mod db;
pub mod company;
pub mod company_manager;
pub mod company_service;

#[cfg(test)]
mod tests;
