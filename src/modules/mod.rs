//! Feature modules.
//!
//! Each entity module has:
//!
//! - `controller.rs`: HTTP handlers with OpenAPI annotations
//! - `repository.rs`: the Postgres `CrudRepository` implementation
//! - `router.rs`: route table, mounted under `/api/<entity>`

pub mod auth;
pub mod faculties;
pub mod professors;
pub mod programs;
pub mod subjects;
