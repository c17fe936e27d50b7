pub mod controller;
pub mod repository;
pub mod router;

pub use router::init_faculties_router;
