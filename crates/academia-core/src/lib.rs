//! # Academia Core
//!
//! Core types shared by every crate of the Academia API:
//!
//! - [`errors`]: the application error type and its HTTP rendering
//! - [`pagination`]: offset/limit query parameters and response metadata
//!
//! # Example
//!
//! ```ignore
//! use academia_core::{AppError, PaginationParams};
//!
//! let params = PaginationParams::default();
//! assert_eq!(params.limit(), 5);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Faculty not found"));
//! ```

pub mod errors;
pub mod pagination;

pub use errors::{AppError, ErrorResponse, MessageResponse};
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, PaginationMeta, PaginationParams};
