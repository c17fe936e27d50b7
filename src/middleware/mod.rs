//! Request middleware.
//!
//! - [`auth`]: bearer token gate for entity routes and the [`auth::AuthUser`]
//!   extractor
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_token`] verifies signature and expiry
//! 3. Missing credential: `401`; invalid or expired: `403`; the handler never runs
//! 4. Otherwise the decoded claims are stored as an [`auth::AuthUser`] request
//!    extension and the handler runs
//!
//! ```ignore
//! Router::new()
//!     .nest("/faculties", init_faculties_router())
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_token));
//! ```

pub mod auth;
