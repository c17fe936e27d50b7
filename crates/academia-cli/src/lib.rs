//! # Academia CLI
//!
//! Database seeding utilities for Academia development and load testing.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use academia_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(4); // 4 faculties with default fan-out
//! seed_all(&pool, &config).await?;
//! ```

pub mod seeder;
