//! Realty API - Backend for a real-estate listings site
//!
//! Public reads of property listings, owner bios, testimonials and company
//! settings; role-gated writes for admins and photographers; photo uploads
//! to object storage.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities, roles and business rules
//! - **services**: Application use cases
//! - **infra**: Database, repositories and object storage
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared request/response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Permission, Role};
pub use errors::{AppError, AppResult};
