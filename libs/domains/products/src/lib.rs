//! Products Domain
//!
//! Paginated listing, lookup and creation of catalog products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints behind guard chains (validation, auth)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Page coercion, lookup, creation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Store contract (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, page types
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//! let jwt = JwtAuth::new(&JwtConfig::new("0123456789abcdef0123456789abcdef"));
//!
//! let router: axum::Router = handlers::router(service, Arc::new(jwt));
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::PaginationConfig;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{CreateProduct, Product, ProductCategory, ProductStatus};
pub use pagination::{PageQuery, PageRequest, PageResult};
pub use repository::ProductRepository;
pub use service::ProductService;
