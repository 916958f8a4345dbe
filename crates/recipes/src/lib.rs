//! # recipes
//!
//! A catalog of ready-to-deploy Kubernetes workloads ("recipes").
//!
//! A recipe pairs a manifest file with the metadata a user needs before and
//! after applying it: category, difficulty, port mappings, credentials, common
//! commands and a documentation link. The catalog is read from a JSON
//! descriptor of the form:
//!
//! ```json
//! {
//!   "recipes": [
//!     { "id": 1, "name": "Redis", "yaml": "recipes/redis.yaml" }
//!   ]
//! }
//! ```
//!
//! This crate only loads, validates and looks up recipes. Applying a manifest
//! is left to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use recipes::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new(Catalog::FILE_NAME))?;
//!
//! if let Some(recipe) = catalog.get(1) {
//!     println!("{} ({})", recipe.name, recipe.difficulty());
//! }
//! # Ok::<(), recipes::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - A missing descriptor file is an empty catalog, never an error.
//! - Recipe ids are unique within a loaded catalog.
//! - Lookup by an unknown id returns `None`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Catalog loading and lookup.
pub mod catalog;
/// Error types for catalog operations.
pub mod error;
/// Recipe records.
pub mod types;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use types::{DocsLink, NOT_AVAILABLE, PortMapping, Recipe};
