//! Schema and document loading
//!
//! JSON, GeoJSON and YAML inputs are parsed into `serde_json::Value` trees.
//! Loading failures are the only errors that abort a validation run; they are
//! wrapped so the message says which input was at fault.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use oswcheck_schemas::loader::SchemaLoader;
//! use std::path::Path;
//!
//! let loader = SchemaLoader::new();
//! let schema = loader.load_schema(Path::new("opensidewalks.schema.json"))?;
//! let document = loader.load_document(Path::new("my_invalid.geojson"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod schema_loader;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, SchemaParser};
pub use schema_loader::{feature_count, SchemaLoader};
