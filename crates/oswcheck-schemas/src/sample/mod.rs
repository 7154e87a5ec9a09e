//! Sample feature collections for exercising a schema
//!
//! Given the names of tag definitions in a schema, the generator writes a
//! valid feature collection and an invalid twin in which every feature
//! breaks one constraint. Generation is seeded, so fixtures can be
//! regenerated byte for byte.
//!
//! # Example Usage
//!
//! ```rust
//! use oswcheck_schemas::sample::{generate_samples, SampleOptions};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "definitions": {
//!         "Bench": {
//!             "properties": {
//!                 "geometry": {"properties": {"type": {"enum": ["Point"]}}},
//!                 "properties": {
//!                     "required": ["amenity"],
//!                     "properties": {"amenity": {"enum": ["bench"]}}
//!                 }
//!             }
//!         }
//!     }
//! });
//!
//! let samples = generate_samples(&schema, &SampleOptions::for_tags(["Bench"]))?;
//! assert_eq!(samples.valid["features"][0]["properties"]["amenity"], "bench");
//! assert_eq!(samples.invalid["features"][0]["properties"]["amenity"], "__INVALID_ENUM__0");
//! # Ok::<(), oswcheck_schemas::sample::SampleError>(())
//! ```
//!
//! Copyright (c) 2025 OSWCheck Contributors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod generator;
pub mod values;

pub use error::{SampleError, SampleResult};
pub use generator::{generate_samples, SampleGenerator, SampleOptions, SampleSet};
pub use values::GeometryKind;
