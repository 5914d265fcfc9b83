//! # mdof_core - MDOF Shear-Building Model Generation
//!
//! `mdof_core` derives a multi-degree-of-freedom (MDOF) shear-building
//! model from a building's high-level description (structure type,
//! construction year, story height, story count, floor area), using
//! empirical hysteretic and damage coefficients from the Hazus
//! reference table. The output record feeds a downstream nonlinear
//! dynamic-analysis engine; no structural analysis happens here.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one model-generation call is a pure sequential
//!   computation over two read-only inputs
//! - **JSON-First**: every input and output type implements
//!   Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **All-or-nothing**: any failure is terminal; no partial or
//!   degraded model is ever produced
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use mdof_core::file_io::{load_building_description, load_hazus_table, save_model};
//! use mdof_core::model::generate_model;
//!
//! let building = load_building_description(Path::new("MDOF-shear.json"))?;
//! let table = load_hazus_table(Path::new("HazusData.txt"))?;
//!
//! let record = generate_model(&building, &table)?;
//! save_model(&record, Path::new("MDOF-model.json"))?;
//! # Ok::<(), mdof_core::errors::ModelError>(())
//! ```
//!
//! ## Modules
//!
//! - [`building`] - building-description input type and validation
//! - [`code_level`] - construction-year to seismic-code-level classifier
//! - [`hazus`] - reference-table loading and (code level, type) lookup
//! - [`story`] - per-story stiffness/yield/hysteresis derivation
//! - [`model`] - output assembly and the full generation pipeline
//! - [`errors`] - structured error types
//! - [`file_io`] - input reads and the atomic model write

pub mod building;
pub mod code_level;
pub mod errors;
pub mod file_io;
pub mod hazus;
pub mod model;
pub mod story;

// Re-export commonly used types at crate root for convenience
pub use building::BuildingDescription;
pub use code_level::{classify, CodeLevel};
pub use errors::{ModelError, ModelResult};
pub use hazus::{HazusRecord, HazusTable};
pub use model::{generate_model, ModelData, ModelRecord};
