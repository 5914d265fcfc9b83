//! # Building Description Input
//!
//! The high-level building description that everything else derives from.
//! Field names on the wire follow the established input schema
//! (`strucType`, `year`, `s_height`, `noStories`, `area`), nested under
//! a single `BuildingDescription` key.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "BuildingDescription": {
//!     "strucType": "W1",
//!     "year": 1980,
//!     "s_height": 3.0,
//!     "noStories": 3,
//!     "area": 500.0
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};

/// High-level description of one building.
///
/// Read-only input for a single model-generation call. Physical
/// plausibility of the values is the caller's problem; the only
/// enforced invariant is `no_stories >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescription {
    /// Hazus structure-type code (e.g., "W1", "S2M", "C1H").
    /// Matched case-insensitively: lookups use [`normalized_type`](Self::normalized_type).
    #[serde(rename = "strucType")]
    pub struc_type: String,

    /// Construction year, used to resolve the seismic design code level
    pub year: i32,

    /// Story height in meters (carried for downstream consumers; the
    /// period comes from the reference table, not from this height)
    pub s_height: f64,

    /// Number of stories above grade
    #[serde(rename = "noStories")]
    pub no_stories: u32,

    /// Floor area in square meters (per floor)
    pub area: f64,
}

/// On-disk wrapper: the description file nests the object under a
/// `BuildingDescription` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescriptionFile {
    #[serde(rename = "BuildingDescription")]
    pub building: BuildingDescription,
}

impl BuildingDescription {
    /// Validate input invariants.
    pub fn validate(&self) -> ModelResult<()> {
        if self.no_stories < 1 {
            return Err(ModelError::invalid_input(
                "noStories",
                self.no_stories.to_string(),
                "Building must have at least one story",
            ));
        }
        Ok(())
    }

    /// Structure type uppercased for table lookup
    pub fn normalized_type(&self) -> String {
        self.struc_type.to_uppercase()
    }
}
