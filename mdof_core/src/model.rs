//! # Model Assembly
//!
//! Packages derived story parameters into the output record consumed by
//! the downstream nonlinear dynamic-analysis engine, and exposes the
//! full generation pipeline (classify, look up, derive, assemble) as a
//! single pure function.
//!
//! ## Output JSON
//!
//! ```json
//! {
//!   "type": "MDOF_shear_model",
//!   "modelData": {
//!     "dampingRatio": 0.06,
//!     "damageCriteria": [0.004, 0.008, 0.012, 0.016],
//!     "floorParams": [{ "floor": 1, "mass": 500000.0 }],
//!     "interstoryParams": [{ "story": 1, "K0": 1.0, "Sy": 1.0, "...": 0.0 }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::building::BuildingDescription;
use crate::code_level::classify;
use crate::errors::ModelResult;
use crate::hazus::HazusTable;
use crate::story::{derive, FloorParameter, InterstoryParameter, StoryParameters};

/// Model type tag emitted on every record
pub const MODEL_TYPE: &str = "MDOF_shear_model";

/// The assembled shear-model payload: damping, damage criteria, and the
/// per-floor / per-story parameter lists, ordered ascending from the
/// base (index 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelData {
    pub damping_ratio: f64,
    pub damage_criteria: [f64; 4],
    pub floor_params: Vec<FloorParameter>,
    pub interstory_params: Vec<InterstoryParameter>,
}

/// The complete output record: a type tag plus the model payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Always [`MODEL_TYPE`]
    #[serde(rename = "type")]
    pub model_type: String,
    #[serde(rename = "modelData")]
    pub model_data: ModelData,
}

/// Package derived story parameters into a [`ModelData`].
///
/// Pure structural packaging; preserves input ordering, computes nothing.
pub fn assemble(params: StoryParameters) -> ModelData {
    ModelData {
        damping_ratio: params.damping_ratio,
        damage_criteria: params.damage_criteria,
        floor_params: params.floor_params,
        interstory_params: params.interstory_params,
    }
}

/// Generate the MDOF shear model for one building.
///
/// Runs the whole pipeline against an already-loaded reference table:
/// validate the description, classify the construction year, look up
/// the (code level, structure type) entry, derive story parameters,
/// and assemble the tagged output record. Side-effect free; the same
/// table can back any number of calls.
///
/// # Example
///
/// ```rust,no_run
/// use mdof_core::building::BuildingDescription;
/// use mdof_core::hazus::HazusTable;
/// use mdof_core::model::generate_model;
///
/// # fn load_table() -> HazusTable { unimplemented!() }
/// let table = load_table();
/// let building = BuildingDescription {
///     struc_type: "W1".to_string(),
///     year: 1980,
///     s_height: 3.0,
///     no_stories: 3,
///     area: 500.0,
/// };
///
/// let record = generate_model(&building, &table)?;
/// assert_eq!(record.model_type, "MDOF_shear_model");
/// # Ok::<(), mdof_core::errors::ModelError>(())
/// ```
pub fn generate_model(
    building: &BuildingDescription,
    table: &HazusTable,
) -> ModelResult<ModelRecord> {
    building.validate()?;

    let code_level = classify(building.year);
    let entry = table.lookup(code_level, &building.normalized_type())?;
    log::debug!(
        "building type {} year {} resolved to {} ({} stories)",
        building.normalized_type(),
        building.year,
        code_level,
        building.no_stories
    );

    let params = derive(building, entry)?;

    Ok(ModelRecord {
        model_type: MODEL_TYPE.to_string(),
        model_data: assemble(params),
    })
}
