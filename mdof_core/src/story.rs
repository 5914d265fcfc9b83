//! # Story Parameter Derivation
//!
//! The core algorithm: given a building description and its matched
//! Hazus entry, compute per-floor lumped masses and per-story stiffness,
//! yield capacity, and hysteresis-shape parameters for the shear model.
//!
//! Stiffness comes from the building fundamental period (`T0 = N * T1`)
//! through the empirical first-mode participation factor; yield capacity
//! is the tabulated yield coefficient scaled by seismic weight and
//! redistributed over height by a parabolic weighting that gives the
//! base story the full factor and tapers toward the roof. The seven
//! shape parameters are uniform over height - only K0 and Sy vary by
//! story.

use serde::{Deserialize, Serialize};

use crate::building::BuildingDescription;
use crate::errors::{ModelError, ModelResult};
use crate::hazus::HazusRecord;

/// Lumped mass per unit floor area (kg per m² of floor plate)
pub const UNIT_MASS: f64 = 1000.0;

/// Gravitational acceleration (m/s²). The reference coefficient set was
/// calibrated against 9.8 exactly; do not upgrade the precision.
pub const GRAVITY: f64 = 9.8;

/// Circle constant, truncated. Existing regression baselines expect
/// bit-identical stiffnesses; do not swap in `std::f64::consts::PI`.
pub const PI: f64 = 3.14159265358979;

/// Lumped mass of one floor plate (1-based floor index).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorParameter {
    /// Floor index, 1 at the base
    pub floor: u32,
    /// Lumped mass (floor area x unit mass density)
    pub mass: f64,
}

/// Hysteretic parameters of one interstory spring (1-based story index).
///
/// Wire names follow the downstream solver's schema: `K0`, `Sy`, `C`
/// are capitalized, the rest are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterstoryParameter {
    /// Story index, 1 at the base
    pub story: u32,
    /// Initial elastic stiffness
    #[serde(rename = "K0")]
    pub k0: f64,
    /// Yield shear capacity
    #[serde(rename = "Sy")]
    pub sy: f64,
    /// Hardening ratio
    pub eta: f64,
    /// Degradation rate
    #[serde(rename = "C")]
    pub c: f64,
    /// Unloading stiffness parameter
    pub gamma: f64,
    /// Softening-branch hardening ratio
    pub eta_soft: f64,
    /// Capping ductility
    pub alpha: f64,
    /// Residual-strength ratio
    pub beta: f64,
    /// Stiffness-degradation parameter
    pub a_k: f64,
    /// Pinching parameter
    pub omega: f64,
}

/// Everything the deriver produces for one building, before packaging.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryParameters {
    pub damping_ratio: f64,
    pub damage_criteria: [f64; 4],
    pub floor_params: Vec<FloorParameter>,
    pub interstory_params: Vec<InterstoryParameter>,
}

/// Empirical first-mode participation factor as a function of story
/// count: `lambda(n) = 0.4053 n^2 + 0.405 n + 0.1869`.
///
/// Depends only on the building's story count (evaluated at N - 1), so
/// it is computed once per building and applied to every story.
pub fn mode_shape_factor(n: u32) -> f64 {
    let n = f64::from(n);
    0.4053 * n * n + 0.405 * n + 0.1869
}

/// Capacity-distribution weight for story `i` of an `n`-story building:
/// `r(i) = 1 - i(i-1) / (n(n+1))`.
///
/// Equals 1 at the base story and decreases monotonically with height.
pub fn distribution_ratio(story: u32, no_stories: u32) -> f64 {
    let i = f64::from(story);
    let n = f64::from(no_stories);
    1.0 - i * (i - 1.0) / (n * (n + 1.0))
}

/// Derive per-floor and per-story parameters for one building.
///
/// # Errors
///
/// * `InvalidInput` if the building has zero stories
/// * `InvalidReferenceData` if the matched entry's T1 is not positive
///   (the period scaling would divide by zero)
///
/// # Example
///
/// ```rust
/// use mdof_core::building::BuildingDescription;
/// use mdof_core::hazus::HazusRecord;
/// use mdof_core::story::derive;
///
/// let building = BuildingDescription {
///     struc_type: "W1".to_string(),
///     year: 1980,
///     s_height: 3.0,
///     no_stories: 3,
///     area: 500.0,
/// };
/// let record = HazusRecord {
///     low_story_limit: 1,
///     high_story_limit: 3,
///     props: [0.0, 0.2, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
///     damage: [0.004, 0.008, 0.012, 0.016],
///     t1: 0.3,
///     t2: 0.333,
///     hos: 3.0,
///     damp: 0.06,
/// };
///
/// let params = derive(&building, &record).unwrap();
/// assert_eq!(params.floor_params.len(), 3);
/// assert_eq!(params.floor_params[0].mass, 500_000.0);
/// ```
pub fn derive(
    building: &BuildingDescription,
    record: &HazusRecord,
) -> ModelResult<StoryParameters> {
    building.validate()?;

    if record.t1 <= 0.0 {
        return Err(ModelError::invalid_reference(
            building.normalized_type(),
            format!("T1 = {} must be positive", record.t1),
        ));
    }

    let n = building.no_stories;
    let t0 = f64::from(n) * record.t1;
    let mode_shape = mode_shape_factor(n - 1);

    let mut floor_params = Vec::with_capacity(n as usize);
    let mut interstory_params = Vec::with_capacity(n as usize);

    for i in 1..=n {
        let mass = building.area * UNIT_MASS;
        floor_params.push(FloorParameter { floor: i, mass });

        let k0 = 4.0 * PI * PI * mode_shape * mass / (t0 * t0);
        let r = distribution_ratio(i, n);
        let sy = record.props[1] * mass * GRAVITY * f64::from(n) * r;

        interstory_params.push(InterstoryParameter {
            story: i,
            k0,
            sy,
            eta: record.props[2],
            c: record.props[3],
            gamma: record.props[4],
            eta_soft: record.props[5],
            alpha: record.props[6],
            beta: record.props[7],
            a_k: record.props[8],
            omega: record.props[9],
        });
    }

    Ok(StoryParameters {
        damping_ratio: record.damp,
        damage_criteria: record.damage,
        floor_params,
        interstory_params,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_record() -> HazusRecord {
        HazusRecord {
            low_story_limit: 1,
            high_story_limit: 3,
            props: [0.0, 0.2, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
            damage: [0.004, 0.008, 0.012, 0.016],
            t1: 0.3,
            t2: 0.333,
            hos: 3.0,
            damp: 0.06,
        }
    }

    fn test_building(no_stories: u32) -> BuildingDescription {
        BuildingDescription {
            struc_type: "W1".to_string(),
            year: 1980,
            s_height: 3.0,
            no_stories,
            area: 500.0,
        }
    }

    #[test]
    fn test_distribution_ratio_base_is_one() {
        for n in [1, 3, 10, 50] {
            assert_eq!(distribution_ratio(1, n), 1.0);
        }
    }

    #[test]
    fn test_distribution_ratio_non_increasing() {
        for n in [1u32, 3, 10] {
            let mut previous = f64::INFINITY;
            for i in 1..=n {
                let r = distribution_ratio(i, n);
                assert!(
                    r <= previous,
                    "r({}) = {} increased over r({}) = {} for N = {}",
                    i, r, i - 1, previous, n
                );
                previous = r;
            }
        }
    }

    #[test]
    fn test_distribution_ratio_known_values() {
        // N = 3: r(2) = 1 - 2/12, r(3) = 1 - 6/12
        assert_relative_eq!(distribution_ratio(2, 3), 1.0 - 2.0 / 12.0);
        assert_relative_eq!(distribution_ratio(3, 3), 0.5);
    }

    #[test]
    fn test_mode_shape_factor_known_values() {
        assert_relative_eq!(mode_shape_factor(0), 0.1869, epsilon = 1e-12);
        // lambda(2) = 0.4053*4 + 0.405*2 + 0.1869
        assert_relative_eq!(mode_shape_factor(2), 2.6181, epsilon = 1e-12);
    }

    #[test]
    fn test_three_story_scenario() {
        let building = test_building(3);
        let record = test_record();
        let params = derive(&building, &record).unwrap();

        assert_eq!(params.damping_ratio, 0.06);
        assert_eq!(params.damage_criteria, [0.004, 0.008, 0.012, 0.016]);
        assert_eq!(params.floor_params.len(), 3);
        assert_eq!(params.interstory_params.len(), 3);

        // mass = 500 m2 x 1000 kg/m2 for every floor
        for (idx, floor) in params.floor_params.iter().enumerate() {
            assert_eq!(floor.floor, idx as u32 + 1);
            assert_eq!(floor.mass, 500_000.0);
        }

        // K0 = 4 pi^2 lambda(2) m / T0^2, identical for all stories
        let t0 = 3.0 * 0.3;
        let expected_k0 = 4.0 * PI * PI * 2.6181 * 500_000.0 / (t0 * t0);
        for story in &params.interstory_params {
            assert_relative_eq!(story.k0, expected_k0, max_relative = 1e-12);
        }

        // Sy decreases from base to roof
        assert!(params.interstory_params[0].sy > params.interstory_params[1].sy);
        assert!(params.interstory_params[1].sy > params.interstory_params[2].sy);

        // Base story gets the full weight factor
        let expected_sy_base = 0.2 * 500_000.0 * GRAVITY * 3.0;
        assert_relative_eq!(params.interstory_params[0].sy, expected_sy_base);
    }

    #[test]
    fn test_shape_parameters_uniform_and_passed_through() {
        let params = derive(&test_building(3), &test_record()).unwrap();
        for story in &params.interstory_params {
            assert_eq!(story.eta, 0.2);
            assert_eq!(story.c, 0.3);
            assert_eq!(story.gamma, 0.4);
            assert_eq!(story.eta_soft, 0.5);
            assert_eq!(story.alpha, 0.6);
            assert_eq!(story.beta, 0.7);
            assert_eq!(story.a_k, 0.8);
            assert_eq!(story.omega, 0.9);
        }
    }

    #[test]
    fn test_single_story_building() {
        let params = derive(&test_building(1), &test_record()).unwrap();
        assert_eq!(params.floor_params.len(), 1);
        assert_eq!(params.interstory_params[0].story, 1);
        // r(1) = 1: full capacity on the only story
        let expected_sy = 0.2 * 500_000.0 * GRAVITY;
        assert_relative_eq!(params.interstory_params[0].sy, expected_sy);
    }

    #[test]
    fn test_zero_t1_rejected() {
        let mut record = test_record();
        record.t1 = 0.0;
        let err = derive(&test_building(3), &record).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REFERENCE_DATA");
    }

    #[test]
    fn test_negative_t1_rejected() {
        let mut record = test_record();
        record.t1 = -0.1;
        let err = derive(&test_building(3), &record).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REFERENCE_DATA");
    }

    #[test]
    fn test_zero_stories_rejected() {
        let err = derive(&test_building(0), &test_record()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_interstory_wire_names() {
        let params = derive(&test_building(1), &test_record()).unwrap();
        let json = serde_json::to_string(&params.interstory_params[0]).unwrap();
        assert!(json.contains("\"K0\""));
        assert!(json.contains("\"Sy\""));
        assert!(json.contains("\"C\""));
        assert!(json.contains("\"eta_soft\""));
        assert!(json.contains("\"a_k\""));
    }
}
