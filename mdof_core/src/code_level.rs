//! # Seismic Design Code Level
//!
//! Buckets a construction year into a Hazus seismic-design-stringency era.
//! The thresholds are fixed policy, not configuration: post-1973 buildings
//! are assumed designed to a modern (high) code, 1941-1973 to a moderate
//! code, and anything earlier predates seismic provisions entirely.
//!
//! The classifier never produces [`CodeLevel::Low`]. The Hazus table still
//! carries a low-code block, so the variant exists for table keying, but
//! the year policy skips straight from moderate-code to pre-code. This
//! mirrors the source dataset's own gap and must not be "fixed" here
//! without revisiting the thresholds (it does not account for seismic
//! zone either).

use serde::{Deserialize, Serialize};

/// Seismic design code level per the Hazus reference table.
///
/// Variants are ordered to match the four blocks of the reference file
/// (block 0 = high-code through block 3 = pre-code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeLevel {
    /// High-code (block 0): designed after the 1973 code era
    High,
    /// Moderate-code (block 1): designed 1941-1973
    Moderate,
    /// Low-code (block 2): present in the table, never produced by
    /// [`classify`] - reserved bucket
    Low,
    /// Pre-code (block 3): designed before 1941
    Pre,
}

impl CodeLevel {
    /// All code levels in reference-file block order
    pub const ALL: [CodeLevel; 4] = [
        CodeLevel::High,
        CodeLevel::Moderate,
        CodeLevel::Low,
        CodeLevel::Pre,
    ];

    /// Block index of this code level in the reference file (0..=3)
    pub fn block_index(&self) -> usize {
        match self {
            CodeLevel::High => 0,
            CodeLevel::Moderate => 1,
            CodeLevel::Low => 2,
            CodeLevel::Pre => 3,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeLevel::High => "high-code",
            CodeLevel::Moderate => "moderate-code",
            CodeLevel::Low => "low-code",
            CodeLevel::Pre => "pre-code",
        }
    }
}

impl std::fmt::Display for CodeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify a construction year into a code level.
///
/// Total over all years; no failure modes.
///
/// # Example
///
/// ```rust
/// use mdof_core::code_level::{classify, CodeLevel};
///
/// assert_eq!(classify(1980), CodeLevel::High);
/// assert_eq!(classify(1960), CodeLevel::Moderate);
/// assert_eq!(classify(1920), CodeLevel::Pre);
/// ```
pub fn classify(year: i32) -> CodeLevel {
    if year > 1973 {
        CodeLevel::High
    } else if year >= 1941 {
        CodeLevel::Moderate
    } else {
        CodeLevel::Pre
    }
}
