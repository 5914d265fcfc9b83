//! # Hazus Reference Table
//!
//! In-memory lookup of the empirical hysteretic, damage, and period
//! coefficients per (code level, structure type), loaded once from the
//! fixed-format Hazus reference text.
//!
//! ## File Format
//!
//! Four blocks, one per code level in [`CodeLevel::ALL`] order. Each
//! block is one header line (discarded) followed by exactly 36 entry
//! lines. An entry line carries 22 whitespace-delimited fields:
//!
//! ```text
//! <tag> <typeKey> <lowLimit:int> <highLimit:int> <10 floats> <4 floats> <T1> <T2> <hos> <damp>
//! ```
//!
//! Blank lines are ignored. Anything else - short blocks, extra lines,
//! wrong field counts, unparseable numbers - fails the whole load with
//! `MalformedReferenceData`; the table is all-or-nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::code_level::CodeLevel;
use crate::errors::{ModelError, ModelResult};

/// Number of code-level blocks in the reference file
pub const N_CODE_LEVELS: usize = 4;

/// Number of building-type entries per block
pub const N_BUILDING_TYPES: usize = 36;

/// Fields per entry line: tag, key, 2 story limits, 10 props, 4 damage,
/// T1, T2, hos, damp
const ENTRY_FIELDS: usize = 22;

/// One reference entry: the empirical coefficients for a single
/// (code level, structure type) bucket.
///
/// Immutable after load. The story limits are advisory; nothing in this
/// crate rejects a building whose story count falls outside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazusRecord {
    /// Lowest story count this entry nominally applies to (advisory)
    pub low_story_limit: i32,
    /// Highest story count this entry nominally applies to (advisory)
    pub high_story_limit: i32,
    /// 10-parameter hysteretic model coefficients.
    /// Index 0 is reserved, index 1 is the yield-strength coefficient,
    /// indices 2..=9 are shape parameters passed through verbatim.
    pub props: [f64; 10],
    /// Damage-state drift thresholds (slight, moderate, extensive, complete)
    pub damage: [f64; 4],
    /// Fundamental period per story: the building period is `noStories * t1`
    pub t1: f64,
    /// Secondary period
    pub t2: f64,
    /// Nominal story height from the reference data
    pub hos: f64,
    /// Damping ratio
    pub damp: f64,
}

/// The loaded reference table, keyed by (code level, structure type).
///
/// An explicit composite-key map rather than the source dataset's
/// positional array-of-arrays; the reserved low-code block is loaded
/// like any other and simply never resolved by the year classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct HazusTable {
    records: HashMap<(CodeLevel, String), HazusRecord>,
}

impl HazusTable {
    /// Parse the reference table from its fixed-format text.
    ///
    /// Returns `MalformedReferenceData` unless the text holds exactly
    /// 4 blocks x (1 header + 36 entries), every entry with 20
    /// well-formed fields.
    pub fn parse(text: &str) -> ModelResult<Self> {
        // Keep 1-based line numbers for error reporting; blank lines
        // are skipped but do not renumber anything.
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let mut records = HashMap::with_capacity(N_CODE_LEVELS * N_BUILDING_TYPES);
        let mut last_line = 0usize;

        for level in CodeLevel::ALL {
            // Block header, discarded
            let (header_line, _) = lines.next().ok_or_else(|| {
                ModelError::malformed_reference(
                    last_line + 1,
                    format!("missing header for {} block", level),
                )
            })?;
            last_line = header_line;

            for entry in 0..N_BUILDING_TYPES {
                let (line_no, line) = lines.next().ok_or_else(|| {
                    ModelError::malformed_reference(
                        last_line + 1,
                        format!(
                            "{} block truncated: found {} of {} entries",
                            level, entry, N_BUILDING_TYPES
                        ),
                    )
                })?;
                last_line = line_no;

                let (key, record) = parse_entry(line_no, line)?;
                if records.insert((level, key.clone()), record).is_some() {
                    return Err(ModelError::malformed_reference(
                        line_no,
                        format!("duplicate type key '{}' in {} block", key, level),
                    ));
                }
            }
        }

        if let Some((line_no, _)) = lines.next() {
            return Err(ModelError::malformed_reference(
                line_no,
                format!(
                    "trailing data after {} expected entries",
                    N_CODE_LEVELS * N_BUILDING_TYPES
                ),
            ));
        }

        Ok(HazusTable { records })
    }

    /// Look up the entry for a code level and (already uppercased)
    /// structure type. Exact key match; no fallback between code levels.
    pub fn lookup(&self, level: CodeLevel, struc_type: &str) -> ModelResult<&HazusRecord> {
        self.records
            .get(&(level, struc_type.to_string()))
            .ok_or_else(|| {
                ModelError::unknown_building_type(struc_type, level.display_name())
            })
    }

    /// Number of loaded entries (always 144 for a valid table)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Structure-type keys available under a code level, unordered
    pub fn types_for(&self, level: CodeLevel) -> impl Iterator<Item = &str> {
        self.records
            .keys()
            .filter(move |(l, _)| *l == level)
            .map(|(_, key)| key.as_str())
    }
}

/// Parse one 22-field entry line into its key and record.
fn parse_entry(line_no: usize, line: &str) -> ModelResult<(String, HazusRecord)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != ENTRY_FIELDS {
        return Err(ModelError::malformed_reference(
            line_no,
            format!("expected {} fields, found {}", ENTRY_FIELDS, fields.len()),
        ));
    }

    // fields[0] is the discard tag
    let key = fields[1].to_string();
    let low_story_limit = parse_int(line_no, "lowLimit", fields[2])?;
    let high_story_limit = parse_int(line_no, "highLimit", fields[3])?;

    let mut props = [0.0; 10];
    for (k, slot) in props.iter_mut().enumerate() {
        *slot = parse_float(line_no, &format!("props[{}]", k), fields[4 + k])?;
    }

    let mut damage = [0.0; 4];
    for (k, slot) in damage.iter_mut().enumerate() {
        *slot = parse_float(line_no, &format!("damage[{}]", k), fields[14 + k])?;
    }

    let record = HazusRecord {
        low_story_limit,
        high_story_limit,
        props,
        damage,
        t1: parse_float(line_no, "T1", fields[18])?,
        t2: parse_float(line_no, "T2", fields[19])?,
        hos: parse_float(line_no, "hos", fields[20])?,
        damp: parse_float(line_no, "damp", fields[21])?,
    };

    Ok((key, record))
}

fn parse_int(line_no: usize, field: &str, token: &str) -> ModelResult<i32> {
    token.parse().map_err(|_| {
        ModelError::malformed_reference(
            line_no,
            format!("field '{}': '{}' is not an integer", field, token),
        )
    })
}

fn parse_float(line_no: usize, field: &str, token: &str) -> ModelResult<f64> {
    token.parse().map_err(|_| {
        ModelError::malformed_reference(
            line_no,
            format!("field '{}': '{}' is not a number", field, token),
        )
    })
}
