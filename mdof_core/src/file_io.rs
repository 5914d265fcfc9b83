//! # File I/O Module
//!
//! The two input reads and one output write around the generation
//! pipeline. Reads are all-or-nothing: a missing or unreadable file, or
//! a file of the wrong shape, fails the invocation with no partial
//! state. The model write is atomic (write to `.tmp`, fsync, rename) so
//! an interrupted run never leaves a half-written model behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use mdof_core::file_io::{load_building_description, load_hazus_table, save_model};
//! use mdof_core::model::generate_model;
//!
//! let building = load_building_description(Path::new("MDOF-shear.json"))?;
//! let table = load_hazus_table(Path::new("HazusData.txt"))?;
//! let record = generate_model(&building, &table)?;
//! save_model(&record, Path::new("MDOF-model.json"))?;
//! # Ok::<(), mdof_core::errors::ModelError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::building::{BuildingDescription, BuildingDescriptionFile};
use crate::errors::{ModelError, ModelResult};
use crate::hazus::HazusTable;
use crate::model::ModelRecord;

/// Load a building description from its nested-JSON file.
///
/// # Errors
///
/// * `FileError` if the file is absent or unreadable
/// * `MalformedInput` if the JSON is invalid or fields are missing or
///   of the wrong type (no defaulting)
pub fn load_building_description(path: &Path) -> ModelResult<BuildingDescription> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ModelError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let file: BuildingDescriptionFile = serde_json::from_str(&contents)
        .map_err(|e| ModelError::malformed_input(path.display().to_string(), e.to_string()))?;

    Ok(file.building)
}

/// Load the Hazus reference table from its fixed-format text file.
///
/// # Errors
///
/// * `FileError` if the file is absent or unreadable
/// * `MalformedReferenceData` if the text does not hold exactly 4
///   blocks of 36 well-formed entries
pub fn load_hazus_table(path: &Path) -> ModelResult<HazusTable> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ModelError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    HazusTable::parse(&contents)
}

/// Save a model record as pretty-printed JSON with atomic write semantics.
///
/// Writes to `<path>.tmp`, syncs to disk, then renames over the target,
/// cleaning up the temp file if the rename fails.
pub fn save_model(record: &ModelRecord, path: &Path) -> ModelResult<()> {
    let json = serde_json::to_string_pretty(record).map_err(|e| {
        ModelError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        ModelError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        ModelError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        ModelError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        ModelError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a previously saved model record.
///
/// Round-trip counterpart of [`save_model`]; useful for downstream
/// tooling and for verifying emitted models.
pub fn load_model(path: &Path) -> ModelResult<ModelRecord> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ModelError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| ModelError::SerializationError {
        reason: format!("Invalid model JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::path::PathBuf;

    use super::*;
    use crate::hazus::test_table::synthetic_table_text;
    use crate::model::generate_model;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("mdofgen_test_{}_{}.json", name, std::process::id()))
    }

    fn write_building_file(path: &Path) {
        let json = r#"{
            "BuildingDescription": {
                "strucType": "W1",
                "year": 1980,
                "s_height": 3.0,
                "noStories": 3,
                "area": 500.0
            }
        }"#;
        fs::write(path, json).unwrap();
    }

    #[test]
    fn test_load_building_description() {
        let path = temp_path("building");
        write_building_file(&path);

        let building = load_building_description(&path).unwrap();
        assert_eq!(building.struc_type, "W1");
        assert_eq!(building.no_stories, 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_building_file() {
        let err = load_building_description(Path::new("/nonexistent/building.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_malformed_building_file() {
        let path = temp_path("malformed");
        fs::write(&path, r#"{ "BuildingDescription": { "strucType": "W1" } }"#).unwrap();

        let err = load_building_description(&path).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_hazus_table_from_file() {
        let path = temp_dir().join(format!("mdofgen_test_hazus_{}.txt", std::process::id()));
        fs::write(&path, synthetic_table_text(0.2, 0.3, 0.06)).unwrap();

        let table = load_hazus_table(&path).unwrap();
        assert_eq!(table.len(), 144);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_hazus_file() {
        let err = load_hazus_table(Path::new("/nonexistent/HazusData.txt")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_save_and_load_model_roundtrip() {
        let building_path = temp_path("roundtrip_building");
        write_building_file(&building_path);
        let building = load_building_description(&building_path).unwrap();
        let table = HazusTable::parse(&synthetic_table_text(0.2, 0.3, 0.06)).unwrap();
        let record = generate_model(&building, &table).unwrap();

        let model_path = temp_path("roundtrip_model");
        save_model(&record, &model_path).unwrap();
        let loaded = load_model(&model_path).unwrap();
        assert_eq!(record, loaded);

        let _ = fs::remove_file(&building_path);
        let _ = fs::remove_file(&model_path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let table = HazusTable::parse(&synthetic_table_text(0.2, 0.3, 0.06)).unwrap();
        let building = crate::building::BuildingDescription {
            struc_type: "W1".to_string(),
            year: 1980,
            s_height: 3.0,
            no_stories: 1,
            area: 100.0,
        };
        let record = generate_model(&building, &table).unwrap();

        let path = temp_path("atomic");
        let tmp_path = path.with_extension("json.tmp");
        save_model(&record, &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path.exists());

        let _ = fs::remove_file(&path);
    }
}
