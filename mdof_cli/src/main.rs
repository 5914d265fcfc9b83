//! # mdofgen - MDOF Model Generation Driver
//!
//! One-shot batch driver: reads a building description and the Hazus
//! reference table, derives the MDOF shear model, and writes it as JSON.
//!
//! ```text
//! mdofgen [building.json] [hazus-table.txt] [output.json]
//! ```
//!
//! Arguments default to `MDOF-shear.json`, `HazusData.txt`, and
//! `MDOF-model.json`. Any failure terminates the run with exit code 1
//! and no partial output.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info};

use mdof_core::errors::ModelResult;
use mdof_core::file_io::{load_building_description, load_hazus_table, save_model};
use mdof_core::model::{generate_model, ModelRecord};

const DEFAULT_BUILDING: &str = "MDOF-shear.json";
const DEFAULT_HAZUS: &str = "HazusData.txt";
const DEFAULT_OUTPUT: &str = "MDOF-model.json";

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let building_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_BUILDING.to_string()));
    let hazus_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_HAZUS.to_string()));
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));

    match run(&building_path, &hazus_path, &output_path) {
        Ok(record) => {
            print_summary(&record, &output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("model generation failed: {}", e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(
    building_path: &Path,
    hazus_path: &Path,
    output_path: &Path,
) -> ModelResult<ModelRecord> {
    info!("loading building description from {}", building_path.display());
    let building = load_building_description(building_path)?;

    info!("loading Hazus reference table from {}", hazus_path.display());
    let table = load_hazus_table(hazus_path)?;
    info!("reference table loaded: {} entries", table.len());

    let record = generate_model(&building, &table)?;

    save_model(&record, output_path)?;
    info!("model written to {}", output_path.display());

    Ok(record)
}

fn print_summary(record: &ModelRecord, output_path: &Path) {
    let data = &record.model_data;
    let stories = data.interstory_params.len();

    println!("═══════════════════════════════════════");
    println!("  MDOF SHEAR MODEL");
    println!("═══════════════════════════════════════");
    println!();
    println!("Stories:       {}", stories);
    println!("Damping ratio: {:.4}", data.damping_ratio);
    println!(
        "Damage criteria: [{:.4}, {:.4}, {:.4}, {:.4}]",
        data.damage_criteria[0],
        data.damage_criteria[1],
        data.damage_criteria[2],
        data.damage_criteria[3]
    );
    println!();
    println!("  story      K0              Sy             mass");
    for (floor, story) in data.floor_params.iter().zip(&data.interstory_params) {
        println!(
            "  {:>5}  {:>14.3}  {:>14.3}  {:>12.1}",
            story.story, story.k0, story.sy, floor.mass
        );
    }
    println!();
    println!("Model written to {}", output_path.display());
}
