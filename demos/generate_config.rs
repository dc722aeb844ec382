//! Generate a default colorops configuration file
//!
//! Creates a JSON config with all default parameters

use colorops::OpsConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = OpsConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Adjustment: hue {:+.3} rad, saturation x{:.2}, contrast x{:.2}, brightness {:+.2}",
                config.adjustment.hue_offset,
                config.adjustment.saturation_multiplier,
                config.adjustment.contrast_multiplier,
                config.adjustment.brightness_offset
            );
            let candidates: Vec<String> = config
                .contrast_candidates
                .iter()
                .map(|c| c.to_string())
                .collect();
            eprintln!("  Contrast candidates: {}", candidates.join(", "));
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
