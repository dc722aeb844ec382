//! Apply hue, saturation, contrast and brightness changes to colors
//!
//! Usage: adjust [--hue <radians>] [--saturation <x>] [--contrast <x>]
//!               [--brightness <offset>] [--config <file.json>] <color>...

use colorops::{Adjustment, Color, OpsConfig, RgbColor, YuvColor};
use std::{env, path::Path, process};

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize tracing");

    let args: Vec<String> = env::args().collect();

    let mut adjustment = Adjustment::default();
    let mut colors = Vec::new();

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--hue" | "--saturation" | "--contrast" | "--brightness" => {
                i += 1;
                let value = parse_number(arg, args.get(i));
                adjustment = match arg {
                    "--hue" => adjustment.hue_offset(value),
                    "--saturation" => adjustment.saturation(value),
                    "--contrast" => adjustment.contrast(value),
                    _ => adjustment.brightness(value),
                };
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                };
                match OpsConfig::from_json_file(Path::new(path)) {
                    Ok(config) => adjustment = config.adjustment,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                println!("Usage: {} [--hue R] [--saturation X] [--contrast X] [--brightness B] [--config FILE] <COLOR>...", args[0]);
                process::exit(0);
            }
            _ => colors.push(arg.to_string()),
        }
        i += 1;
    }

    if colors.is_empty() {
        eprintln!("Error: No colors provided");
        process::exit(1);
    }

    tracing::info!(?adjustment, "applying adjustment");

    for text in &colors {
        let color: RgbColor = match text.parse() {
            Ok(color) => color,
            Err(e) => {
                eprintln!("{}: {}", text, e);
                process::exit(1);
            }
        };

        match color.adjust(&adjustment) {
            Ok(adjusted) => println!("{} -> {}  {}", color, adjusted, YuvColor::from_color(&adjusted)),
            Err(e) => eprintln!("{}: {}", color, e),
        }
    }
}

fn parse_number(flag: &str, value: Option<&String>) -> f64 {
    match value.map(|v| v.parse::<f64>()) {
        Some(Ok(number)) => number,
        _ => {
            eprintln!("Error: {} requires a number", flag);
            process::exit(1);
        }
    }
}
