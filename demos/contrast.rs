//! Pick the most readable text color for one or more backgrounds
//!
//! Usage: contrast [--verbose] [--config <file.json>] <color>...

use colorops::{Color, OpsConfig, RgbColor};
use std::{env, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut config_path = None;
    let mut backgrounds = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => verbose = true,
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --config requires a file path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg => backgrounds.push(arg.to_string()),
        }
        i += 1;
    }

    init_tracing(verbose);

    if backgrounds.is_empty() {
        print_help(&args[0]);
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => OpsConfig::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => OpsConfig::default(),
    };

    for text in &backgrounds {
        let background: RgbColor = match text.parse() {
            Ok(color) => color,
            Err(e) => {
                eprintln!("{}: {}", text, e);
                process::exit(1);
            }
        };

        match background.contrast_color(&config.contrast_candidates) {
            Ok(best) => println!(
                "{} -> {} (contrast {:.2}:1, luminance {:.4})",
                background,
                best,
                background.contrast_ratio(&best),
                background.relative_luminance()
            ),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize tracing");
}

fn print_help(program: &str) {
    println!("colorops {}", colorops::version_string());
    println!();
    println!("Usage: {} [OPTIONS] <COLOR>...", program);
    println!();
    println!("Prints the candidate with the greatest contrast against each background.");
    println!("Colors may be written as #RGB, #RRGGBB, rgb(r, g, b) or rgb(r%, g%, b%).");
    println!();
    println!("Options:");
    println!("  --config <FILE>  Read contrast candidates from a JSON config");
    println!("  -v, --verbose    Log candidate selection");
    println!("  -h, --help       Show this help");
}
