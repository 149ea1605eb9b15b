use std::fs;
use std::path::{Path, PathBuf};

use timeline_rs::api::{TimelineEngine, TimelineEngineConfig, sample_declarations};
use timeline_rs::core::EventDeclaration;

const USAGE: &str = "usage: timeline-layout [--input <declarations.json>] [--config <config.json>] [--zoom <factor>]... [--output <path>]";

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    zoom_factors: Vec<f64>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = timeline_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => TimelineEngineConfig::from_json_str(&read_file(path)?)
            .map_err(|err| err.to_string())?,
        None => TimelineEngineConfig::default(),
    };

    let declarations: Vec<EventDeclaration> = match &args.input {
        Some(path) => serde_json::from_str(&read_file(path)?)
            .map_err(|err| format!("invalid declarations json: {err}"))?,
        None => sample_declarations(),
    };

    let mut engine =
        TimelineEngine::with_declarations(config, declarations).map_err(|err| err.to_string())?;
    for factor in &args.zoom_factors {
        engine.zoom_by(*factor);
    }

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--zoom" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --zoom".to_owned())?;
                let factor = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --zoom factor `{value}`: {err}"))?;
                parsed.zoom_factors.push(factor);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
