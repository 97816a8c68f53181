use heatmap_migrate::api::{MigrationConfig, PanelModel, migrate_dashboard, migrate_panels};
use heatmap_migrate::telemetry::init_default_tracing;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "usage: heatmap_migrate_tool <panel|dashboard> --input <path> --output <path> [--config <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Panel,
    Dashboard,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let input: Value = serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    match args.command {
        CommandKind::Panel => {
            let migrated = migrate_panel_input(input, &config)?;
            write_json(&args.output, &migrated)
        }
        CommandKind::Dashboard => {
            let mut dashboard = input;
            let report = migrate_dashboard(&mut dashboard, &config).map_err(|err| err.to_string())?;
            write_json(&args.output, &dashboard)?;
            eprintln!(
                "migrated dashboard: converted={} unchanged={} skipped={}",
                report.converted, report.unchanged, report.skipped
            );
            Ok(())
        }
    }
}

/// Accepts a single panel object or an array of panels.
fn migrate_panel_input(input: Value, config: &MigrationConfig) -> Result<Value, String> {
    let (panels, is_batch) = match input {
        Value::Array(items) => (items, true),
        single @ Value::Object(_) => (vec![single], false),
        _ => return Err("panel input must be an object or an array of objects".to_owned()),
    };

    let mut models = panels
        .into_iter()
        .map(PanelModel::from_json_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.to_string())?;

    let migrations = migrate_panels(&models, config);
    let mut migrated = Vec::with_capacity(models.len());
    for (model, migration) in models.iter_mut().zip(migrations) {
        model.apply_migration(migration).map_err(|err| err.to_string())?;
        migrated.push(model.to_json_value().map_err(|err| err.to_string())?);
    }

    if is_batch {
        Ok(Value::Array(migrated))
    } else {
        migrated
            .pop()
            .ok_or_else(|| "panel input produced no output".to_owned())
    }
}

fn load_config(path: Option<&Path>) -> Result<MigrationConfig, String> {
    let Some(path) = path else {
        return Ok(MigrationConfig::default());
    };
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
    MigrationConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    fs::write(path, format!("{json}\n"))
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("panel") => CommandKind::Panel,
        Some("dashboard") => CommandKind::Dashboard,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
        config,
    })
}
