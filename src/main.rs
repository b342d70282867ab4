use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tonelab::{
    AdjustmentKind, AdjustmentState, Photo, PresetRegistry, RustBackend, output, pipeline,
};

#[derive(Parser)]
#[command(name = "tonelab")]
#[command(about = "Non-destructive photo adjustment engine")]
#[command(long_about = "\
Non-destructive photo adjustment engine

Renders a source image through a named preset and/or explicit adjustment
values. Output always derives from the source in a single deterministic
pass — nothing is stacked, nothing is destructive.

Adjustments (see 'tonelab adjustments' for ranges):

  exposure brightness contrast highlights shadows saturation
  vibrance warmth sharpness clarity black_point vignette

Examples:

  tonelab presets
  tonelab apply photo.jpg out.jpg --preset 富士NC
  tonelab apply photo.jpg out.jpg --set exposure=0.3 --set warmth=12
  tonelab apply photo.jpg out.jpg --preset Sepia --save-state edit.json
  tonelab apply photo.jpg out.jpg --state edit.json --max-edge 1200")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Shared flag for commands that read preset packs.
#[derive(clap::Args, Clone)]
struct PresetPackArgs {
    /// Additional TOML preset pack to load alongside the builtins
    #[arg(long, value_name = "FILE")]
    presets_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List presets in display order
    Presets(PresetPackArgs),
    /// List the adjustment catalog: labels, ranges, defaults
    Adjustments,
    /// Render an image through a preset and/or explicit adjustments
    Apply(ApplyArgs),
}

#[derive(clap::Args)]
struct ApplyArgs {
    /// Source image (jpg, png, webp)
    source: PathBuf,
    /// Output image; format inferred from the extension
    output: PathBuf,
    /// Preset to start from (falls back to all-default adjustments)
    #[arg(long)]
    preset: Option<String>,
    /// Adjustment override, e.g. --set exposure=0.3 (repeatable, applied
    /// after the preset and any --state file)
    #[arg(long = "set", value_name = "KIND=VALUE")]
    set: Vec<String>,
    /// Replace the numeric adjustment state with a JSON sidecar
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,
    /// Write the final adjustment state to a JSON sidecar
    #[arg(long, value_name = "FILE")]
    save_state: Option<PathBuf>,
    /// Downscale so the longer edge fits this many pixels before rendering
    #[arg(long, value_name = "PIXELS")]
    max_edge: Option<u32>,
    #[command(flatten)]
    pack: PresetPackArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Presets(pack) => {
            let registry = load_registry(&pack)?;
            output::print_preset_list(registry.list());
        }
        Command::Adjustments => {
            output::print_catalog();
        }
        Command::Apply(args) => {
            let registry = load_registry(&args.pack)?;

            let preset = match &args.preset {
                Some(name) => Some(registry.find(name).ok_or_else(|| {
                    let known: Vec<&str> =
                        registry.list().iter().map(|p| p.name.as_str()).collect();
                    format!("unknown preset '{name}'. Known: {}", known.join(", "))
                })?),
                None => None,
            };

            let mut state = preset
                .map(|p| p.state())
                .unwrap_or_else(AdjustmentState::defaults);
            if let Some(path) = &args.state {
                state = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            }
            for pair in &args.set {
                let (kind, value) = parse_set_arg(pair)?;
                state.set(kind, value);
            }

            let mut photo = Photo::open(&args.source)?;
            if let Some(max_edge) = args.max_edge {
                photo = photo.scaled_down(max_edge);
            }

            let backend = RustBackend::new();
            let rendered = pipeline::render(&backend, &photo, preset, &state);
            rendered.save(&args.output)?;

            if let Some(path) = &args.save_state {
                std::fs::write(path, serde_json::to_string_pretty(&state)?)?;
            }

            output::print_apply_summary(
                &args.source.display().to_string(),
                rendered.dimensions(),
                args.preset.as_deref(),
                &state,
                &args.output.display().to_string(),
            );
        }
    }

    Ok(())
}

fn load_registry(pack: &PresetPackArgs) -> Result<PresetRegistry, Box<dyn std::error::Error>> {
    let mut registry = PresetRegistry::builtin();
    if let Some(path) = &pack.presets_file {
        registry.load_toml(&std::fs::read_to_string(path)?)?;
    }
    Ok(registry)
}

/// Parse one `--set kind=value` argument.
fn parse_set_arg(pair: &str) -> Result<(AdjustmentKind, f32), String> {
    let (kind, value) = pair
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got '{pair}'"))?;
    let kind: AdjustmentKind = kind.trim().parse()?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((kind, value))
}
