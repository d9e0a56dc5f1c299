//! vessel CLI - build, recompute and export teapot blueprints
//!
//! Documents are JSON files; exports are written under the configured
//! output directory unless `-o` is given.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vessel::{
    build_blueprint, export, recompute, Blueprint, ExportFormat, ExportSettings, MaterialSuggestion,
};

#[derive(Parser)]
#[command(name = "vessel")]
#[command(about = "Parametric teapot blueprints with DXF/OBJ/JSON export", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new blueprint scaled to a cup count
    New {
        /// Target capacity in US cups (1-12)
        #[arg(long, default_value_t = 4.0)]
        cups: f64,
        /// JSON file with a list of material suggestions
        #[arg(long)]
        suggestions: Option<PathBuf>,
        /// Analysis note to attach (repeatable)
        #[arg(long = "note")]
        notes: Vec<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recompute derived fields of an edited blueprint
    Recompute {
        /// Input blueprint JSON
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a blueprint as json, dxf, obj or report
    Export {
        /// Input blueprint JSON
        input: PathBuf,
        /// Output format
        #[arg(short, long)]
        format: String,
        /// Output file (default: <directory>/<stem>_<timestamp>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display information about a blueprint
    Info {
        /// Path to the blueprint JSON
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => ExportSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ExportSettings::default(),
    };

    match cli.command {
        Commands::New {
            cups,
            suggestions,
            notes,
            output,
        } => new_blueprint(cups, suggestions.as_deref(), notes, output.as_deref())?,
        Commands::Recompute { input, output } => recompute_file(&input, output.as_deref())?,
        Commands::Export {
            input,
            format,
            output,
        } => export_file(&input, &format, output.as_deref(), &settings)?,
        Commands::Info { file } => show_info(&file)?,
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for piped documents.
fn init_logging(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn read_blueprint(path: &Path) -> Result<Blueprint> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Blueprint::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

fn write_document(blueprint: &Blueprint, output: Option<&Path>) -> Result<()> {
    let json = blueprint.to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote blueprint to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn new_blueprint(
    cups: f64,
    suggestions: Option<&Path>,
    notes: Vec<String>,
    output: Option<&Path>,
) -> Result<()> {
    let incoming: Vec<MaterialSuggestion> = match suggestions {
        Some(path) => {
            let json =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing material suggestions in {}", path.display()))?
        }
        None => Vec::new(),
    };
    debug!(suggestions = incoming.len(), "building blueprint");

    let blueprint = build_blueprint(cups, &incoming, notes)?;
    write_document(&blueprint, output)
}

fn recompute_file(input: &Path, output: Option<&Path>) -> Result<()> {
    let blueprint = recompute(&read_blueprint(input)?)?;
    write_document(&blueprint, output)
}

fn export_file(
    input: &Path,
    format: &str,
    output: Option<&Path>,
    settings: &ExportSettings,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let blueprint = read_blueprint(input)?;
    let artifact = export(&blueprint, format, settings)?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
            let dir = PathBuf::from(&settings.output.directory);
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            dir.join(artifact.stamped_file_name(&stamp))
        }
    };

    fs::write(&path, &artifact.bytes).with_context(|| format!("writing {}", path.display()))?;
    println!(
        "Exported {} ({} bytes, {}) to {}",
        artifact.format,
        artifact.bytes.len(),
        artifact.media_type,
        path.display()
    );
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let doc = read_blueprint(file)?;
    let d = &doc.dimensions;

    println!("vessel blueprint: {}", file.display());
    println!("  Title: {} ({})", doc.title, doc.design_version);
    println!("  Target: {:.2} cups ({:.1} ml)", d.cups_target, d.capacity_target_ml);
    println!("  Estimated capacity: {:.1} ml", d.estimated_capacity_ml);
    println!("  Overall height: {:.2} {}", d.overall_height_mm, doc.units);
    println!("  Body max diameter: {:.2} {}", d.body_max_diameter_mm, doc.units);
    println!("  Head top diameter: {:.2} {}", d.head_top_diameter_mm, doc.units);

    if !doc.materials.is_empty() {
        println!("\nMaterials:");
        for m in &doc.materials {
            println!(
                "  {}: {} ({:.0}%)",
                m.part_key,
                m.effective_material(),
                m.confidence * 100.0
            );
        }
    }

    if !doc.bom.is_empty() {
        println!("\nBOM:");
        for item in &doc.bom {
            println!(
                "  {} x{}: {} - {:.1} g",
                item.part_name, item.quantity, item.material, item.mass_estimate_g
            );
        }
        println!("  Total mass: {:.1} g", vessel::total_mass_g(&doc.bom));
    }

    if let Err(e) = doc.validate() {
        println!("\nWarning: {}", e);
    }

    Ok(())
}
