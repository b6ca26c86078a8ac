//! urdf CLI - inspect and validate robot description files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use urdf_model::{Collision, Joint, JointType, Model, Transform};
use urdf_parser::{parse_urdf_file, ParseOutput, ParserConfig};

#[derive(Parser)]
#[command(name = "urdf")]
#[command(about = "Inspect and validate robot description (URDF) files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Parser configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scaling factor applied to all linear dimensions
    #[arg(long, global = true)]
    scale: Option<f64>,

    /// Zero the mass and inertia of root links
    #[arg(long, global = true)]
    fixed_base: bool,

    /// Hand <sensor> elements to the sensor handler
    #[arg(long, global = true)]
    sensors: bool,

    /// Log per-element progress
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a summary of a robot description
    Info {
        /// Path to the .urdf file
        file: PathBuf,
    },
    /// Validate a robot description and report warnings
    Check {
        /// Path to the .urdf file
        file: PathBuf,
    },
    /// Dump the parsed model as JSON
    Dump {
        /// Path to the .urdf file
        file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "parser configuration");

    match &cli.command {
        Commands::Info { file } => show_info(file, &config)?,
        Commands::Check { file } => check(file, &config)?,
        Commands::Dump { file, output } => dump(file, output.as_deref(), &config)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration file values, overridden by command-line flags.
fn load_config(cli: &Cli) -> Result<ParserConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<ParserConfig>(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ParserConfig::default(),
    };

    if let Some(scale) = cli.scale {
        config.scaling = scale;
    }
    if cli.fixed_base {
        config.force_fixed_base = true;
    }
    if cli.sensors {
        config.parse_sensors = true;
    }
    config.validate()?;
    Ok(config)
}

fn parse(file: &Path, config: &ParserConfig) -> Result<ParseOutput> {
    parse_urdf_file(file, config).with_context(|| format!("Failed to parse {}", file.display()))
}

fn show_info(file: &Path, config: &ParserConfig) -> Result<()> {
    let ParseOutput { model, warnings } = parse(file, config)?;

    println!("robot: {} ({})", model.name, file.display());
    println!("  Links: {}", model.links.len());
    println!("  Joints: {}", model.joints.len());
    println!("  Materials: {}", model.materials.len());
    println!("  Root links: {}", model.root_link_names().join(", "));
    if let Some(deformable) = &model.deformable {
        println!("  Deformable: {}", deformable.name.as_deref().unwrap_or("unnamed"));
    }

    println!("\nLinks:");
    for link in &model.links {
        println!(
            "  {}: mass {}, {} visual(s), {} collision(s)",
            link.name,
            link.inertia.mass,
            link.visuals.len(),
            link.collisions.len()
        );
        for visual in &link.visuals {
            println!(
                "    visual {}{} (material: {})",
                visual.shape.geometry.kind_name(),
                offset_label(&visual.shape.origin),
                material_label(&model, visual)
            );
        }
        for collision in &link.collisions {
            println!("    {}", collision_label(collision));
        }
    }

    if !model.joints.is_empty() {
        println!("\nJoints:");
        for joint in &model.joints {
            println!("  {}", joint_label(joint));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}

fn material_label(model: &Model, visual: &urdf_model::Visual) -> String {
    match model.visual_material(visual) {
        Some(material) => {
            let mut label = material.name.clone();
            if visual.has_local_material() {
                label += " (inline)";
            }
            if material.has_texture() {
                label += &format!(", texture {}", material.texture_filename);
            }
            label
        }
        None if visual.material_name.is_empty() => "none".to_string(),
        None => format!("{} (unresolved)", visual.material_name),
    }
}

fn offset_label(origin: &Transform) -> String {
    if origin.is_identity(1e-9) {
        return String::new();
    }
    let t = origin.translation;
    format!(" at [{}, {}, {}]", t.x, t.y, t.z)
}

fn collision_label(collision: &Collision) -> String {
    let mut label = format!(
        "collision {}{}",
        collision.shape.geometry.kind_name(),
        offset_label(&collision.shape.origin)
    );
    if let Some(group) = collision.collision_group {
        label += &format!(", group {group}");
    }
    if let Some(mask) = collision.collision_mask {
        label += &format!(", mask {mask}");
    }
    if collision.force_concave() {
        label += ", concave";
    }
    label
}

/// One-line joint summary. Revolute and prismatic joints also show their range.
fn joint_label(joint: &Joint) -> String {
    let mut label = format!(
        "{} ({}): {} -> {}",
        joint.name,
        joint.joint_type.as_str(),
        joint.parent_link,
        joint.child_link
    );
    if matches!(joint.joint_type, JointType::Revolute | JointType::Prismatic) {
        if joint.limits.is_bounded() {
            label += &format!(", limits [{}, {}]", joint.limits.lower, joint.limits.upper);
        } else {
            label += ", unbounded";
        }
    }
    label
}

fn check(file: &Path, config: &ParserConfig) -> Result<()> {
    match parse_urdf_file(file, config) {
        Ok(output) => {
            for warning in &output.warnings {
                println!("warning: {}", warning);
            }
            println!(
                "{}: ok ({} links, {} joints, {} warnings)",
                file.display(),
                output.model.links.len(),
                output.model.joints.len(),
                output.warnings.len()
            );
            Ok(())
        }
        Err(e) => anyhow::bail!("{}: {:?} error: {}", file.display(), e.kind(), e),
    }
}

fn dump(file: &Path, output: Option<&Path>, config: &ParserConfig) -> Result<()> {
    let parsed = parse(file, config)?;
    let json = serde_json::to_string_pretty(&parsed.model)?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} to {}", parsed.model.name, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
