use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pipe_app::{AppResult, RenderOptions, diagram_service, length_service, project_service};

#[derive(Parser)]
#[command(name = "pipe-cli")]
#[command(about = "Pipe schematic CLI - render pipe connectivity as a text tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate snapshot syntax and connectivity
    Validate {
        /// Path to the snapshot file (YAML, or JSON by extension)
        snapshot_path: PathBuf,
    },
    /// Render the pipe system tree
    Diagram {
        /// Path to the snapshot file (YAML, or JSON by extension)
        snapshot_path: PathBuf,
        /// Reject non-finite or non-positive lengths and diameters
        #[arg(long)]
        strict: bool,
        /// Write the diagram to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Total pipe length in feet, inches and metres
    Length {
        /// Path to the snapshot file (YAML, or JSON by extension)
        snapshot_path: PathBuf,
        /// Reject non-finite or non-positive lengths and diameters
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { snapshot_path } => cmd_validate(&snapshot_path),
        Commands::Diagram {
            snapshot_path,
            strict,
            output,
        } => cmd_diagram(&snapshot_path, RenderOptions { strict }, output.as_deref()),
        Commands::Length {
            snapshot_path,
            strict,
        } => cmd_length(&snapshot_path, RenderOptions { strict }),
    }
}

fn cmd_validate(snapshot_path: &Path) -> AppResult<()> {
    println!("Validating snapshot: {}", snapshot_path.display());
    let snapshot = project_service::load_snapshot(snapshot_path)?;
    let graph = project_service::validate_snapshot(&snapshot)?;
    let summary = project_service::summarize(&snapshot, &graph);

    println!("✓ Snapshot is valid");
    println!("  Name: {}", summary.name);
    println!(
        "  Pipes: {}, Fittings: {} ({} T, {} elbows)",
        summary.segment_count, summary.fitting_count, summary.tee_count, summary.elbow_count
    );
    Ok(())
}

fn cmd_diagram(snapshot_path: &Path, options: RenderOptions, output: Option<&Path>) -> AppResult<()> {
    let report = diagram_service::render_snapshot(snapshot_path, &options)?;
    let text = report.text();

    if let Some(path) = output {
        std::fs::write(path, &text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote diagram");
        println!(
            "✓ Wrote {} lines ({}/{} pipes in tree) to {}",
            report.lines.len(),
            report.drawn_count,
            report.summary.pipe_count,
            path.display()
        );
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn cmd_length(snapshot_path: &Path, options: RenderOptions) -> AppResult<()> {
    let summary = length_service::measure_snapshot(snapshot_path, &options)?;
    println!("=== PIPE LENGTH CALCULATION ===");
    println!();
    for line in summary.lines() {
        println!("{}", line);
    }
    Ok(())
}
