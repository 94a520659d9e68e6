//! # Foundation Layout CLI
//!
//! Terminal interface for the foundation rebar layout engine: print
//! metrics, list the rebar grid, write plan/section drawings as SVG, or
//! enter parameters interactively.
//!
//! Parameter flags take raw text and go through the same lenient parse
//! and clamp as the GUI fields, so `--depth 999999` stores 5000.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use foundation_core::config::{parse_lenient, FoundationConfig, Parameter};
use foundation_core::drawing::drawing_for;
use foundation_core::metrics::{plan_grid, FoundationMetrics};
use foundation_core::section::SectionLayout;
use foundation_core::svg::{render_svg, SvgOptions};
use foundation_core::view::ViewMode;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "foundation")]
#[command(about = "Foundation rebar layout: metrics, grid listing and SVG drawings")]
struct Cli {
    #[command(flatten)]
    params: ParamArgs,

    #[command(subcommand)]
    command: Command,
}

/// Design parameters in millimetres. Values are clamped into range.
#[derive(Args)]
struct ParamArgs {
    /// JSON file with starting values (missing keys take defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    length: Option<String>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    width: Option<String>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    depth: Option<String>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    wall_thickness: Option<String>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    rebar_spacing: Option<String>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    rebar_diameter: Option<String>,
    #[arg(long = "cover", global = true, allow_hyphen_values = true)]
    cover_concrete: Option<String>,
}

impl ParamArgs {
    fn overrides(&self) -> [(Parameter, Option<&str>); 7] {
        [
            (Parameter::Length, self.length.as_deref()),
            (Parameter::Width, self.width.as_deref()),
            (Parameter::Depth, self.depth.as_deref()),
            (Parameter::WallThickness, self.wall_thickness.as_deref()),
            (Parameter::RebarSpacing, self.rebar_spacing.as_deref()),
            (Parameter::RebarDiameter, self.rebar_diameter.as_deref()),
            (Parameter::CoverConcrete, self.cover_concrete.as_deref()),
        ]
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print volume, bar counts and total bar length
    Metrics(OutputArgs),
    /// List every bar of the plan grid
    Grid(OutputArgs),
    /// Write a plan or section drawing as SVG
    Render(RenderArgs),
    /// Prompt for each parameter, then print metrics
    Interactive,
}

#[derive(Args)]
struct OutputArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// plan or section
    #[arg(long, default_value = "plan")]
    view: String,
    #[arg(long)]
    out: PathBuf,
    /// Document width in pixels
    #[arg(long, default_value_t = 900.0)]
    width_px: f64,
    /// Omit the legend
    #[arg(long)]
    no_legend: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli.params)?;

    match cli.command {
        Command::Metrics(args) => print_metrics(&config, args.json),
        Command::Grid(args) => print_grid(&config, args.json),
        Command::Render(args) => render(&config, args),
        Command::Interactive => interactive(config),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Defaults, then the JSON file, then flags
fn load_config(params: &ParamArgs) -> Result<FoundationConfig> {
    let mut config = match &params.config {
        Some(path) => read_config_file(path)?,
        None => FoundationConfig::default(),
    };

    for (param, text) in params.overrides() {
        if let Some(text) = text {
            let next = config.with_input(param, text);
            if next.get(param) != parse_lenient(text) {
                warn!(
                    parameter = param.key(),
                    input = text,
                    stored = next.get(param),
                    "input adjusted"
                );
            }
            config = next;
        }
    }
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<FoundationConfig> {
    let config = FoundationConfig::load(path).context("failed to load config file")?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn print_metrics(config: &FoundationConfig, json: bool) -> Result<()> {
    let metrics = FoundationMetrics::from_config(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    let section = SectionLayout::from_config(config);
    println!("═══════════════════════════════════════");
    println!("  FOUNDATION");
    println!("═══════════════════════════════════════");
    for (param, value) in config.values() {
        println!("  {:<16} {:>8.0} mm", param.label(), value);
    }
    println!();
    println!("Quantities:");
    println!("  Concrete volume:   {} m³", metrics.volume_display());
    println!(
        "  Rebar count:       {} ({} horizontal, {} vertical)",
        metrics.rebar_count, metrics.horizontal_count, metrics.vertical_count
    );
    println!("  Total rebar:       {} m (single layer)", metrics.total_length_display());
    println!(
        "  Section:           {} layers x {} bars, {} stirrups",
        section.layer_count(),
        section.bars_per_layer(),
        section.stirrups.len()
    );
    Ok(())
}

fn print_grid(config: &FoundationConfig, json: bool) -> Result<()> {
    let grid = plan_grid(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    println!("{:>4}  {:<10} {:>9} {:>9} {:>9} {:>9}", "#", "kind", "x1", "y1", "x2", "y2");
    for (i, bar) in grid.iter().enumerate() {
        println!(
            "{:>4}  {:<10} {:>9.1} {:>9.1} {:>9.1} {:>9.1}",
            i + 1,
            bar.kind.display_name(),
            bar.x1,
            bar.y1,
            bar.x2,
            bar.y2
        );
    }
    println!("{} bars", grid.len());
    Ok(())
}

fn render(config: &FoundationConfig, args: RenderArgs) -> Result<()> {
    let view: ViewMode = args.view.parse()?;
    let options = SvgOptions {
        width_px: args.width_px.max(100.0),
        legend: !args.no_legend,
        ..SvgOptions::default()
    };

    let drawing = drawing_for(view, config);
    let svg = render_svg(&drawing, &options);
    std::fs::write(&args.out, svg)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(
        path = %args.out.display(),
        view = %view,
        elements = drawing.elements.len(),
        "SVG written"
    );
    Ok(())
}

fn prompt_text(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn interactive(mut config: FoundationConfig) -> Result<()> {
    println!("Foundation Layout - interactive session");
    println!("Press Enter to keep the current value.");
    println!();

    for param in Parameter::ALL {
        let range = param.range();
        let prompt = format!(
            "{} (mm, {:.0}-{:.0}, step {:.0}) [{:.0}]: ",
            param.label(),
            range.min,
            range.max,
            range.step,
            config.get(param)
        );
        match prompt_text(&prompt) {
            Some(text) if !text.is_empty() => {
                config = config.with_input(param, &text);
                println!("  -> {:.0} mm", config.get(param));
            }
            Some(_) => {}
            None => break,
        }
    }

    println!();
    print_metrics(&config, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_flags_are_clamped() {
        let cli = parse(&[
            "foundation",
            "metrics",
            "--depth",
            "999999",
            "--rebar-diameter",
            "-5",
            "--length",
            "abc",
        ]);
        let config = load_config(&cli.params).unwrap();
        assert_eq!(config.depth(), 5000.0);
        assert_eq!(config.rebar_diameter(), 6.0);
        assert_eq!(config.length(), 1000.0);
        assert_eq!(config.width(), 4000.0);
    }

    #[test]
    fn test_flags_before_subcommand() {
        let cli = parse(&["foundation", "--cover", "75", "grid", "--json"]);
        let config = load_config(&cli.params).unwrap();
        assert_eq!(config.cover_concrete(), 75.0);
        assert!(matches!(cli.command, Command::Grid(OutputArgs { json: true })));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["foundation", "--config", "/nonexistent/foundation.json", "metrics"]);
        assert!(load_config(&cli.params).is_err());
    }

    #[test]
    fn test_render_rejects_unknown_view() {
        let cli = parse(&["foundation", "render", "--view", "iso", "--out", "unused.svg"]);
        let config = load_config(&cli.params).unwrap();
        match cli.command {
            Command::Render(args) => assert!(render(&config, args).is_err()),
            _ => panic!("expected render command"),
        }
    }
}
