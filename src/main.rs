use anyhow::{Context, Result};
use clap::Parser;
use pwa_icons::{Config, GeneratedIcon};
use std::path::PathBuf;

/// Generate the PNG icon set for a web app manifest.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory the icons are written to [default: current directory]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Font file to try before the configured ones (repeatable)
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Also write manifest-icons.json next to the images
    #[arg(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    let config = build_config(cli)?;

    pwa_icons::run(&config, |icon| println!("{}", created_line(icon)))
        .with_context(|| format!("failed to generate icons in {}", config.out_dir.display()))?;
    Ok(())
}

/// Confirmation printed for each written file.
fn created_line(icon: &GeneratedIcon) -> String {
    format!("Created {}", icon.file_name)
}

fn build_config(cli: Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(out_dir) = cli.out_dir {
        config.out_dir = out_dir;
    }
    if !cli.fonts.is_empty() {
        let mut font_paths = cli.fonts;
        font_paths.append(&mut config.font_paths);
        config.font_paths = font_paths;
    }
    config.manifest |= cli.manifest;
    Ok(config)
}
