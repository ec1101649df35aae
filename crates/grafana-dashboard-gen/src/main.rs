// Numan Thabit 2025
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grafana_dashboard_gen::{generate, GeneratorConfig};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate the CPU usage Grafana dashboard JSON",
    rename_all = "kebab-case"
)]
struct Cli {
    /// Optional TOML file overriding the built-in output path and datasource
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the dashboard here instead of the configured path
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Datasource uid referenced by the panel and its query
    #[arg(long)]
    datasource_uid: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut config = match cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(uid) = cli.datasource_uid {
        config.datasource.uid = uid;
    }
    config.validate()?;

    let path = generate(&config).context("error generating dashboard")?;
    println!("Dashboard JSON generated successfully at: {}", path.display());
    Ok(())
}
