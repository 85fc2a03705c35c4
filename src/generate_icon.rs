use anyhow::Result;
use clap::Parser;
use softlight_icons::config::Config;
use softlight_icons::generate::generate_all_icons;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-icon")]
#[command(about = "Draw the SoftLight phone icon at every App Store and device size", long_about = None)]
struct Cli {
    /// Output directory. Defaults to the configured generated_dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file to use instead of ~/.softlight-icons/settings.yaml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let output_dir = match cli.output {
        Some(dir) => dir,
        None => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load_or_default()?,
            };
            config.output.generated_dir
        }
    };

    let written = generate_all_icons(&output_dir)?;
    log::debug!("Generated {} icons", written.len());

    Ok(())
}
