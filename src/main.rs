use anyhow::Result;
use clap::{Parser, Subcommand};
use softlight_icons::batch::batch_resize_icons;
use softlight_icons::config::Config;
use softlight_icons::interactive::{run_interactive, StdinPrompt};
use softlight_icons::resize::try_resize_icon;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "softlight-icons")]
#[command(about = "Resize an app icon to every iOS icon size", long_about = None)]
struct Cli {
    /// Settings file to use instead of ~/.softlight-icons/settings.yaml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize a single image
    Resize {
        /// Source image (PNG, JPEG or WebP)
        file: PathBuf,
        /// Output directory. Defaults to the configured resized_dir
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Resize every supported image in a directory, one subdirectory per image
    Batch {
        /// Directory to scan for images
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,
        /// Output directory. Defaults to the configured resized_dir
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the default settings file
    InitConfig,
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Resize { file, output }) => {
            let config = load_config(cli.config.as_deref())?;
            let output_dir = output.unwrap_or(config.output.resized_dir);
            // Failures are reported by try_resize_icon and do not change the exit status
            try_resize_icon(&file, &output_dir);
        }
        Some(Commands::Batch { input_dir, output }) => {
            let config = load_config(cli.config.as_deref())?;
            let output_dir = output.unwrap_or_else(|| config.output.resized_dir.clone());
            batch_resize_icons(&input_dir, &output_dir, &config.discovery.extensions)?;
        }
        Some(Commands::InitConfig) => {
            init_config_command(cli.config.as_deref())?;
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            let mut prompt = StdinPrompt::new()?;
            run_interactive(
                Path::new("."),
                &config.output.resized_dir,
                &config.discovery.extensions,
                &mut prompt,
            )?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load_or_default(),
    }
}

fn init_config_command(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if path.exists() {
        println!("Config already exists at: {}", path.display());
        return Ok(());
    }

    Config::default().save_to(&path)?;
    println!("Created default config at: {}", path.display());
    Ok(())
}
