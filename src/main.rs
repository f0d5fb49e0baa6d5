use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use storeshots::{FontBook, GeneratorConfig, Screen};

#[derive(Parser, Debug)]
#[command(name = "storeshots", about = "App Store screenshot generator", version)]
struct Args {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug details (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the mockup screens for each device
    Render {
        #[arg(long)]
        out: Option<PathBuf>,
        /// Device prefix to render, repeatable (default: all)
        #[arg(long = "device")]
        devices: Vec<String>,
        /// Screen to render, repeatable (default: all)
        #[arg(long = "screen")]
        screens: Vec<Screen>,
    },
    /// Letterbox existing screenshots to the configured target size
    Normalize {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the configured devices and the available screens
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    match args.command {
        Command::Render { out, devices, screens } => {
            if let Some(out) = out {
                config.output_dir = out;
            }
            let fonts = FontBook::load(&config.font_resolver());
            let written = storeshots::render_all(&config, &fonts, &devices, &screens)
                .context("rendering screenshots")?;
            for path in &written {
                println!("  Saved: {}", path.display());
            }
            println!("\nAll screenshots saved to: {}", config.output_dir.display());
            println!("\nUpload to App Store Connect:");
            println!("  iPhone 6.7\" display: iphone_*.png");
            println!("  iPad 13\" display:    ipad_*.png");
        }
        Command::Normalize { input, out } => {
            if let Some(input) = input {
                config.normalize.input_dir = input;
            }
            if let Some(out) = out {
                config.normalize.output_dir = out;
            }
            let report = storeshots::normalize::normalize_batch(&config.normalize)
                .context("normalizing screenshots")?;
            for path in &report.written {
                println!("Saved: {}", path.display());
            }
            for (path, err) in &report.failed {
                println!("Error processing {}: {}", path.display(), err);
            }
            println!(
                "\nDone! {} of {} screenshots saved to: {}",
                report.written.len(),
                config.normalize.files.len(),
                config.normalize.output_dir.display()
            );
        }
        Command::List => {
            if config.devices.is_empty() {
                bail!("no devices configured");
            }
            println!("Devices:");
            for d in &config.devices {
                let (lw, lh) = d.logical_size();
                println!("  {:<8} {}x{} @{}x ({}x{} pt)", d.prefix, d.width, d.height, d.scale, lw, lh);
            }
            println!("Screens:");
            for screen in Screen::ALL {
                let tab = if screen.active_tab().is_some() { "" } else { " (no tab bar)" };
                println!("  {}{}", screen, tab);
            }
        }
    }
    Ok(())
}
