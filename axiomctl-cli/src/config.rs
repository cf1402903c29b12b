use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axiomctl_core::AxiomConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file populated with defaults
    Init(InitArgs),
    /// Print the configuration as TOML, with --bin-dir applied
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, config_path: &Path, bin_dir: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args, config_path),
        ConfigCommands::Show => run_show(config_path, bin_dir),
        ConfigCommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn run_init(args: InitArgs, config_path: &Path) -> Result<()> {
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    AxiomConfig::default()
        .save_to(config_path)
        .context("Failed to write config file")?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show(config_path: &Path, bin_dir: Option<&Path>) -> Result<()> {
    let mut config = AxiomConfig::load_from(config_path).context("Failed to load config")?;
    if let Some(dir) = bin_dir {
        config.bin_dir = Some(PathBuf::from(dir));
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
