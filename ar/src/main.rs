use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;

use assetrender::cli::{Cli, Command};
use assetrender::config::Config;
use assetrender::{Manifest, Renderer, asset_url, write_rendered};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("assetrender starting");

    match cli.command {
        Command::Render {
            manifest,
            template,
            static_root,
            out,
            missing_asset,
        } => {
            let manifest = manifest.unwrap_or_else(|| config.templates.manifest_path.clone());
            let renderer = Renderer::new(static_root.unwrap_or_else(|| config.static_url_root.clone()))
                .with_missing_asset(missing_asset.unwrap_or(config.missing_asset));
            let files = renderer.render(&manifest, &template)?;

            match out {
                Some(dir) => {
                    for path in write_rendered(&files, &dir)? {
                        println!("{} {}", "✓".green(), path.display());
                    }
                }
                None => {
                    for file in files {
                        print!("{}", file.contents);
                    }
                }
            }
        }
        Command::Build => {
            let renderer = Renderer::new(config.static_url_root.clone()).with_missing_asset(config.missing_asset);
            let mut files = Vec::new();
            for template in config.template_paths() {
                files.extend(renderer.render(&config.templates.manifest_path, template)?);
            }
            for path in write_rendered(&files, &config.templates.destination)? {
                println!("{} {}", "✓".green(), path.display());
            }
        }
        Command::Lookup { key, manifest } => {
            let path = manifest.unwrap_or_else(|| config.templates.manifest_path.clone());
            let manifest = Manifest::load(&path)?;
            let value = manifest
                .get(&key)
                .ok_or_else(|| eyre!("Asset '{}' not found in {}", key, path.display()))?;
            println!("{}", asset_url(&config.static_url_root, value));
        }
    }

    Ok(())
}
