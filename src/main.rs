use clap::Parser;
use env_logger::Env;
use skin_scan::{check, cli, config, error, preview, scanner};
use skin_scan_common::format_file_size;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = Config::load()?;

    match cli.command {
        Commands::Check { paths, recursive, json } => {
            let files = scanner::collect_files(&paths, recursive)?;
            if files.is_empty() {
                println!("No images found");
                return Ok(());
            }

            let report = check::check_files(&files, &config.policy, !json)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                check::print_report(&report);
            }

            let rejected = report.rejected_count();
            if rejected > 0 {
                return Err(error::SkinScanError::Rejected(rejected));
            }
        }

        Commands::Preview { file, output } => {
            let url = preview::data_url(&file, &config.policy)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, url)?;
                    println!("✔ Saved: {}", path.display());
                }
                None => println!("{}", url),
            }
        }

        Commands::Config { max_size, reset, show } => {
            let mut config = if reset { Config::default() } else { config };

            if let Some(bytes) = max_size {
                config.set_max_file_size(bytes)?;
            }
            if reset || max_size.is_some() {
                config.save()?;
                println!("✔ Config saved: {}", Config::config_path()?.display());
            }

            if show || (!reset && max_size.is_none()) {
                println!("Upload policy:");
                println!("  Accepted types: {}", config.policy.accepted_types.join(", "));
                println!(
                    "  Max file size: {} ({} bytes)",
                    format_file_size(config.policy.max_file_size),
                    config.policy.max_file_size
                );
            }
        }
    }

    Ok(())
}
