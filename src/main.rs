use anyhow::{bail, Result};
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod table_display;

use cli::{Cli, Commands, ConfigCommands, FetchArgs};
use scriptblox::api::ScriptbloxClient;
use scriptblox::config::config::{Config, OutputFormat};
use scriptblox::error::ScriptbloxError;
use scriptblox::utils::logging::init_tracing;
use table_display::{display_scripts, print_json};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_path) = init_tracing(cli.verbose, cli.log_file) {
        eprintln!("Debug logs will be written to: {}", log_path.display());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<ScriptbloxError>()
                .map(ScriptbloxError::exit_code)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.base_url.as_deref())?;

    match cli.command {
        Commands::Fetch(args) => fetch(&config, &args),
        Commands::Config { command } => config_command(&config, command),
    }
}

/// File, then environment, then the command line
fn load_config(base_url: Option<&str>) -> Result<Config> {
    let mut config = Config::load().map_err(|e| ScriptbloxError::Config {
        message: format!("{e:#}"),
    })?;
    config.apply_env();
    if let Some(url) = base_url {
        config.api.base_url = url.to_string();
    }
    tracing::debug!(target: "config", "Using API at {}", config.api.base_url);
    Ok(config)
}

fn fetch(config: &Config, args: &FetchArgs) -> Result<()> {
    let client = ScriptbloxClient::from_config(config)?;
    let params = args.to_params();

    if args.dry_run {
        params.validate()?;
        println!("{}", client.fetch_url(&params)?);
        return Ok(());
    }

    let scripts = client.fetch_scripts(&params)?;

    if args.json || config.display.output == OutputFormat::Json {
        print_json(&scripts)?;
    } else {
        display_scripts(&scripts, &config.display);
    }
    Ok(())
}

fn config_command(config: &Config, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", Config::get_config_path()?.display());
        }
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigCommands::Init { force } => {
            let path = Config::get_config_path()?;
            if path.exists() && !force {
                bail!(ScriptbloxError::Config {
                    message: format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ),
                });
            }
            Config::write_default_to(&path)?;
            println!("Configuration file created at: {}", path.display());
        }
    }
    Ok(())
}
