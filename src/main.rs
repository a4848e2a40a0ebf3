//! shipbin CLI - binary deployment utility
//!
//! Usage: shipbin <COMMAND>
//!
//! Commands:
//!   deploy  Push the artifact to the remote host and restart its service
//!   doctor  Check that the required local tools are installed
//!   config  Print the effective configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;

use shipbin::config::{load_or_default, with_env_overrides, Config, RemoteConfig};
use shipbin::deploy::{DeployEventSink, DeployOptions, DeployPlan, DeployUseCase};
use shipbin::error::ShipError;
use shipbin::output::{print_config_warnings, ConsoleEventSink, JsonEventSink};
use shipbin::runner::{tool_available, CommandSpec, SystemRunner};

/// shipbin - push a locally built binary to a remote host and restart its
/// user service
#[derive(Parser, Debug)]
#[command(name = "shipbin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output NDJSON events for CI
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Push the artifact to the remote host and restart its service
    Deploy {
        /// Path to a config file (defaults to ./shipbin.toml, then the
        /// user config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Filename of the locally built binary to deploy
        #[arg(long)]
        artifact: Option<String>,

        /// Remote account used for transfer and restart
        #[arg(long)]
        user: Option<String>,

        /// Remote host address
        #[arg(long)]
        host: Option<String>,

        /// Destination directory on the remote host
        #[arg(long)]
        path: Option<String>,

        /// Systemd user unit to restart
        #[arg(long)]
        service: Option<String>,

        /// Print the planned commands without running them
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check that rsync and ssh are installed locally
    Doctor,

    /// Print the effective configuration after all layers merge
    Config {
        /// Path to a config file (defaults to ./shipbin.toml, then the
        /// user config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            config,
            artifact,
            user,
            host,
            path,
            service,
            dry_run,
            yes,
        } => {
            let overrides = Config {
                artifact,
                service,
                remote: RemoteConfig { user, host, path },
            };
            let options = DeployOptions::new()
                .with_dry_run(dry_run)
                .with_assume_yes(yes)
                .with_json(cli.json)
                .with_verbose(cli.verbose > 0);
            cmd_deploy(config.as_deref(), overrides, &options)
        }
        Commands::Doctor => cmd_doctor(cli.json),
        Commands::Config { config } => cmd_config(config.as_deref(), cli.json),
    }
}

fn cmd_deploy(
    config_path: Option<&std::path::Path>,
    overrides: Config,
    options: &DeployOptions,
) -> Result<()> {
    let (file_config, warnings, source) = load_or_default(config_path)?;
    if !options.json {
        if let Some(source) = &source {
            print_config_warnings(source, &warnings);
        }
    }

    let config = overrides.or_else_from(&with_env_overrides(file_config));
    let plan = DeployPlan::from_config(&config)?;

    if options.dry_run {
        if options.json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "plan",
                    "command": "deploy",
                    "transfer": argv(&plan.transfer_command()),
                    "restart": argv(&plan.restart_command()),
                })
            );
        } else {
            println!("🔍 Dry run - would execute:");
            println!("   {}", plan.transfer_command().render());
            println!("   {}", plan.restart_command().render());
        }
        return Ok(());
    }

    if !options.assume_yes && !options.json && std::io::stdin().is_terminal() {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Deploy {} to {}?",
                plan.artifact,
                plan.destination()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            return Err(ShipError::Aborted.into());
        }
    }

    let use_case = DeployUseCase::new(SystemRunner::with_quiet_stdout(options.json));
    let sink: Box<dyn DeployEventSink> = if options.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(options.verbose))
    };

    use_case.execute(&plan, sink.as_ref())?;

    Ok(())
}

fn cmd_doctor(json: bool) -> Result<()> {
    let checks = [
        ("rsync", tool_available("rsync")),
        ("ssh", tool_available("ssh")),
    ];
    let all_present = checks.iter().all(|(_, present)| *present);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "doctor",
                "rsync": checks[0].1,
                "ssh": checks[1].1,
                "success": all_present,
            })
        );
    } else {
        println!("🩺 shipbin doctor");
        for (tool, present) in &checks {
            if *present {
                println!("  ✓ {} found", tool);
            } else {
                println!("  ✗ {} not found on PATH", tool);
            }
        }
        println!();
        if all_present {
            println!("🟢 All required tools present");
        } else {
            println!("🔴 Install the missing tools before deploying");
        }
    }

    if !all_present {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_config(config_path: Option<&std::path::Path>, json: bool) -> Result<()> {
    let (file_config, warnings, source) = load_or_default(config_path)?;
    if !json {
        if let Some(source) = &source {
            print_config_warnings(source, &warnings);
        }
    }

    let config = with_env_overrides(file_config);
    let source_display = source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    if json {
        let resolved = DeployPlan::from_config(&config).ok();
        println!(
            "{}",
            serde_json::json!({
                "event": "config",
                "source": source_display,
                "artifact": config.artifact,
                "service": resolved.as_ref().map(|p| p.service.clone()).or(config.service),
                "user": config.remote.user,
                "host": config.remote.host,
                "path": resolved.as_ref().map(|p| p.path.clone()).or(config.remote.path),
            })
        );
        return Ok(());
    }

    println!("📋 shipbin config");
    println!("Source: {}", source_display);
    println!();

    match DeployPlan::from_config(&config) {
        Ok(plan) => {
            println!("  artifact = {}", plan.artifact);
            println!("  service  = {}", plan.service);
            println!("  user     = {}", plan.user);
            println!("  host     = {}", plan.host);
            println!("  path     = {}", plan.path);
        }
        Err(_) => {
            let display = |v: &Option<String>| match v {
                Some(v) => v.clone(),
                None => "(unset)".to_string(),
            };
            println!("  artifact = {}", display(&config.artifact));
            println!("  service  = {}", display(&config.service));
            println!("  user     = {}", display(&config.remote.user));
            println!("  host     = {}", display(&config.remote.host));
            println!("  path     = {}", display(&config.remote.path));
            println!();
            println!("⚠ Incomplete: artifact, user and host are required to deploy");
        }
    }

    Ok(())
}

fn argv(command: &CommandSpec) -> Vec<String> {
    let mut argv = vec![command.program.clone()];
    argv.extend(command.args.iter().cloned());
    argv
}
