//! hapctl — operator utilities for the proxy controller.
//!
//! This file is intentionally thin: it sets up tracing, parses the command
//! line, and dispatches to the config/state crates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hap_config::{default_params, render_config, BaseParams, ProxyParams};
use hap_state::from_proxy;
use hap_testkit::{load_dump_json, InMemoryProxy};

#[derive(Parser)]
#[command(name = "hapctl")]
#[command(about = "Proxy controller utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap configuration commands
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Snapshot commands
    State {
        #[command(subcommand)]
        cmd: StateCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Render the base configuration document to stdout
    Render {
        /// Admin stats socket path
        #[arg(long, default_value = "/var/run/haproxy.sock")]
        socket_path: String,

        /// Dataplane user name
        #[arg(long)]
        dataplane_user: String,

        /// Dataplane password
        #[arg(long)]
        dataplane_pass: String,

        /// Parameter override ({scope}.{key}={value}); repeatable
        #[arg(long = "haproxy-param")]
        haproxy_params: Vec<String>,
    },

    /// Parse overrides and print the merged parameter set as JSON
    Params {
        /// Parameter override ({scope}.{key}={value}); repeatable
        #[arg(long = "haproxy-param")]
        haproxy_params: Vec<String>,
    },
}

#[derive(Subcommand)]
enum StateCmd {
    /// Assemble and validate a snapshot from a captured proxy dump
    Check {
        /// Path to a JSON proxy dump
        #[arg(long)]
        dump: String,

        /// Print the full snapshot as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Config { cmd } => match cmd {
            ConfigCmd::Render {
                socket_path,
                dataplane_user,
                dataplane_pass,
                haproxy_params,
            } => run_config_render(socket_path, dataplane_user, dataplane_pass, &haproxy_params),
            ConfigCmd::Params { haproxy_params } => run_config_params(&haproxy_params),
        },
        Commands::State { cmd } => match cmd {
            StateCmd::Check { dump, json } => run_state_check(&dump, json),
        },
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_config_render(
    socket_path: String,
    dataplane_user: String,
    dataplane_pass: String,
    flags: &[String],
) -> Result<()> {
    let overrides = ProxyParams::parse(flags)?;
    let cfg = render_config(&BaseParams {
        socket_path,
        dataplane_user,
        dataplane_pass,
        params: default_params().overridden_with(&overrides),
    });
    print!("{cfg}");
    Ok(())
}

fn run_config_params(flags: &[String]) -> Result<()> {
    let merged = default_params().overridden_with(&ProxyParams::parse(flags)?);
    println!(
        "{}",
        serde_json::to_string_pretty(&merged).context("serialize params")?
    );
    Ok(())
}

fn run_state_check(dump_path: &str, json: bool) -> Result<()> {
    let dump = load_dump_json(dump_path)?;
    let state = from_proxy(&InMemoryProxy::new(dump))
        .with_context(|| format!("snapshot check failed for {dump_path}"))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&state).context("serialize snapshot")?
        );
        return Ok(());
    }

    println!("frontends: {}", state.frontends.len());
    for fe in &state.frontends {
        let mut notes = Vec::new();
        if fe.log_target.is_some() {
            notes.push("log");
        }
        if fe.filter_spoe.is_some() {
            notes.push("spoe");
        }
        if fe.filter_compression.is_some() {
            notes.push("compression");
        }
        println!(
            "  {} bind {}:{} [{}]",
            fe.frontend.name,
            fe.bind.address,
            fe.bind.port.unwrap_or(0),
            notes.join(",")
        );
    }

    println!("backends: {}", state.backends.len());
    for be in &state.backends {
        println!(
            "  {} servers {} http-request-rules {}",
            be.backend.name,
            be.servers.len(),
            be.http_request_rules.as_ref().map_or(0, |r| r.len())
        );
    }

    tracing::info!("snapshot ok: {dump_path}");
    Ok(())
}
