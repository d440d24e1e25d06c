//! mylib - native extension module for a scripting runtime
//!
//! CLI entry point for calling the module's functions from a shell.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mylib::{solve_with, Coefficients, DegeneratePolicy, MylibConfig, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mylib")]
#[command(version)]
#[command(about = "Table constructor and quadratic solver extension module", long_about = None)]
struct Cli {
    /// Config file (default: search for mylib.toml upward from cwd)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (overrides MYLIB_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a registered function with literal arguments
    Call {
        /// Qualified function name (e.g. mylib.solve)
        name: String,

        /// Arguments: nil, true, false, numbers, 'strings'
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Write or show the configuration
    Config {
        /// Write the default configuration to this path
        #[arg(long)]
        init: Option<PathBuf>,
    },

    /// List registered functions
    List,

    /// Solve a*x^2 + b*x + c = 0
    Solve {
        #[arg(allow_hyphen_values = true)]
        a: f64,

        #[arg(allow_hyphen_values = true)]
        b: f64,

        #[arg(allow_hyphen_values = true)]
        c: f64,

        /// Print the roots as JSON
        #[arg(long)]
        json: bool,

        /// Return IEEE inf/NaN for a == 0 instead of failing
        #[arg(long)]
        propagate: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => MylibConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => MylibConfig::load_from_cwd().context("Failed to load mylib.toml")?,
    };

    match cli.command {
        Commands::Call { name, args } => cmd_call(&config, &name, &args),
        Commands::Config { init } => cmd_config(&config, init.as_ref()),
        Commands::List => cmd_list(&config),
        Commands::Solve {
            a,
            b,
            c,
            json,
            propagate,
        } => cmd_solve(&config, Coefficients::new(a, b, c), json, propagate),
    }
}

/// Log to stderr, filtered by MYLIB_LOG (default: warn)
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("MYLIB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_solve(
    config: &MylibConfig,
    coeffs: Coefficients,
    json: bool,
    propagate: bool,
) -> Result<ExitCode> {
    let policy = if propagate {
        DegeneratePolicy::Propagate
    } else {
        config.solver.degenerate.into()
    };

    match solve_with(coeffs, policy) {
        Ok(roots) => {
            if json {
                let out = serde_json::json!({ "high": roots.high, "low": roots.low });
                println!("{}", out);
            } else {
                println!("{}", roots.high);
                println!("{}", roots.low);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json {
                println!("{}", serde_json::json!({ "error": e.message() }));
            } else {
                eprintln!("{}", e);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_call(config: &MylibConfig, name: &str, args: &[String]) -> Result<ExitCode> {
    let registry = mylib::open(config);
    let args: Vec<Value> = args.iter().map(|a| Value::parse_literal(a)).collect();

    let results = registry
        .call_by_name(name, &args)
        .with_context(|| format!("Call to {} failed", name))?;

    for value in &results {
        match value {
            Value::Table(_) => println!("{}", serde_json::to_string(value)?),
            _ => println!("{}", value),
        }
    }

    // nil followed by a message is a reported failure
    if matches!(results.first(), Some(Value::Nil)) && results.len() > 1 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_list(config: &MylibConfig) -> Result<ExitCode> {
    let registry = mylib::open(config);
    let entries = registry.list();
    if entries.is_empty() {
        bail!("No functions registered");
    }

    println!("{:<6} {:<20} {:<8} DESCRIPTION", "ID", "NAME", "CATEGORY");
    for entry in entries {
        println!(
            "{:<6} {:<20} {:<8} {}",
            entry.id,
            entry.signature.qualified_name(),
            entry.signature.category,
            entry.signature.description
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_config(config: &MylibConfig, init: Option<&PathBuf>) -> Result<ExitCode> {
    match init {
        Some(path) => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            MylibConfig::default()
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let content = toml::to_string_pretty(config).context("Failed to render config")?;
            print!("{}", content);
        }
    }
    Ok(ExitCode::SUCCESS)
}
