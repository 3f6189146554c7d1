//! PartGuard CLI - PC parts cart and compatibility checks from the command line.

mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use partguard::{Catalog, CheckOptions, CompatibilityResult, Part, RulesEngine};
use shell::Shell;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "partguard")]
#[command(about = "PC hardware parts cart and compatibility checker", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON catalog file to use instead of the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive numbered-menu shell (default)
    Shell,

    /// List catalog products
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Check a set of catalog parts for compatibility
    Check {
        /// Catalog part ids, in selection order
        #[arg(value_name = "ID", required = true)]
        ids: Vec<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Only run these rules (repeatable)
        #[arg(long = "rule", value_name = "RULE")]
        rules: Vec<String>,

        /// Exit with error code if the selection is incompatible
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// List available compatibility rules
    Rules {
        /// Show detailed rule descriptions
        #[arg(short, long)]
        details: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => handle_shell(cli.catalog.as_deref()),
        Commands::List { format } => handle_list(cli.catalog.as_deref(), format),
        Commands::Check {
            ids,
            format,
            rules,
            fail_on_issues,
        } => handle_check(cli.catalog.as_deref(), &ids, format, rules, fail_on_issues),
        Commands::Rules { details } => {
            handle_rules(details);
            Ok(0)
        }
    };

    let exit_code = match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(Catalog::seeded()),
    }
}

fn handle_shell(catalog_path: Option<&Path>) -> Result<i32> {
    let catalog = load_catalog(catalog_path)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut shell = Shell::new(&catalog);
    shell.run(stdin.lock(), &mut stdout)?;
    tracing::info!("Shell closed with {} items in cart", shell.cart().len());
    Ok(0)
}

fn handle_list(catalog_path: Option<&Path>, format: OutputFormat) -> Result<i32> {
    let catalog = load_catalog(catalog_path)?;
    match format {
        OutputFormat::Human => {
            println!("Products:");
            for (i, part) in catalog.parts().iter().enumerate() {
                println!("  {}: {}", i + 1, part);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.parts())?);
        }
    }
    Ok(0)
}

fn handle_check(
    catalog_path: Option<&Path>,
    ids: &[u32],
    format: OutputFormat,
    rules: Vec<String>,
    fail_on_issues: bool,
) -> Result<i32> {
    let catalog = load_catalog(catalog_path)?;
    let selection = ids
        .iter()
        .map(|id| catalog.find_by_id(*id).cloned())
        .collect::<Result<Vec<Part>, _>>()?;

    let engine = RulesEngine::with_options(&CheckOptions { rules })?;
    let issues = engine.evaluate(&selection);
    let result = CompatibilityResult::from_issues(&issues);
    tracing::info!(
        "Checked {} parts: {}",
        selection.len(),
        if result.ok { "compatible" } else { "incompatible" }
    );

    match format {
        OutputFormat::Human => {
            println!("Selection:");
            for part in &selection {
                println!("  {}", part);
            }
            shell::write_result(&result, &mut io::stdout())?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "ok": result.ok,
                "messages": result.messages,
                "issues": issues,
                "parts": selection.iter().map(Part::id).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if fail_on_issues && !result.ok {
        return Ok(1);
    }
    Ok(0)
}

fn handle_rules(details: bool) {
    println!("Available compatibility rules:\n");

    let engine = RulesEngine::with_default_rules();
    for rule in engine.rules() {
        println!("  {}", rule.id());
        println!("    {}", rule.name());
        if details {
            println!("    {}", rule.description());
        }
        println!();
    }
}
