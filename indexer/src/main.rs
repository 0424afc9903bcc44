use anyhow::Result;
use clap::{Parser, Subcommand};
use linkrank_core::EngineConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod loader;
mod shell;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index a directory of linked text files and rank them with PageRank", long_about = None)]
struct Cli {
    /// JSON engine configuration; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// PageRank damping factor
    #[arg(long, global = true)]
    damping: Option<f64>,
    /// PageRank iterations
    #[arg(long, global = true)]
    iterations: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the documents containing a word, most important first
    Search {
        /// Directory holding the .txt documents
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long)]
        word: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the globally most important documents
    Top {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, default_value_t = 5)]
        n: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Corpus statistics
    Stats {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Interactive menu
    Shell {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let config = engine_config(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search { dir, word, json } => {
            let (engine, _) = loader::load_dir(&dir, config)?;
            let outcome = engine.search(&word)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
            } else {
                shell::print_outcome(&outcome, &mut out)?;
            }
        }
        Commands::Top { dir, n, json } => {
            let (engine, _) = loader::load_dir(&dir, config)?;
            let top = engine.top_documents(n)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&top)?)?;
            } else {
                for d in top {
                    writeln!(out, "{}\t{:.4}\t{}", d.doc_id, d.score, d.name)?;
                }
            }
        }
        Commands::Stats { dir, json } => {
            let (engine, report) = loader::load_dir(&dir, config)?;
            let stats = engine.stats()?;
            if json {
                let v = serde_json::json!({ "stats": stats, "load": report });
                writeln!(out, "{}", serde_json::to_string_pretty(&v)?)?;
            } else {
                shell::print_stats(&stats, &mut out)?;
                if report.links_dropped > 0 {
                    writeln!(out, "Dropped links: {}", report.links_dropped)?;
                }
            }
        }
        Commands::Shell { dir } => {
            let (mut engine, _) = loader::load_dir(&dir, config)?;
            let stdin = io::stdin();
            shell::run(&mut engine, &mut stdin.lock(), &mut out)?;
        }
    }
    Ok(())
}

fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = cli.damping {
        config.damping = d;
    }
    if let Some(k) = cli.iterations {
        config.iterations = k;
    }
    config.validate()?;
    Ok(config)
}
