use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use petty_cash_ledger::util::PettyCashLedgerUtil;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Compile a petty-cash expense sheet into ledger rows", long_about = None)]
struct Cli {
    /// Run configuration (RON)
    #[arg(long)]
    config: PathBuf,

    /// Expense sheet (CSV)
    #[arg(long)]
    input: PathBuf,

    /// Write here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    format: Format,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum, Debug)]
enum Format {
    #[default]
    Csv,
    Json,
    Preview,
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("could not install logger: {}", e);
    }

    let cli = Cli::parse();
    let util = PettyCashLedgerUtil::new();

    let rendered = match util.from_file(&cli.config, &cli.input).await {
        Ok(sheet) => match cli.format {
            Format::Csv => util.to_csv(&sheet),
            Format::Json => util.to_json(&sheet),
            Format::Preview => Ok(util.preview(&sheet)),
        },
        Err(e) => Err(e),
    };
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = tokio::fs::write(path, rendered).await {
                eprintln!("could not write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", rendered),
    }
}
