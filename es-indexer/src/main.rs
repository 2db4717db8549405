use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use es_indexer::{read_document, AppError, Dependencies};

#[derive(Parser)]
#[command(name = "es-indexer")]
#[command(about = "Index a JSON document into a search engine", long_about = None)]
struct Cli {
    /// Index name
    index: String,

    /// Document type name
    doc_type: String,

    /// Document id
    id: String,

    /// Path to the JSON document to index
    #[arg(long, short)]
    file: PathBuf,

    /// Request creation of a new document
    #[arg(long)]
    force_create: bool,

    /// Search engine host (overrides ELASTICSEARCH_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Search engine port (overrides ELASTICSEARCH_PORT)
    #[arg(long)]
    port: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let document = read_document(&cli.file)?;
    let deps = Dependencies::new(cli.host, cli.port)?;

    let response = deps
        .indexer
        .index(&cli.index, &cli.doc_type, &cli.id, cli.force_create, &document)
        .await?;

    info!(
        id = %response.id,
        index = %response.index,
        created = response.created,
        "Document indexed"
    );
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Indexing failed");
            ExitCode::FAILURE
        }
    }
}
