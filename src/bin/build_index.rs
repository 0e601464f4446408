use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bitacora::config::AppConfig;
use bitacora::ingest::builder::{build_corpus, write_corpus};

/// Regenerate the search corpus from the markdown content tree.
///
/// The previous corpus file is replaced wholesale; on any read or parse
/// failure nothing is written and the process exits non-zero.
#[derive(Parser, Debug)]
#[command(name = "bitacora-index", version, about)]
struct Args {
    /// Root directory of the markdown/MDX content tree.
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Output path for the corpus JSON.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitacora=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env();
    let content_dir = args.content_dir.unwrap_or(config.content_dir);
    let output = args.output.unwrap_or(config.index_path);

    match build_corpus(&content_dir).and_then(|docs| write_corpus(&docs, &output)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Index generation failed: {e}");
            eprintln!("bitacora-index: {e}");
            ExitCode::FAILURE
        }
    }
}
