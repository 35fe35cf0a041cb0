//! Command-line entry point.
//!
//! Reads a text file (typically an issue body dumped by CI), relocates every
//! media reference to permanent storage, and writes the rewritten text back.
//! The file is only touched when the whole transformation succeeds, so a
//! failed run leaves the input exactly as it was.

use amber_config::StorageSettings;
use amber_pipeline::{HttpFetcher, transform};
use amber_storage::backend::S3Backend;
use amber_storage::{AddressStyle, BackendHandle, Relocator};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "amber", version, about = "Relocate media references in submitted text to permanent storage")]
struct Args {
    /// Text file to transform in place
    file: PathBuf,

    /// Write the result here instead of back to the input file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&args.file).await?;
    let settings = StorageSettings::load()?;

    let backend: BackendHandle = Arc::new(S3Backend::new(
        "s3",
        &settings.bucket_name,
        settings.region(),
        Some(settings.endpoint_url.as_str()),
        &settings.access_key_id,
        &settings.secret_access_key,
    )?);
    let address = match &settings.custom_domain {
        Some(domain) => AddressStyle::CustomDomain(domain.clone()),
        None => AddressStyle::BucketHost {
            bucket: settings.bucket_name.clone(),
            host: settings.endpoint_host().to_string(),
        },
    };
    let relocator = Relocator::new(backend, address);
    let fetcher = HttpFetcher::new()?;

    let transformed = transform(&content, &fetcher, &relocator).await?;

    let target = args.output.as_ref().unwrap_or(&args.file);
    if transformed == content {
        info!(file = %args.file.display(), "no media references; file unchanged");
        if let Some(output) = &args.output {
            fs::write(output, &transformed).await?;
        }
    } else {
        fs::write(target, &transformed).await?;
        info!(file = %target.display(), "rewrote media references");
    }
    Ok(())
}
