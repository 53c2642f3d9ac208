use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use transit_router::catalog::TransitCatalog;
use transit_router::requests::{
    RequestDocument, RequestError, load_document, process_batch, read_document, write_responses,
};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the JSON responses
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Request processing failed");
            ExitCode::FAILURE
        }
    }
}

/// Read requests from the file named by the first argument, or stdin.
fn run() -> Result<(), RequestError> {
    let document: RequestDocument = match std::env::args_os().nth(1) {
        Some(path) => load_document(path)?,
        None => read_document(io::stdin().lock())?,
    };

    let catalog = TransitCatalog::new();
    let responses = process_batch(&catalog, document)?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_responses(&mut out, &responses)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
