//! Reads a rendered post page from stdin and writes the extraction result as
//! JSON to stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

use rs_postextract::{extract, Error};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let html = match read_stdin() {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, "failed to read page from stdin");
            std::process::exit(1);
        }
    };

    let result = extract(&html);

    match serde_json::to_string(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize result");
            std::process::exit(1);
        }
    }
}

fn read_stdin() -> Result<String, Error> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| Error::Parse(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
