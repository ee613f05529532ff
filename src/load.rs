use std::fs;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::debug;

/// Read a file and parse it as a generic structured document. JSON documents
/// parse through the same reader, since JSON is a YAML subset.
pub fn load_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("no such file or directory \"{path}\""))?;
    serde_yaml::from_str(&text).with_context(|| format!("cannot parse \"{path}\""))
}

/// Load the input OpenAPI document. Unlike the auxiliary files there is no
/// recoverable branch: a failure here aborts the run.
pub fn load_document(path: &str) -> Result<Value> {
    let doc = load_file(path)?;
    debug!(path, "read OpenAPI document");
    Ok(doc)
}

/// Load one of the optional auxiliary files (config, sort, filter).
///
/// Failures are recoverable: the error is reported with the file kind and
/// path, the full cause chain at verbosity >= 1, and the layer contributes
/// nothing to the run.
pub fn load_optional<T: DeserializeOwned>(kind: &str, path: &str, verbose: u8) -> Option<T> {
    match load_file(path) {
        Ok(parsed) => {
            debug!(kind, path, "read auxiliary file");
            Some(parsed)
        }
        Err(err) => {
            eprintln!("{kind} file error - {err}");
            if verbose >= 1 {
                eprintln!("{err:#}");
            }
            None
        }
    }
}
