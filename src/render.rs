use std::fs;
use std::path::Path;

use anyhow::Result;
use serde_yaml::Value;

use crate::options::Options;

fn wants_json(options: &Options) -> bool {
    let json_extension = options
        .output
        .as_deref()
        .and_then(|path| Path::new(path).extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    json_extension || options.json
}

/// Render the document as pretty-printed JSON (two-space indent) when the
/// output path carries a `.json` extension or `--json` was given, as YAML
/// otherwise.
pub fn render(doc: &Value, options: &Options) -> Result<String> {
    if wants_json(options) {
        let json = serde_json::to_value(doc)?;
        Ok(serde_json::to_string_pretty(&json)?)
    } else {
        Ok(serde_yaml::to_string(doc)?)
    }
}

/// Write the rendered text to the configured output path, or to stdout when
/// none is set. Write failures are reported but do not abort the run; the
/// document is not echoed to stdout as a fallback.
pub fn write(text: &str, options: &Options) {
    match &options.output {
        Some(path) => match fs::write(path, text) {
            Ok(()) => options.info(format!("Output file: {path}")),
            Err(err) => {
                eprintln!("Output file error - no such file or directory \"{path}\"");
                if options.verbose >= 1 {
                    eprintln!("{err}");
                }
            }
        },
        None => println!("{text}"),
    }
}
