use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use options::Options;

mod load;
mod options;
mod render;
mod transform;

/// Format & order the OpenAPI document
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the OpenAPI document
    pub file: String,

    /// Write the formatted OpenAPI to an output file path. Default stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// The file with the sort priority options [default: defaultSort.json]
    #[arg(short, long = "sortFile")]
    pub sort_file: Option<String>,

    /// The file with the filter options
    #[arg(short, long = "filterFile")]
    pub filter_file: Option<String>,

    /// The file with the oafmt CLI options
    #[arg(short, long = "configFile")]
    pub config_file: Option<String>,

    /// Overwrite the title in the OpenAPI document
    #[arg(long, value_name = "oaTitle")]
    pub rename: Option<String>,

    /// Print the file to stdout as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the file to stdout as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Dont sort the file
    #[arg(long = "no-sort")]
    pub no_sort: bool,

    /// Verbosity that can be increased
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let (file, options) = Options::resolve(cli);
    options.info(format!("Input file: {file}"));

    let doc = load::load_document(&file)
        .with_context(|| format!("cannot load OpenAPI document \"{file}\""))?;
    let doc = transform::apply(doc, &options);

    let text = render::render(&doc, &options)?;
    render::write(&text, &options);

    options.info("OpenAPI was formatted successfully");
    Ok(())
}
