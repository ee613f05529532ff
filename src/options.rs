use serde::Deserialize;

use crate::load;
use crate::transform::filter::FilterSet;
use crate::transform::sort::SortSet;
use crate::Cli;

pub const DEFAULT_SORT_FILE: &str = "defaultSort.json";

/// Options read from the config file.
///
/// Every field is optional so the merge can tell "unset" apart from
/// "explicitly set": a CLI flag the user passed always wins, an unset CLI
/// field falls through to the value here.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    pub output: Option<String>,
    pub sort_file: Option<String>,
    pub filter_file: Option<String>,
    pub rename: Option<String>,
    pub json: Option<bool>,
    pub yaml: Option<bool>,
    pub sort: Option<bool>,
    #[serde(rename = "no-sort")]
    pub no_sort: Option<bool>,
    pub verbose: Option<u8>,
}

impl FileOptions {
    /// Translate a `no-sort: true` into the canonical `sort: false` and drop
    /// the original key, so downstream code never sees both flags.
    fn normalize(mut self) -> Self {
        if self.no_sort == Some(true) {
            self.sort = Some(false);
            self.no_sort = None;
        }
        self
    }
}

/// The effective configuration every stage runs against.
///
/// Built once per invocation; after [`Options::resolve`] returns, the raw CLI
/// arguments are never consulted again.
#[derive(Debug)]
pub struct Options {
    pub sort: bool,
    pub sort_file: String,
    pub filter_file: Option<String>,
    pub config_file: Option<String>,
    pub rename: Option<String>,
    pub output: Option<String>,
    pub json: bool,
    pub yaml: bool,
    pub verbose: u8,
    pub sort_set: Option<SortSet>,
    pub filter_set: Option<FilterSet>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            sort: true,
            sort_file: DEFAULT_SORT_FILE.to_string(),
            filter_file: None,
            config_file: None,
            rename: None,
            output: None,
            json: false,
            yaml: false,
            verbose: 0,
            sort_set: None,
            filter_set: None,
        }
    }
}

impl Options {
    /// Merge built-in defaults, config-file options and CLI flags into one
    /// effective configuration, then load the sort and filter rule files it
    /// names. Returns the input document path alongside the options.
    pub fn resolve(cli: Cli) -> (String, Options) {
        let file = match &cli.config_file {
            Some(path) => {
                if cli.verbose >= 1 {
                    eprintln!("Config file: {path}");
                }
                load::load_optional::<FileOptions>("Config", path, cli.verbose)
                    .map(FileOptions::normalize)
                    .unwrap_or_default()
            }
            None => FileOptions::default(),
        };

        let mut options = Options {
            sort: if cli.no_sort { false } else { file.sort.unwrap_or(true) },
            sort_file: cli
                .sort_file
                .or(file.sort_file)
                .unwrap_or_else(|| DEFAULT_SORT_FILE.to_string()),
            filter_file: cli.filter_file.or(file.filter_file),
            config_file: cli.config_file,
            rename: cli.rename.or(file.rename),
            output: cli.output.or(file.output),
            json: cli.json || file.json.unwrap_or(false),
            yaml: cli.yaml || file.yaml.unwrap_or(false),
            verbose: if cli.verbose > 0 {
                cli.verbose
            } else {
                file.verbose.unwrap_or(0)
            },
            sort_set: None,
            filter_set: None,
        };

        if options.verbose >= 1 {
            options.print_table();
        }

        if options.sort {
            options.info(format!("Sort file: {}", options.sort_file));
            options.sort_set = load::load_optional("Sort", &options.sort_file, options.verbose);
        }
        if let Some(path) = options.filter_file.clone() {
            options.info(format!("Filter file: {path}"));
            options.filter_set = load::load_optional("Filter", &path, options.verbose);
        }

        (cli.file, options)
    }

    /// Verbosity-gated diagnostic line on stderr.
    pub fn info(&self, msg: impl AsRef<str>) {
        if self.verbose >= 1 {
            eprintln!("{}", msg.as_ref());
        }
    }

    /// Diagnostic table of the merged options.
    fn print_table(&self) {
        fn row(name: &str, value: &dyn std::fmt::Display) {
            eprintln!("  {name:<12} {value}");
        }
        eprintln!("Effective options:");
        row("sort", &self.sort);
        row("sortFile", &self.sort_file);
        row("filterFile", &self.filter_file.as_deref().unwrap_or("-"));
        row("configFile", &self.config_file.as_deref().unwrap_or("-"));
        row("rename", &self.rename.as_deref().unwrap_or("-"));
        row("output", &self.output.as_deref().unwrap_or("-"));
        row("json", &self.json);
        row("yaml", &self.yaml);
        row("verbose", &self.verbose);
    }
}
