//! Command handlers for the `denv` CLI.
//!
//! Handlers return `Err(message)` for the binary to report on stderr before
//! exiting with status 1. Shared option parsing and file loading live here.

use std::path::Path;

use denv::{BlockPolicy, Env, Value, DEFAULT_DELIMITER};

mod debug;
mod fmt;
mod get;

pub use debug::{dump_file, lex_file};
pub use fmt::format_file;
pub use get::get_value;

/// Options shared by every file command.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub delimiter: String,
    pub vars: Vec<(String, String)>,
    pub mode: Option<String>,
    pub flat: bool,
    pub blocks: BlockPolicy,
    pub json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            delimiter: DEFAULT_DELIMITER.to_owned(),
            vars: Vec::new(),
            mode: None,
            flat: false,
            blocks: BlockPolicy::default(),
            json: false,
        }
    }
}

impl Options {
    /// Split `args` into options and positional arguments.
    pub fn parse(args: &[String]) -> Result<(Options, Vec<String>), String> {
        let mut options = Options::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(delimiter) = arg.strip_prefix("--delimiter=") {
                options.delimiter = delimiter.to_owned();
            } else if let Some(var) = arg.strip_prefix("--var=") {
                let Some((name, value)) = var.split_once('=') else {
                    return Err(format!("invalid --var '{var}', expected NAME=VALUE"));
                };
                options.vars.push((name.to_owned(), value.to_owned()));
            } else if let Some(mode) = arg.strip_prefix("--mode=") {
                options.mode = Some(mode.to_owned());
            } else if let Some(policy) = arg.strip_prefix("--blocks=") {
                options.blocks = BlockPolicy::from_name(policy).ok_or_else(|| {
                    format!("unknown block policy '{policy}', expected empty, raw, or decode")
                })?;
            } else if arg == "--flat" {
                options.flat = true;
            } else if arg == "--json" {
                options.json = true;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((options, positional))
    }

    /// An unparsed engine over `source` configured by these options.
    pub fn engine(&self, source: String) -> Env {
        let mut env = Env::new(source, self.delimiter.as_str());
        env.set_nested(!self.flat)
            .set_block_policy(self.blocks)
            .inject(self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        env
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Parse `path`, then layer `<path>.<mode>` over it when that file exists.
///
/// The mode is `--mode`, or else the `mode` key of the base file.
pub(crate) fn load_env(path: &str, options: &Options) -> Result<Env, String> {
    let mut env = options.engine(read_file(path)?);
    env.parse();

    let mode = options
        .mode
        .clone()
        .or_else(|| env.get("mode").and_then(Value::as_str).map(str::to_owned))
        .filter(|mode| !mode.is_empty());
    if let Some(mode) = mode {
        let layer = format!("{path}.{mode}");
        if Path::new(&layer).is_file() {
            tracing::debug!(layer = %layer, "loading mode layer");
            let text = read_file(&layer)?;
            env.load(&text);
        }
    }
    Ok(env)
}
