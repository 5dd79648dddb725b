use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::SessionConfig;

pub const USAGE: &str = "\
usage: match-three [options]

options:
  --config <path>   load session settings from a TOML file
  --seed <n>        tile seed (random when omitted)
  --rows <n>        board height
  --cols <n>        board width
  --colors <n>      palette size
  --moves <n>       number of moves to autoplay (default 20)
  --json            print the final snapshot as JSON
  --quiet           do not print the board after each move
  --verbose         log every move to stderr
  -h, --help        show this help";

/// Default number of autoplayed moves
pub const DEFAULT_MOVES: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerArgs {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub colors: Option<u8>,
    pub moves: u32,
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for RunnerArgs {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            rows: None,
            cols: None,
            colors: None,
            moves: DEFAULT_MOVES,
            json: false,
            quiet: false,
            verbose: false,
        }
    }
}

impl RunnerArgs {
    /// Build the session configuration: file first, then command-line overrides.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(colors) = self.colors {
            config.palette_size = colors;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse runner arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<RunnerArgs>> {
    let mut out = RunnerArgs::default();
    let mut i = 0usize;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => {
                out.config = Some(PathBuf::from(value(args, &mut i, "--config")?));
            }
            "--seed" => out.seed = Some(number(args, &mut i, "--seed")?),
            "--rows" => out.rows = Some(number(args, &mut i, "--rows")?),
            "--cols" => out.cols = Some(number(args, &mut i, "--cols")?),
            "--colors" => out.colors = Some(number(args, &mut i, "--colors")?),
            "--moves" => out.moves = number(args, &mut i, "--moves")?,
            "--json" => out.json = true,
            "--quiet" => out.quiet = true,
            "--verbose" => out.verbose = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some(out))
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
