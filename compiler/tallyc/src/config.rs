//! Command-line configuration for the `tally` binary.

use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "tally> ";

pub const USAGE: &str = "\
Usage: tally [options]

Reads one expression or assignment per line and prints each result.

Options:
  -i, --input <path>   Read lines from a file instead of stdin
  -q, --quiet          Never print the prompt
  --prompt=<text>      Prompt shown in interactive mode (default: \"tally> \")
  --echo               Print `name = value` after each assignment
  -h, --help           Show this message

Logging is enabled with TALLY_LOG (or RUST_LOG), e.g. TALLY_LOG=tally_eval=trace.";

/// REPL settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Input file; stdin when `None`.
    pub input: Option<PathBuf>,
    pub quiet: bool,
    pub prompt: String,
    pub echo_assignments: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            input: None,
            quiet: false,
            prompt: DEFAULT_PROMPT.to_owned(),
            echo_assignments: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("option `{0}` requires a value")]
    MissingValue(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("input given more than once")]
    DuplicateInput,

    /// Not a failure: the caller prints [`USAGE`] and exits successfully.
    #[error("help requested")]
    HelpRequested,
}

impl ReplConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<ReplConfig, ConfigError> {
        let mut config = ReplConfig::default();
        let mut i = 0;

        while i < args.len() {
            let arg = args[i].as_ref();
            match arg {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "-q" | "--quiet" => config.quiet = true,
                "--echo" => config.echo_assignments = true,
                "-i" | "--input" => {
                    let Some(path) = args.get(i + 1) else {
                        return Err(ConfigError::MissingValue(arg.to_owned()));
                    };
                    config.set_input(path.as_ref())?;
                    i += 1;
                }
                _ => {
                    if let Some(path) = arg.strip_prefix("--input=") {
                        config.set_input(path)?;
                    } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
                        config.prompt = prompt.to_owned();
                    } else if arg.starts_with('-') {
                        return Err(ConfigError::UnknownOption(arg.to_owned()));
                    } else {
                        return Err(ConfigError::UnexpectedArgument(arg.to_owned()));
                    }
                }
            }
            i += 1;
        }

        Ok(config)
    }

    fn set_input(&mut self, path: &str) -> Result<(), ConfigError> {
        if path.is_empty() {
            return Err(ConfigError::MissingValue("--input".to_owned()));
        }
        if self.input.is_some() {
            return Err(ConfigError::DuplicateInput);
        }
        self.input = Some(PathBuf::from(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
