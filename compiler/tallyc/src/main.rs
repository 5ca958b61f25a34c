//! Tally REPL.
//!
//! Reads lines from stdin (or `-i <path>`), evaluates each one and prints
//! expression results to stdout. Errors go to stderr and do not stop the
//! session.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use tally_diagnostic::TerminalEmitter;
use tallyc::config::{ConfigError, ReplConfig, USAGE};
use tallyc::format::format_value;
use tallyc::{init_tracing, LineOutcome, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match ReplConfig::from_args(&args) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let status = match &config.input {
        Some(path) => match File::open(path) {
            Ok(file) => run(BufReader::new(file), &config, false),
            Err(e) => {
                eprintln!("error: cannot open `{}`: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run(stdin.lock(), &config, interactive)
        }
    };

    std::process::exit(status);
}

/// Drive a session over `input` until end of input or termination.
/// Returns the process exit status.
fn run<R: BufRead>(mut input: R, config: &ReplConfig, interactive: bool) -> i32 {
    let show_prompt = interactive && !config.quiet;
    let mut session = Session::new(TerminalEmitter::new(io::stderr()));
    let mut line = String::new();

    loop {
        if show_prompt {
            print!("{}", config.prompt);
            let _ = io::stdout().flush();
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                if show_prompt {
                    println!();
                }
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to read input");
                eprintln!("error: failed to read input: {e}");
                session.control().request_terminate();
                break;
            }
        }

        let text = line.trim_end_matches(['\n', '\r']);
        match session.process_line(text) {
            LineOutcome::Value(output) => println!("{output}"),
            LineOutcome::Assigned(name) if config.echo_assignments => {
                if let Some(binding) = session.vars().get(&name) {
                    println!("{name} = {}", format_value(&binding.value, None));
                }
            }
            LineOutcome::Assigned(_)
            | LineOutcome::Empty
            | LineOutcome::Failed(_)
            | LineOutcome::Interrupted(_) => {}
        }

        if session.control().is_terminated() {
            break;
        }
    }

    i32::from(session.control().is_terminated())
}
