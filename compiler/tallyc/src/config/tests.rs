use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::{ConfigError, ReplConfig, DEFAULT_PROMPT};

fn parse(args: &[&str]) -> Result<ReplConfig, ConfigError> {
    ReplConfig::from_args(args)
}

#[test]
fn defaults() {
    let config = parse(&[]).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config, ReplConfig::default());
    assert_eq!(config.prompt, DEFAULT_PROMPT);
    assert_eq!(config.input, None);
}

#[test]
fn flags() {
    let config = parse(&["-q", "--echo"]).unwrap_or_else(|e| panic!("{e}"));
    assert!(config.quiet);
    assert!(config.echo_assignments);

    let config = parse(&["--quiet"]).unwrap_or_else(|e| panic!("{e}"));
    assert!(config.quiet);
}

#[test]
fn input_forms() {
    let cases: [&[&str]; 3] = [
        &["-i", "lines.txt"],
        &["--input", "lines.txt"],
        &["--input=lines.txt"],
    ];
    for args in cases {
        let config = parse(args).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.input, Some(PathBuf::from("lines.txt")), "{args:?}");
    }
}

#[test]
fn custom_prompt() {
    let config = parse(&["--prompt=>> "]).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.prompt, ">> ");

    let config = parse(&["--prompt="]).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.prompt, "");
}

#[test]
fn errors() {
    assert_eq!(parse(&["-i"]), Err(ConfigError::MissingValue("-i".into())));
    assert_eq!(
        parse(&["--input="]),
        Err(ConfigError::MissingValue("--input".into()))
    );
    assert_eq!(
        parse(&["--verbose"]),
        Err(ConfigError::UnknownOption("--verbose".into()))
    );
    assert_eq!(
        parse(&["file.txt"]),
        Err(ConfigError::UnexpectedArgument("file.txt".into()))
    );
    assert_eq!(
        parse(&["-i", "a", "-i", "b"]),
        Err(ConfigError::DuplicateInput)
    );
}

#[test]
fn help_wins_immediately() {
    assert_eq!(parse(&["-h", "--bogus"]), Err(ConfigError::HelpRequested));
    assert_eq!(parse(&["--help"]), Err(ConfigError::HelpRequested));
}
