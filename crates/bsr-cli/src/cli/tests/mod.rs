//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_render() {
    match parse(&["bsr", "render", "index.html"]).command {
        CliCommand::Render {
            page,
            output,
            endpoint,
        } => {
            assert_eq!(page, Path::new("index.html"));
            assert!(output.is_none());
            assert!(endpoint.is_none());
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_output_and_endpoint() {
    let cli = parse(&[
        "bsr",
        "render",
        "site/index.html",
        "-o",
        "public/index.html",
        "--endpoint",
        "http://127.0.0.1:8080/prod",
    ]);
    match cli.command {
        CliCommand::Render {
            output, endpoint, ..
        } => {
            assert_eq!(output.as_deref(), Some(Path::new("public/index.html")));
            assert_eq!(endpoint.as_deref(), Some("http://127.0.0.1:8080/prod"));
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_requires_page() {
    assert!(Cli::try_parse_from(["bsr", "render"]).is_err());
}

#[test]
fn cli_parse_fetch() {
    match parse(&["bsr", "fetch"]).command {
        CliCommand::Fetch { endpoint } => assert!(endpoint.is_none()),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_log_stderr_is_global() {
    let cli = parse(&["bsr", "fetch", "--log-stderr"]);
    assert!(cli.log_stderr);
    assert!(!parse(&["bsr", "fetch"]).log_stderr);
}

#[test]
fn cli_parse_completions() {
    match parse(&["bsr", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_config_path() {
    assert!(matches!(
        parse(&["bsr", "config-path"]).command,
        CliCommand::ConfigPath
    ));
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["bsr", "serve"]).is_err());
}
