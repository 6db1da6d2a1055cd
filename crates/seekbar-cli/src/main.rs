// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use runtime::SystemRuntime;
use seekbar_app::{AppState, Catalog, SearchResult, Tab, filter_results};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `seekbar --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    let timing = config.timing()?;
    let log_path = config.log_path()?;
    let log_level = config.log_level()?;
    if options.check_only {
        return Ok(());
    }

    let catalog = Catalog::demo();
    if let Some(query) = &options.query {
        let tab = options.tab.unwrap_or(Tab::All);
        let hits = filter_results(catalog.results(), tab, query);
        let output = if options.json {
            render_json(&hits)?
        } else {
            render_plain(&hits)
        };
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .context("write query results to stdout")?;
        return Ok(());
    }

    logging::init(&log_path, log_level)?;
    tracing::info!(
        config = %options.config_path.display(),
        records = catalog.len(),
        "starting seekbar"
    );

    let mut state = AppState::new(timing, config.tab_filters());
    let mut runtime = SystemRuntime::new();
    let result = seekbar_tui::run_app(&mut state, catalog, &mut runtime);
    match &result {
        Ok(()) => tracing::info!("seekbar exited"),
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "seekbar exited with error");
        }
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    query: Option<String>,
    tab: Option<Tab>,
    json: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        query: None,
        tab: None,
        json: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--query" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--query requires search text"))?;
                options.query = Some(value.as_ref().to_owned());
            }
            "--tab" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow!("--tab requires a tab name (all, files, people, chats, lists)")
                })?;
                let tab = Tab::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown tab {:?}; use one of: all, files, people, chats, lists",
                        value.as_ref()
                    )
                })?;
                options.tab = Some(tab);
            }
            "--json" => {
                options.json = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    if options.query.is_none() && (options.tab.is_some() || options.json) {
        return Err(anyhow!("--tab and --json only apply together with --query"));
    }

    Ok(options)
}

/// One `<kind>\t<name>\t<url>` line per hit.
fn render_plain(hits: &[&SearchResult]) -> String {
    let mut output = String::new();
    for hit in hits {
        output.push_str(hit.kind_label());
        output.push('\t');
        output.push_str(hit.name());
        output.push('\t');
        output.push_str(hit.url());
        output.push('\n');
    }
    output
}

fn render_json(hits: &[&SearchResult]) -> Result<String> {
    let mut output =
        serde_json::to_string_pretty(hits).context("encode query results as JSON")?;
    output.push('\n');
    Ok(output)
}

fn print_help() {
    println!("seekbar (Rust)");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --check                  Validate config and exit");
    println!("  --query <text>           Print matches without starting the UI");
    println!("  --tab <name>             Restrict --query to all, files, people, chats, or lists");
    println!("  --json                   Print --query matches as JSON");
    println!("  --help                   Show this help");
}
