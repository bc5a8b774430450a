//! typeuss - USS stylesheet generator

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use serde_json::json;

use typeuss::export::{Staleness, check_sheets, write_sheets};
use typeuss::manifest::Manifest;
use typeuss::parse::{RuleDiff, parse_uss};

#[derive(Parser)]
#[command(name = "typeuss")]
#[command(version, about = "Generate USS stylesheets from a style manifest", long_about = None)]
#[command(after_help = "EXAMPLES:
    typeuss generate styles.json -o Assets    Write every sheet under Assets/
    typeuss check styles.json -o Assets       Fail if any sheet is out of date
    typeuss dump Assets/UI/Chat.uss           Print the rules of a sheet as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress output messages
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Generate sheets, writing only files whose text changed
    Generate {
        /// Manifest describing the sheets
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Directory the output paths are relative to
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Check that sheets on disk match the manifest
    Check {
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the rules of a stylesheet as JSON
    Dump {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match &cli.command {
        Command::Generate { manifest, out_dir } => generate(manifest, out_dir, cli.quiet),
        Command::Check { manifest, out_dir } => check(manifest, out_dir, cli.quiet),
        Command::Dump { file } => dump(file),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn generate(manifest: &Path, out_dir: &Path, quiet: bool) -> typeuss::Result<bool> {
    let registry = Manifest::load(manifest)?.to_registry();
    if registry.is_empty() {
        if !quiet {
            println!("No sheets declared in {}", manifest.display());
        }
        return Ok(true);
    }

    let report = write_sheets(out_dir, &registry.generate_all())?;
    if !quiet {
        for path in &report.written {
            println!("wrote {}", path.display());
        }
        println!(
            "Generated {} USS file(s), {} unchanged.",
            report.written.len(),
            report.unchanged.len()
        );
    }
    Ok(true)
}

fn check(manifest: &Path, out_dir: &Path, quiet: bool) -> typeuss::Result<bool> {
    let registry = Manifest::load(manifest)?.to_registry();
    let stale = check_sheets(out_dir, &registry.generate_all())?;

    if !quiet {
        for sheet in &stale {
            match &sheet.staleness {
                Staleness::Missing => println!("missing  {}", sheet.path.display()),
                Staleness::Changed(diffs) => {
                    println!("changed  {}", sheet.path.display());
                    for diff in diffs {
                        let kind = match diff {
                            RuleDiff::Missing { .. } => "missing",
                            RuleDiff::Unexpected { .. } => "unexpected",
                            RuleDiff::Changed { .. } => "changed",
                        };
                        println!("    {kind} rule {}", diff.selector());
                    }
                }
            }
        }
        if stale.is_empty() {
            println!("All {} USS file(s) up to date.", registry.sheets().len());
        }
    }
    Ok(stale.is_empty())
}

fn dump(file: &Path) -> typeuss::Result<bool> {
    let text = fs::read_to_string(file)?;
    let rules: Vec<_> = parse_uss(&text)
        .iter()
        .map(|rule| {
            let properties: Vec<_> = rule
                .properties
                .iter()
                .map(|p| json!({ "name": p.name(), "value": p.value() }))
                .collect();
            json!({ "selector": rule.selector, "properties": properties })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rules)?);
    Ok(true)
}
