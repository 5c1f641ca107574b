//! Command-line interface for scrub
//! This binary runs rewrite passes over static content files and reports on what is left in them.
//!
//! Usage:
//!   scrub check-ascii `<path>` [--format `<format>`]        - List characters above code point 127
//!   scrub apply `<ruleset>` `<path>` [-o `<output>`]          - Run a named rule set over a file
//!   scrub rename-slugs `<path>` --map `<map>` [-o `<output>`] - Ordered slug substitution from a map file
//!   scrub list-rules                                    - List registered rule sets

use clap::{Arg, Command};
use std::path::Path;

use scrub::document::Document;
use scrub::mapfile::MapFile;
use scrub::pipeline::{PipelineExecutor, RewriteRule};
use scrub::scan::ScanReport;

fn main() {
    let matches = Command::new("scrub")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for scanning and rewriting static content files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check-ascii")
                .about("List characters above code point 127")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to scan")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Run a named rule set over a file")
                .arg(
                    Arg::new("ruleset")
                        .help("Name of the rule set to run")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the file to rewrite")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result here instead of rewriting in place"),
                ),
        )
        .subcommand(
            Command::new("rename-slugs")
                .about("Replace slug values in their order of appearance")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to rewrite")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("map")
                        .long("map")
                        .short('m')
                        .help("YAML file with the ordered replacement values")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result here instead of rewriting in place"),
                ),
        )
        .subcommand(Command::new("list-rules").about("List registered rule sets"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("check-ascii", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let format = check_matches.get_one::<String>("format").unwrap();
            handle_check_ascii_command(path, format);
        }
        Some(("apply", apply_matches)) => {
            let ruleset = apply_matches.get_one::<String>("ruleset").unwrap();
            let path = apply_matches.get_one::<String>("path").unwrap();
            let output = apply_matches.get_one::<String>("output");
            handle_apply_command(ruleset, path, output.map(String::as_str));
        }
        Some(("rename-slugs", rename_matches)) => {
            let path = rename_matches.get_one::<String>("path").unwrap();
            let map = rename_matches.get_one::<String>("map").unwrap();
            let output = rename_matches.get_one::<String>("output");
            handle_rename_slugs_command(path, map, output.map(String::as_str));
        }
        Some(("list-rules", _)) => {
            handle_list_rules_command();
        }
        _ => unreachable!(),
    }
}

/// Load a document or terminate with a diagnostic
fn load_or_exit(path: &str) -> Document {
    Document::load(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Save a document or terminate with a diagnostic
fn save_or_exit(doc: &Document, path: &str) {
    doc.save(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error writing file: {}", e);
        std::process::exit(1);
    });
}

/// Handle the check-ascii command
fn handle_check_ascii_command(path: &str, format: &str) {
    let doc = load_or_exit(path);
    let report = ScanReport::new(Path::new(path), doc.text());

    match format {
        "simple" => {
            for entry in &report.characters {
                println!("{} {} ({})", entry.codepoint, entry.character, entry.count);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the apply command
fn handle_apply_command(ruleset: &str, path: &str, output: Option<&str>) {
    let doc = load_or_exit(path);

    let executor = PipelineExecutor::new();
    let rewritten = executor.execute(ruleset, doc.text()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let target = output.unwrap_or(path);
    save_or_exit(&Document::from_text(rewritten), target);
}

/// Handle the rename-slugs command
fn handle_rename_slugs_command(path: &str, map: &str, output: Option<&str>) {
    let doc = load_or_exit(path);

    let rule = MapFile::load(Path::new(map))
        .and_then(MapFile::into_rule)
        .unwrap_or_else(|e| {
            eprintln!("Error reading map file: {}", e);
            std::process::exit(1);
        });

    let matched = rule.match_count(doc.text());
    if matched < rule.replacement_count() {
        eprintln!(
            "Warning: {} of {} replacement values unused",
            rule.replacement_count() - matched,
            rule.replacement_count()
        );
    }

    let rewritten = rule.apply(doc.text()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let target = output.unwrap_or(path);
    save_or_exit(&Document::from_text(rewritten), target);
}

/// Handle the list-rules command
fn handle_list_rules_command() {
    let executor = PipelineExecutor::new();
    println!("Registered rule sets:\n");
    for set in executor.registry().list_all() {
        println!("  {}", set.name);
        println!("    {}", set.description);
    }
}
