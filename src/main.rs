// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MermaidMagic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-magic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! mermaid-magic CLI entrypoint.
//!
//! Reads the JSON document (default `./mermaid-magic.json`, created with a starter diagram when
//! missing) and prints it as Mermaid text or CSV, imports Mermaid text into it, or rewrites it in
//! normalized form.

use std::error::Error;
use std::str::FromStr;

use log::{debug, info, LevelFilter};

use mermaid_magic::format::csv::to_csv;
use mermaid_magic::format::mermaid::{parse_text, to_text, with_marker};
use mermaid_magic::model::Diagram;
use mermaid_magic::store::{DataFile, DEFAULT_DATA_FILE};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} text [--data <file>] [--marker]\n  {program} csv [--data <file>]\n  {program} import <source.mmd> [--data <file>]\n  {program} normalize [--data <file>]\n  {program} schema\n\nGlobal: --log-level <off|error|warn|info|debug|trace> (overrides RUST_LOG, which defaults to warn).\n\n--data defaults to ./{DEFAULT_DATA_FILE}; a missing file is created with a starter diagram.\n--marker prefixes the exported text with the re-import marker comment."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Text { marker: bool },
    Csv,
    Import { source: String },
    Normalize,
    Schema,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    data: Option<String>,
    log_level: Option<LevelFilter>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut command_name = None;
    let mut positional = Vec::new();
    let mut data = None;
    let mut marker = false;
    let mut log_level = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                if data.is_some() {
                    return Err(());
                }
                data = Some(args.next().ok_or(())?);
            }
            "--marker" => {
                if marker {
                    return Err(());
                }
                marker = true;
            }
            "--log-level" => {
                if log_level.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                log_level = Some(LevelFilter::from_str(&raw).map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ if command_name.is_none() => command_name = Some(arg),
            _ => positional.push(arg),
        }
    }

    let command = match command_name.as_deref().ok_or(())? {
        "text" => Command::Text { marker },
        "csv" => Command::Csv,
        "import" => {
            let [source] =
                <[String; 1]>::try_from(std::mem::take(&mut positional)).map_err(|_| ())?;
            Command::Import { source }
        }
        "normalize" => Command::Normalize,
        "schema" => Command::Schema,
        _ => return Err(()),
    };

    if !positional.is_empty() {
        return Err(());
    }
    if marker && !matches!(command, Command::Text { .. }) {
        return Err(());
    }
    if data.is_some() && command == Command::Schema {
        return Err(());
    }

    Ok(CliOptions { command, data, log_level })
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let file = DataFile::new(options.data.unwrap_or_else(|| DEFAULT_DATA_FILE.to_owned()));

    match options.command {
        Command::Text { marker } => {
            let text = to_text(&file.load()?);
            println!("{}", if marker { with_marker(&text) } else { text });
        }
        Command::Csv => {
            let diagram = file.load()?;
            let csv = to_csv(&diagram).ok_or_else(|| {
                format!("diagram kind {} has no CSV mapping", diagram.kind().as_str())
            })?;
            println!("{csv}");
        }
        Command::Import { source } => {
            let text = std::fs::read_to_string(&source)
                .map_err(|err| format!("cannot read {source:?}: {err}"))?;
            let previous = file.load()?;
            let diagram = parse_text(&text, &previous)?;
            file.save(&diagram)?;
            info!(source, kind = diagram.kind().as_str(); "imported Mermaid text");
        }
        Command::Normalize => {
            let diagram = file.load()?;
            file.save(&diagram)?;
        }
        Command::Schema => {
            let schema = schemars::schema_for!(Diagram);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "mermaid-magic".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = options.log_level {
        logger.filter_level(level);
    }
    logger.init();
    debug!(options:?; "parsed arguments");

    if let Err(err) = run(options) {
        eprintln!("mermaid-magic: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{parse_options, CliOptions, Command};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn rejects_empty_args() {
        parse(&[]).unwrap_err();
    }

    #[test]
    fn parses_text_with_marker() {
        let options = parse(&["text", "--marker"]).expect("parse options");
        assert_eq!(options.command, Command::Text { marker: true });
        assert_eq!(options.data, None);
        assert_eq!(options.log_level, None);
    }

    #[test]
    fn parses_data_and_log_level_in_any_position() {
        let options =
            parse(&["--log-level", "debug", "csv", "--data", "doc.json"]).expect("parse options");
        assert_eq!(options.command, Command::Csv);
        assert_eq!(options.data.as_deref(), Some("doc.json"));
        assert_eq!(options.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn parses_import_source() {
        let options = parse(&["import", "diagram.mmd"]).expect("parse options");
        assert_eq!(options.command, Command::Import { source: "diagram.mmd".to_owned() });
    }

    #[test]
    fn import_requires_exactly_one_source() {
        parse(&["import"]).unwrap_err();
        parse(&["import", "a.mmd", "b.mmd"]).unwrap_err();
    }

    #[test]
    fn parses_normalize_and_schema() {
        assert_eq!(parse(&["normalize"]).expect("parse options").command, Command::Normalize);
        assert_eq!(parse(&["schema"]).expect("parse options").command, Command::Schema);
    }

    #[test]
    fn rejects_unknown_commands_and_flags() {
        parse(&["render"]).unwrap_err();
        parse(&["text", "--nope"]).unwrap_err();
        parse(&["text", "extra"]).unwrap_err();
    }

    #[test]
    fn rejects_misplaced_or_duplicate_flags() {
        parse(&["csv", "--marker"]).unwrap_err();
        parse(&["schema", "--data", "doc.json"]).unwrap_err();
        parse(&["text", "--marker", "--marker"]).unwrap_err();
        parse(&["csv", "--data", "a", "--data", "b"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_or_invalid_values() {
        parse(&["csv", "--data"]).unwrap_err();
        parse(&["csv", "--log-level"]).unwrap_err();
        parse(&["csv", "--log-level", "loud"]).unwrap_err();
    }
}
