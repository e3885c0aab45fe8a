//! props2json: convert props.txt material property dumps to JSON and other
//! formats.
//!
//! Usage: props2json [OPTIONS] [FILE|DIR]
//!
//! Options:
//!   -t, --to <FORMAT>      Output format (json, compact, yaml, toml, cbor) [default: json]
//!       --indent <N>       Spaces per JSON indentation level [default: 4]
//!   -w, --write            Write output next to the input with the extension replaced
//!   -o, --output <FILE>    Write output to specified file
//!       --check            Check if input parses (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use libprops::{encode_json, encode_json_compact, parse_with_filename, ParseError, Value};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

mod transcode;

const PROPS_EXTENSION: &str = ".props.txt";

#[derive(Debug, Parser)]
#[command(name = "props2json")]
#[command(about = "Convert props.txt material property dumps to JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file or directory (reads stdin if omitted or `-`).
    /// A directory converts every *.props.txt file in it.
    path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    to: OutputFormat,

    /// Spaces per indentation level for JSON output
    #[arg(long, default_value_t = libprops::DEFAULT_INDENT)]
    indent: usize,

    /// Write output to the specified file (not valid with directory input)
    #[arg(short, long, conflicts_with = "write")]
    output: Option<PathBuf>,

    /// Write output next to each input, with the extension replaced
    #[arg(short, long)]
    write: bool,

    /// Only check that the input parses
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented JSON
    Json,
    /// Single-line JSON
    Compact,
    /// YAML
    Yaml,
    /// TOML (fails on null values)
    Toml,
    /// CBOR (binary)
    Cbor,
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Compact => "compact JSON",
            OutputFormat::Yaml => "YAML",
            OutputFormat::Toml => "TOML",
            OutputFormat::Cbor => "CBOR",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Compact => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Toml => "toml",
            OutputFormat::Cbor => "cbor",
        }
    }
}

enum Output {
    Text(String),
    Binary(Vec<u8>),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let input_path = cli.path.as_deref().filter(|p| *p != Path::new("-"));

    if let Some(path) = input_path {
        if path.is_dir() {
            if cli.output.is_some() {
                eprintln!("Error: --output cannot be used with directory input");
                process::exit(1);
            }
            process::exit(process_directory(path, &cli));
        }
    }

    let input = match read_input(input_path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    process::exit(process_input(&input, input_path, &cli));
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

/// Convert every props.txt file in `dir`, continuing past failures.
fn process_directory(dir: &Path, cli: &Cli) -> i32 {
    match convert_directory(dir, cli) {
        Ok(failures) => {
            for failure in &failures {
                eprintln!("{}", failure);
            }
            if failures.is_empty() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir.display(), e);
            1
        }
    }
}

/// Returns one `<path>: <message>` line per file that failed.
fn convert_directory(dir: &Path, cli: &Cli) -> io::Result<Vec<String>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_props_file(path))
        .collect();
    files.sort();

    let mut failures = Vec::new();
    for path in &files {
        let result = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|input| convert(&input, Some(path), cli));
        if let Err(e) = result {
            failures.push(failure_message(Some(path), &e));
        }
    }
    Ok(failures)
}

fn is_props_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(PROPS_EXTENSION))
            .unwrap_or(false)
}

fn process_input(input: &str, input_file: Option<&Path>, cli: &Cli) -> i32 {
    match convert(input, input_file, cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", failure_message(input_file, &e));
            1
        }
    }
}

fn failure_message(input_file: Option<&Path>, error: &anyhow::Error) -> String {
    match input_file {
        Some(path) => format!("{}: {:#}", path.display(), error),
        None if error.is::<ParseError>() => format!("Parse error: {}", error),
        None => format!("Error: {:#}", error),
    }
}

fn convert(input: &str, input_file: Option<&Path>, cli: &Cli) -> Result<()> {
    let filename = input_file
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().to_string());

    let props = parse_with_filename(input, filename.as_deref())?;

    if cli.check {
        if let Some(path) = input_file {
            println!("{}: ok", path.display());
        }
        return Ok(());
    }

    let value = Value::Object(props);
    let output = render(&value, cli)
        .map_err(|e| anyhow!("Cannot convert to {}: {}", cli.to.name(), e))?;

    write_output(&output, cli, input_file)?;

    if let Some(path) = input_file {
        log::info!("converted {}", path.display());
    }
    Ok(())
}

fn render(value: &Value, cli: &Cli) -> Result<Output, String> {
    match cli.to {
        OutputFormat::Json => Ok(Output::Text(encode_json(value, cli.indent))),
        OutputFormat::Compact => Ok(Output::Text(encode_json_compact(value))),
        OutputFormat::Yaml => transcode::yaml::encode(value).map(Output::Text),
        OutputFormat::Toml => transcode::toml::encode(value).map(Output::Text),
        OutputFormat::Cbor => transcode::cbor::encode(value).map(Output::Binary),
    }
}

fn write_output(output: &Output, cli: &Cli, input_file: Option<&Path>) -> Result<()> {
    let target = if let Some(path) = &cli.output {
        Some(path.clone())
    } else if cli.write {
        match input_file {
            Some(path) => Some(output_path(path, cli.to)),
            None => bail!("--write requires an input file"),
        }
    } else {
        None
    };

    match (target, output) {
        (Some(path), Output::Text(text)) => {
            fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        (Some(path), Output::Binary(bytes)) => {
            fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        }
        (None, Output::Text(text)) => {
            print!("{}", text);
            // Ensure output ends with newline
            if !text.ends_with('\n') {
                println!();
            }
        }
        (None, Output::Binary(bytes)) => {
            io::stdout()
                .lock()
                .write_all(bytes)
                .context("writing to stdout")?;
        }
    }
    Ok(())
}

/// `M_Rock.props.txt` -> `M_Rock.props.json`
fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}
