//! Prettifier CLI: highlight JavaScript source as HTML list items.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use prettifier::diagnostics::print_warning;
use prettifier::lexer::lines::normalize;
use prettifier::{Formatter, HighlightConfig, PrettifierError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "prettifier",
    version,
    about = "Highlight JavaScript source as HTML list items"
)]
struct Cli {
    /// Source file to format, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pixels of left padding per nesting level (overrides the config file)
    #[arg(long, value_name = "PX")]
    indent_unit: Option<u32>,

    /// Wrap the list items in an `<ol>` carrying the line count
    #[arg(long)]
    wrap: bool,

    /// Report constructs that were highlighted on a best-effort basis
    #[arg(long)]
    warnings: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("prettifier: {}", e);
            ExitCode::from(1)
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "prettifier=warn",
        1 => "prettifier=debug",
        _ => "prettifier=trace",
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let (source, filename) = read_source(&cli.input)?;

    let formatter = Formatter::new(config);
    let result = formatter.format(&source);

    if cli.warnings && !result.warnings.is_empty() {
        let normalized = normalize(&source);
        for warning in &result.warnings {
            print_warning(&filename, &normalized, warning);
        }
    }

    let prefix = &formatter.config().class_prefix;
    let mut stdout = io::stdout().lock();
    let written = if cli.wrap {
        writeln!(
            stdout,
            "<ol class=\"{}prettyprint\" data-lines=\"{}\">{}</ol>",
            prefix, result.line_count, result.html
        )
    } else {
        writeln!(stdout, "{}", result.html)
    };
    written.map_err(|source| PrettifierError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

fn load_config(cli: &Cli) -> Result<HighlightConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| PrettifierError::Io {
                path: path.clone(),
                source,
            })?;
            HighlightConfig::from_json(&text)?
        }
        None => HighlightConfig::default(),
    };
    if let Some(unit) = cli.indent_unit {
        config = config.with_indent_unit(unit);
    }
    Ok(config)
}

fn read_source(input: &str) -> Result<(String, String)> {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| PrettifierError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok((source, "<stdin>".to_string()));
    }
    let source = fs::read_to_string(input).map_err(|source| PrettifierError::Io {
        path: PathBuf::from(input),
        source,
    })?;
    Ok((source, input.to_string()))
}
