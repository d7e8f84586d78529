//! Purpose: `ltjson` CLI entry point.
//! Role: Binary crate root; parses args, decodes the payload, reports on stdout.
//! Invariants: stdout carries exactly one report: the value or the decode error line.
//! Invariants: Decode failures exit 0; other errors go to stderr with `to_exit_code`.
//! Invariants: Logs are written to stderr and never mix into stdout.
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use tracing_subscriber::EnvFilter;

use ltjson::config::RootConfig;
use ltjson::report::{RenderOptions, report, report_error};
use ltjson::{EMBEDDED_PAYLOAD, Error, ErrorKind, decode, decode_bytes, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

#[derive(Parser)]
#[command(
    name = "ltjson",
    version,
    about = "Decode the LanguageTool client settings and print them",
    long_about = None,
    after_help = r#"EXAMPLES
  $ ltjson                     # decode the built-in settings
  $ ltjson settings.json       # decode a file instead
  $ ltjson --typed partial.json
  $ RUST_LOG=debug ltjson --compact"#
)]
struct Cli {
    #[arg(
        help = "JSON file to decode instead of the built-in settings",
        value_hint = ValueHint::FilePath
    )]
    file: Option<PathBuf>,
    #[arg(
        long,
        help = "Decode into the settings record, filling defaults for missing keys"
    )]
    typed: bool,
    #[arg(long, help = "Print single-line JSON even on a terminal")]
    compact: bool,
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize output and diagnostics: auto|always|never"
    )]
    color: ColorMode,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                return Ok(RunOutcome::ok());
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `ltjson --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    init_tracing();
    let color_mode = cli.color;
    execute(&cli).map_err(|err| (err, color_mode))
}

fn execute(cli: &Cli) -> Result<RunOutcome, Error> {
    let is_tty = io::stdout().is_terminal();
    let use_color = cli.color.use_color(is_tty);
    let options = RenderOptions {
        pretty: !cli.compact && (is_tty || use_color),
        color: use_color,
    };

    let decoded = match (&cli.file, cli.typed) {
        (Some(path), true) => {
            tracing::info!(path = %path.display(), "decoding settings file");
            RootConfig::init_from_file(path).and_then(|config| settings_value(&config))
        }
        (Some(path), false) => {
            tracing::info!(path = %path.display(), "decoding file");
            let bytes = std::fs::read(path).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to read input file")
                    .with_path(path)
                    .with_source(err)
            })?;
            decode_bytes(&bytes)
        }
        (None, true) => {
            tracing::info!("decoding built-in settings");
            RootConfig::embedded().and_then(|config| settings_value(&config))
        }
        (None, false) => {
            tracing::info!("decoding built-in payload");
            decode(EMBEDDED_PAYLOAD)
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match decoded {
        Ok(value) => report(&mut out, &value, options),
        Err(err) if err.kind() == ErrorKind::Decode => report_error(&mut out, &err, use_color),
        Err(err) => return Err(err),
    };
    written
        .and_then(|()| out.flush())
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write stdout")
                .with_source(err)
        })?;
    Ok(RunOutcome::ok())
}

fn settings_value(config: &RootConfig) -> Result<serde_json::Value, Error> {
    serde_json::to_value(config).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode settings")
            .with_source(err)
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error: ").to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Decode => "invalid JSON".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));
    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(cause) = std::error::Error::source(err) {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }
    lines.join("\n")
}
