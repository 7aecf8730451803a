use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use racer_lens::{
    CompletionMatch, CompletionProvider, DefinitionLabel, DefinitionProvider, DefinitionResponse, ParseFailure,
    Position, RacerProcess, Settings, SourceRange, build_definition_label, config::SETTINGS_FILE_NAME,
    config::LogLevel, decompose_signature, parse_completion_blob, parse_definition_blob,
};

#[derive(Parser, Debug)]
#[command(name = "racer-lens", version, about)]
struct Args {
    #[arg(long, short, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Settings file; defaults to `racer-lens.toml` in the working directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask racer for completions and print them as suggestions.
    Complete(QueryArgs),
    /// Ask racer for the definition under the cursor.
    Definition(QueryArgs),
    /// Parse captured racer output read from stdin.
    Parse {
        #[arg(long, value_enum)]
        mode: ParseMode,
    },
    /// Decompose a function signature.
    Signature { context: String },
}

#[derive(clap::Args, Debug)]
struct QueryArgs {
    #[arg(long)]
    file: PathBuf,
    /// Zero-based row.
    #[arg(long)]
    row: u32,
    #[arg(long)]
    column: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ParseMode {
    Complete,
    Definition,
}

#[derive(Serialize)]
struct ParseReport<T> {
    results: T,
    failures: Vec<ParseFailure>,
}

fn log_filter(
    verbose: bool,
    level: LogLevel,
) -> EnvFilter {
    if verbose { EnvFilter::new("racer_lens=debug") } else { EnvFilter::new(level.crate_filter()) }
}

fn init_logging(
    args: &Args,
    level: LogLevel,
) {
    let file_layer = args.log_file.as_deref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("racer-lens.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(log_filter(args.verbose, level))
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(log_filter(args.verbose, level));

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

fn print_json(value: &impl Serialize) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn read_buffer(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(e) => {
            error!("Failed to read {}: {e}", path.display());
            None
        }
    }
}

async fn run(
    command: Command,
    settings: Settings,
) -> ExitCode {
    let backend = RacerProcess::new(settings.racer.clone());
    let mut failures: Vec<ParseFailure> = Vec::new();

    match command {
        Command::Complete(query) => {
            let Some(buffer) = read_buffer(&query.file).await else {
                return ExitCode::FAILURE;
            };
            let provider = CompletionProvider::new(backend, settings.completion);
            let position = Position::new(query.row, query.column);
            let results = provider.provide(&query.file, &buffer, position, &mut failures).await;
            print_json(&ParseReport {
                results,
                failures,
            })
        }
        Command::Definition(query) => {
            let Some(buffer) = read_buffer(&query.file).await else {
                return ExitCode::FAILURE;
            };
            let provider = DefinitionProvider::new(backend);
            let position = Position::new(query.row, query.column);
            let range = SourceRange::new(position, position);
            let results = provider.provide(&query.file, &buffer, range, &mut failures).await;
            print_json(&ParseReport {
                results,
                failures,
            })
        }
        Command::Parse {
            mode,
        } => {
            let mut text = String::new();
            if let Err(e) = tokio::io::stdin().read_to_string(&mut text).await {
                error!("Failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
            match mode {
                ParseMode::Complete => {
                    let results: Vec<CompletionMatch> = parse_completion_blob(&text, |m| m, &mut failures);
                    print_json(&ParseReport {
                        results,
                        failures,
                    })
                }
                ParseMode::Definition => {
                    let results: DefinitionResponse<DefinitionLabel> =
                        parse_definition_blob(&text, SourceRange::default(), build_definition_label, &mut failures);
                    print_json(&ParseReport {
                        results,
                        failures,
                    })
                }
            }
        }
        Command::Signature {
            context,
        } => match decompose_signature(&context) {
            Ok(signature) => print_json(&signature),
            Err(e) => {
                error!("Cannot decompose `{context}`: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME));
    let settings = Settings::load(&config_path);
    let level = settings.as_ref().map(|s| s.logging.level).unwrap_or_default();
    init_logging(&args, level);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings from {}: {e}", config_path.display());
            return ExitCode::FAILURE;
        }
    };

    info!("racer-lens v{} using `{}`", env!("CARGO_PKG_VERSION"), settings.racer.command);
    run(args.command, settings).await
}
