use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::batch::BatchProcessor;
use attendance_engine::config::{ConfigLoader, ReportConfig};
use attendance_engine::error::EngineResult;
use attendance_engine::report::OutputFormat;

#[derive(Parser)]
#[command(name = "attendance-report", version, about = "Attendance report generator")]
struct Cli {
    /// YAML configuration file; built-in defaults when omitted
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report next to each attendance sheet
    Process {
        /// Override the configured output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Attendance sheets (CSV)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> EngineResult<ReportConfig> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => Ok(ReportConfig::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Could not load configuration");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Process { format, files } => {
            if let Some(format) = format {
                config.output.format = format.into();
            }
            let summary = BatchProcessor::new(config).run(&files);
            for failure in &summary.failures {
                eprintln!("{}: {}", failure.file.display(), failure.message);
            }
            for output in &summary.overwritten {
                eprintln!("{}: written by more than one sheet", output.display());
            }
            println!(
                "{} of {} files processed",
                summary.succeeded, summary.attempted
            );
            if summary.all_succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Serve { addr } => match serve(config, addr) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(error = %err, "Server stopped");
                ExitCode::FAILURE
            }
        },
    }
}

#[tokio::main]
async fn serve(config: ReportConfig, addr: SocketAddr) -> std::io::Result<()> {
    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, router).await
}
