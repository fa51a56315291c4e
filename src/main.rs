//! Broadcast multiplex runner
//!
//! Plans the 16-track playout multiplex for a job file and runs FFmpeg,
//! or prints the argument list as JSON with `--dry-run`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use broadcast_mux::config::LoggingConfig;
use broadcast_mux::config_file::{generate_example_job, JobFile};
use broadcast_mux::error::{MuxError, Result};
use broadcast_mux::ffmpeg::{validate_sources, FfmpegExecutor, FfmpegProbe, GraphExecutor};
use broadcast_mux::plan_multiplex;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "broadcast-mux";

/// Exit code for bad input (job file, configuration, usage)
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug, Clone)]
#[command(name = "broadcast-mux")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Job file (TOML) describing video, audio files and fallback language
    #[arg(required_unless_present = "example")]
    job: Option<PathBuf>,

    /// Print the FFmpeg invocation as JSON instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Write an example job file to this path and exit
    #[arg(long, value_name = "PATH", conflicts_with_all = ["job", "dry_run"])]
    example: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.example {
        return match generate_example_job(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {}", APP_NAME, e);
                ExitCode::FAILURE
            }
        };
    }

    let Some(job_path) = args.job.as_ref() else {
        eprintln!("{}: no job file given", APP_NAME);
        return ExitCode::from(EXIT_USAGE);
    };

    let job = match JobFile::from_file(job_path) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("{}: failed to load {}: {}", APP_NAME, job_path.display(), e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_logging(&job.logging_config());
    tracing::info!("{} v{} starting", APP_NAME, VERSION);

    let job_id = Uuid::new_v4();
    let span = tracing::info_span!("job", id = %job_id, file = %job_path.display());

    match run(job, args.dry_run).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_engine_defect() {
                tracing::error!("Engine defect: {}", e);
            } else {
                tracing::error!("{}", e);
            }
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Configuration problems exit with the usage code, everything else with 1
fn exit_code_for(error: &MuxError) -> u8 {
    if error.is_configuration() {
        EXIT_USAGE
    } else {
        1
    }
}

async fn run(job: JobFile, dry_run: bool) -> Result<()> {
    let request = job.to_request();
    let config = job.mux_config();
    let plan = plan_multiplex(&request, &config)?;

    if dry_run {
        let json = serde_json::to_string_pretty(&plan.command)
            .map_err(|e| MuxError::Serialize(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    let probe = FfmpegProbe::new()?;
    tracing::info!("FFmpeg version: {}", broadcast_mux::ffmpeg::version_info());
    validate_sources(&probe, &plan)?;

    let report = FfmpegExecutor::new()
        .execute(&plan.command, |progress| {
            if let Some(out_time) = progress.out_time() {
                tracing::info!(
                    "Progress: {:.1}s written, speed {}",
                    out_time.as_secs_f64(),
                    progress
                        .speed
                        .map(|s| format!("{:.2}x", s))
                        .unwrap_or_else(|| "n/a".to_string())
                );
            }
        })
        .await?;

    tracing::info!("Done: {:?}", report.output);
    Ok(())
}

/// Initialize logging with tracing
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("broadcast_mux={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
