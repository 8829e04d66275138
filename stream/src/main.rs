//! polycrc - checksum files or stdin with any catalog CRC.
//!
//! Usage: `polycrc [FILE]...`
//!
//! With no arguments, or `-`, standard input is read. The algorithm, chunk
//! size, byte order and output format come from the environment (see
//! [`polycrc_stream::Config`]). Ctrl-C cancels the pending computation.

use polycrc_core::{catalog, AnyCrc};
use polycrc_stream::{
    compute_checksum_async_chunked, CancellationToken, ChecksumReport, Config,
};
use std::process::ExitCode;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env();
    log_startup_info(&config);

    let entry = match catalog::lookup(&config.algorithm) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("polycrc: {e}");
            return ExitCode::from(2);
        }
    };
    let crc = entry.params.algorithm();

    let cancel = CancellationToken::new();
    spawn_ctrl_c_handler(cancel.clone());

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs.push("-".to_string());
    }

    let mut failed = false;
    for input in inputs {
        match checksum_input(&crc, &input, &config, &cancel).await {
            Ok(value) => {
                let report =
                    ChecksumReport::new(entry.name, &crc, &input, value, config.big_endian);
                println!("{}", report.render(config.output));
            }
            Err(e) if e.is_cancelled() => {
                warn!(input = %input, "Cancelled");
                return ExitCode::from(130);
            }
            Err(e) => {
                warn!(input = %input, error = %e, "Failed to checksum input");
                eprintln!("polycrc: {input}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Initialize tracing with environment-based log levels.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("polycrc=info,polycrc_core=info,polycrc_stream=info")
        }))
        .init();
}

/// Log the effective configuration.
fn log_startup_info(config: &Config) {
    info!(
        algorithm = %config.algorithm,
        chunk_size = config.chunk_size,
        big_endian = config.big_endian,
        output = ?config.output,
        "Starting polycrc"
    );
}

/// Cancel pending work on Ctrl-C.
fn spawn_ctrl_c_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling");
            cancel.cancel();
        }
    });
}

/// Checksum one file, or stdin for `-`.
async fn checksum_input(
    crc: &AnyCrc,
    input: &str,
    config: &Config,
    cancel: &CancellationToken,
) -> polycrc_core::Result<u64> {
    if input == "-" {
        let stdin = tokio::io::stdin();
        compute_checksum_async_chunked(crc, stdin, cancel, config.chunk_size).await
    } else {
        let file = tokio::fs::File::open(input).await?;
        compute_checksum_async_chunked(crc, file, cancel, config.chunk_size).await
    }
}
