use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use domcheck::{CheckParams, Source, check_source, write_report};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn assert_file_exists(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

fn assert_url_format(url: &str) -> Result<String, AppError> {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidUrl {
            url: url.to_string(),
        });
    }
    Ok(url.to_string())
}

/// Validate the parsed arguments and turn them into `CheckParams`.
/// `--file` takes priority over `--url`.
pub fn resolve_params(args: &CliArgs) -> Result<CheckParams, AppError> {
    let source = if let Some(file) = &args.file {
        Source::File(assert_file_exists(file)?)
    } else if let Some(url) = &args.url {
        Source::Url(assert_url_format(url)?)
    } else {
        return Err(AppError::NoSource);
    };

    let checks = assert_file_exists(&args.checks)?;
    Ok(CheckParams { checks, source })
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }
    debug!("Arguments: {:?}", args);

    let params = resolve_params(&args)?;
    let results = check_source(&params)?;
    write_report(io::stdout().lock(), &results)?;

    info!("Reported {} checks for {}", results.len(), params.source);
    Ok(())
}
