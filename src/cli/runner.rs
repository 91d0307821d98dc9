use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use logotrim::{TrimParams, trim_file, write_report_sidecar};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn params_from_args(args: &CliArgs) -> TrimParams {
    TrimParams {
        threshold: args.threshold,
        strategy: args.strategy,
        crop: !args.no_crop,
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    run_with(args)?;
    Ok(())
}

/// Execute one trim run without touching the global subscriber.
pub fn run_with(args: CliArgs) -> Result<(), AppError> {
    let input = args.input.clone();
    let output = args.output_path();
    let params = params_from_args(&args);

    if !input.is_file() {
        return Err(AppError::MissingInput { path: input });
    }

    debug!("Parameters: {:?}", params);
    info!("Processing: {:?} -> {:?}", input, output);

    let report = trim_file(&input, &output, &params)?;

    if args.report {
        write_report_sidecar(&output, &report)?;
    }

    info!("Final trimmed image saved to {:?}", output);
    Ok(())
}
