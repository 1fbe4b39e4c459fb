use std::io::{self, Read, Write};
use std::process::ExitCode;

use rta_draft::services::draft_requests::{handle, DraftRequest};
use rta_draft::{AppError, DraftConfig, PoolOrderRecommender};
use tracing::{error, info};

mod telemetry;

/// Read one JSON request from stdin, write one JSON response to stdout.
///
/// Errors are written as problem details and exit non-zero.
fn main() -> ExitCode {
    telemetry::init_tracing();

    let (body, ok) = match run() {
        Ok(body) => (body, true),
        Err(e) => {
            error!(code = e.code().as_str(), error = %e, "Request failed");
            match serde_json::to_string(&e.problem_details()) {
                Ok(body) => (body, false),
                Err(_) => (format!("{{\"code\":\"{}\"}}", e.code()), false),
            }
        }
    };

    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{body}").is_err() {
        return ExitCode::FAILURE;
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run() -> Result<String, AppError> {
    let config = DraftConfig::from_env()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: DraftRequest = serde_json::from_str(&input)?;

    let response = handle(request, &config, &PoolOrderRecommender::default())?;
    info!("Request handled");
    serde_json::to_string(&response)
        .map_err(|e| AppError::internal(format!("failed to encode response: {e}")))
}
