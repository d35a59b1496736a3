//! promptshelf CLI entrypoint for browsing and curating input prompts.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use promptshelf::{LibraryError, OperationMode, PromptShelfConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), LibraryError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::Browse => cli::browse::run(&config).await,
        OperationMode::Delete => cli::delete::run(&config).await,
        OperationMode::Feedback => cli::feedback::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`LibraryError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PromptShelfConfig, LibraryError> {
    PromptShelfConfig::load().map_err(|error| LibraryError::Configuration {
        message: error.to_string(),
    })
}
