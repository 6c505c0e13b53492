//! Command-line front end for the startup idea catalog.

mod cli;
mod commands;
mod infra;

use ideaboard::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
