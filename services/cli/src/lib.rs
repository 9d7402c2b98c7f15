mod cli;
mod render;
mod runner;

use training_report::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
