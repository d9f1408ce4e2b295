mod cli;
mod inspect;
mod search;

use seimei::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
