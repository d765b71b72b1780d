mod cli;
mod infra;
mod routes;
mod score_cmd;
mod server;

use trend_score::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
