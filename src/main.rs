use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match class_schedule_api::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            ExitCode::FAILURE
        }
    }
}
