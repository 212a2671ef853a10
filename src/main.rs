use std::sync::Arc;

use interview_assist::cli;
use interview_assist::config::WizardConfig;
use interview_assist::pipeline::{SubmissionPipeline, TracingObserver};
use interview_assist::remote::HttpCreationClient;
use interview_assist::store::{LibSqlStore, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = WizardConfig::from_env()?;

    eprintln!("📋 Interview Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Service: {}", config.service_url);
    eprintln!("   Session cache: {}", config.db_path.display());
    eprintln!();

    let client = Arc::new(HttpCreationClient::new(&config)?);
    let store: Arc<dyn SessionStore> = Arc::new(LibSqlStore::new_local(&config.db_path).await?);
    let pipeline = Arc::new(SubmissionPipeline::new(
        client,
        store,
        Arc::new(TracingObserver),
    ));

    match cli::run(pipeline).await? {
        Some(confirmation) => {
            println!("{}", confirmation.id);
        }
        None => eprintln!("Cancelled."),
    }

    Ok(())
}
