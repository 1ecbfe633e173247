//! Character sheet player - terminal composition root.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charsheet_player::infrastructure::{ClientConfig, HttpLookupClient, MemoryPage, OfflineLookup};
use charsheet_player::ports::outbound::{LookupPort, PagePort};
use charsheet_player::runner::{self, RunnerDeps};
use charsheet_player::PageSession;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsheet_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting character sheet player");

    let config = ClientConfig::from_env();
    let port: Arc<dyn LookupPort> = match &config.api_url {
        Some(url) => {
            tracing::info!(api_url = %url, timeout_ms = config.request_timeout_ms(), "Using backend");
            Arc::new(HttpLookupClient::new(url.clone(), config.request_timeout))
        }
        None => {
            tracing::info!("No CHARSHEET_API_URL set, rolling dice offline");
            Arc::new(OfflineLookup::new())
        }
    };

    let page = Arc::new(MemoryPage::new());
    let page_port: Arc<dyn PagePort> = page.clone();
    let session = PageSession::new(page_port, port, config.request_timeout);

    runner::run(RunnerDeps { session, page }).await
}
