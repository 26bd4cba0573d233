use anyhow::Context;
use folio::configuration::get_configuration;
use folio::startup::build;
use folio::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("folio".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = build(config)?;
    tracing::info!("Backend running on port {}", app.port());
    app.run().await?;

    Ok(())
}
