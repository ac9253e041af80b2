use anyhow::Context;
use roamstay_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load roamstay settings")?;
    roamstay_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        "roamstay-app starting"
    );

    roamstay_app::server::run(&settings).await
}
