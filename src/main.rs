use marquee_lib::shared::utils::init_logger;
use marquee_lib::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env()?;
    marquee_lib::run(config).await
}
