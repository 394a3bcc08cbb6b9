use anyhow::Result;
use referral_sheet::config::AppConfig;
use referral_sheet::infra::edge;
use referral_sheet::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load_default()?;
    logging::init(&config.log_filter);
    edge::serve(config.edge.bind_addr).await
}
