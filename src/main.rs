#![warn(clippy::complexity)]

use ::fraxtal_farms::env::Env;
use ::fraxtal_farms::update_farms;
use ::fraxtal_farms::upstream::real::StakeDaoApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Env::init();
    let upstream = StakeDaoApi::new(&env.strategies_url);

    update_farms(&env, &upstream).await?;

    Ok(())
}
