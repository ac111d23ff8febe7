//! A module for parsing the environment variables and initializing the
//! [`Env`] struct.

use clap::Parser;

/// Configuration options for the CLI tool.
///
/// The options can be set by environment variables or command line arguments.
/// The defaults reproduce the stock run: fetch the StakeDAO Curve strategies
/// and overwrite the outputs in the working directory.
#[derive(Debug, Parser)]
pub struct Env {
    /// The log level to use.
    #[clap(long, env, default_value = "DEBUG")]
    pub log_level: tracing::Level,

    /// The URL of the StakeDAO Curve strategies endpoint.
    #[clap(
        long,
        env,
        default_value = "https://api.stakedao.org/api/strategies/v2/curve/"
    )]
    pub strategies_url: String,

    /// The path to write the filtered farms JSON document to.
    #[clap(long, env, default_value = "curve-fraxtal-farms.json")]
    pub json_path: String,

    /// The path to write the generated Markdown table to.
    #[clap(long, env, default_value = "README.md")]
    pub readme_path: String,
}

impl Env {
    /// Read the configuration from the environment and set up logging.
    pub fn init() -> Self {
        dotenv::dotenv().ok();
        let env = Env::parse();
        let env_filter =
            format!("none,fraxtal_farms={log_level}", log_level = &env.log_level);

        tracing_subscriber::fmt()
            .with_max_level(env.log_level)
            .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
            .init();

        env
    }
}
