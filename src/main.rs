use lipo_predict::{AppState, config::Config, handlers};
use log::info;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    info!("Using prediction service at: {}", config.predict_url);
    if config.timeout_secs > 0 {
        info!("Request timeout: {}s", config.timeout_secs);
    } else {
        info!("Request timeout: disabled");
    }

    let state = AppState::new(config).map_err(io::Error::other)?;

    let mut stdout = io::stdout().lock();
    let mut stdin = io::stdin().lock();
    handlers::prompt_and_run(&state, &mut stdin, &mut stdout).await?;
    stdout.flush()
}
