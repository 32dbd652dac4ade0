use rust_bandits_sim::config::AppConfig;
use rust_bandits_sim::errors::RunError;
use rust_bandits_sim::experiment::Experiment;

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RunError> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = Experiment::new(&config).run();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
