mod model;
mod error;
use error::MatsinkError;
mod config;
use config::Config;
mod load;
mod db;
use log::info;

const CONFIG_FILENAME: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<(), MatsinkError> {

    env_logger::init();

    // Load config
    let config = Config::from_file(CONFIG_FILENAME);

    // Decode the recording
    let decoded = load::load_mat(
        &config.input_path,
        config.samples_var.as_deref(),
        config.speed_var.as_deref(),
    )?;
    info!(
        "Decoded {}: {} samples, rotation speed {}",
        config.input_path,
        decoded.samples.len(),
        decoded.speed,
    );

    // Persist one history row
    db::save_history(
        &config.db_path,
        &config.device_id,
        &decoded,
        config.sampling_rate,
    ).await?;
    info!("Committed history row for device {}", config.device_id);

    Ok(())

}
