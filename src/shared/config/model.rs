use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub record: RecordConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct RecordConfig {
    /// Prefer the shared fixed-capacity scratch buffers over per-call
    /// allocation. Disable when a caller re-enters decompression while still
    /// holding a previous result (delta-chain reconstruction).
    pub reuse_buffers: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("PACKSTORE_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .set_default("record.reuse_buffers", true)?
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
