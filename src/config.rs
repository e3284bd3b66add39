/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;
use std::fs;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub timing: TimingConfig,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_floors: u8,
    pub steps_per_cycle: u8,
}

/// Durations in milliseconds. A value of 0 disables the pause, which is
/// how the unit tests run without sleeping.
#[derive(Deserialize, Clone)]
pub struct TimingConfig {
    pub step_time: u64,
    pub door_open_time: u64,
    pub door_close_time: u64,
    pub exit_time: u64,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    InvalidFloorCount(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "Failed to read configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration file: {}", e),
            ConfigError::InvalidFloorCount(n) => {
                write!(f, "Invalid floor count {}, must be at least 1", n)
            }
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(ConfigError::Read)?;
    let config: Config = toml::from_str(&config_str).map_err(ConfigError::Parse)?;

    if config.simulation.n_floors < 1 {
        return Err(ConfigError::InvalidFloorCount(config.simulation.n_floors));
    }

    Ok(config)
}
