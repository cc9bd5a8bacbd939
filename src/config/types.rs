use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every field has a default, so the config file is optional and there are
/// no command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Override for the state file location. Defaults to the platform data
    /// directory when absent.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Debounce window for storage deliveries in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_tick_ms() -> u64 {
    250
}

fn default_debounce_ms() -> u64 {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            tick_ms: default_tick_ms(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
