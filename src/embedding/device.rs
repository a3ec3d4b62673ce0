use std::fmt;
use std::str::FromStr;

use candle_core::Device;
use serde::Serialize;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;
use crate::config::ConfigError;

/// Which compute device the sentence encoder may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreference {
    /// First GPU backend compiled in and available, else CPU.
    #[default]
    Auto,
    Cpu,
}

impl fmt::Display for DevicePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevicePreference::Auto => f.write_str("auto"),
            DevicePreference::Cpu => f.write_str("cpu"),
        }
    }
}

impl FromStr for DevicePreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DevicePreference::Auto),
            "cpu" => Ok(DevicePreference::Cpu),
            _ => Err(ConfigError::InvalidChoice {
                value: s.to_string(),
                expected: "auto, cpu",
            }),
        }
    }
}

/// Selects the compute device (falls back to CPU).
pub fn select_device(preference: DevicePreference) -> Result<Device, EmbeddingError> {
    if preference == DevicePreference::Cpu {
        debug!("CPU device requested");
        return Ok(Device::Cpu);
    }

    #[cfg(any(feature = "metal", feature = "cuda"))]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    let failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            return Ok(device);
        }
        Err(e) => failures.push(format!("metal failed: {e}")),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            return Ok(device);
        }
        Err(e) => failures.push(format!("cuda failed: {e}")),
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, using CPU");
    } else {
        warn!(reason = %failures.join("; "), "Falling back to CPU device");
    }

    Ok(Device::Cpu)
}
